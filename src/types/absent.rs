use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error payload carrying no information: the value simply was not there.
///
/// `Absent` is the unit error that makes `Option<T>` and `Result<T, Absent>`
/// interchangeable without loss. Converting `None` yields `Err(Absent)` and
/// converting `Err(Absent)` yields `None`.
///
/// # Examples
///
/// ```
/// use value_rail::{Absent, AbsentExt, OptionExt};
///
/// let found = Some(3).into_result();
/// assert_eq!(found, Ok(3));
/// assert_eq!(found.into_option(), Some(3));
///
/// let lost: Result<i32, Absent> = None.into_result();
/// assert_eq!(lost.into_option(), None);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Absent;

impl Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value was absent")
    }
}

impl core::error::Error for Absent {}

impl From<()> for Absent {
    #[inline]
    fn from(_: ()) -> Self {
        Absent
    }
}

impl From<Absent> for () {
    #[inline]
    fn from(_: Absent) -> Self {}
}
