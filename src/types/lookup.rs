use alloc::string::String;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index lookup past the end of a slice.
///
/// Returned by [`SliceExt::try_get`](crate::ext::SliceExt::try_get).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl core::error::Error for IndexOutOfBounds {}

/// Input text that names none of a type's variants.
///
/// Returned by [`ParseExt::parse_variant`](crate::parse::ParseExt::parse_variant).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownVariant {
    pub input: String,
    pub type_name: &'static str,
}

impl Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a variant of {}", self.input, self.type_name)
    }
}

impl core::error::Error for UnknownVariant {}
