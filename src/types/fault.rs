use alloc::string::{String, ToString};
use core::any::Any;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A panic captured by [`catching`](crate::catching::catching).
///
/// Only the panic message survives capture. Payloads that are neither `&str`
/// nor `String` are reported with a placeholder message.
///
/// # Examples
///
/// ```
/// use value_rail::catching;
///
/// let fault = catching(|| -> i32 { panic!("disk on fire") }).unwrap_err();
/// assert_eq!(fault.message(), "disk on fire");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Placeholder used when the panic payload carries no readable message.
    pub const OPAQUE_PAYLOAD: &'static str = "panic with a non-string payload";

    /// Creates a fault from a message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Builds a fault from a payload returned by `std::panic::catch_unwind`.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            Self::OPAQUE_PAYLOAD.to_string()
        };
        Self { message }
    }

    /// The captured panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the fault, returning its message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl std::error::Error for Fault {}
