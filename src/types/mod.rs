//! Marker and error types shared by the combinator, validation and
//! conversion modules.
//!
//! # Examples
//!
//! ```
//! use value_rail::{Absent, OptionExt};
//!
//! let missing: Option<i32> = None;
//! assert_eq!(missing.into_result(), Err(Absent));
//! ```
use smallvec::SmallVec;

pub mod absent;
#[cfg(feature = "std")]
pub mod fault;
pub mod lookup;

pub use absent::*;
#[cfg(feature = "std")]
pub use fault::*;
pub use lookup::*;

/// SmallVec-backed collection used for accumulating validation errors.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case where only one or two rules fail.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
