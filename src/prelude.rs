//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use value_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`validate_all!`]
//! - **Types**: [`Absent`], [`Validation`], [`ErrorVec`]
//! - **Traits**: [`OptionExt`], [`ResultExt`], [`FlattenResult`], [`AbsentExt`],
//!   [`Validate`], [`ParseExt`], [`ResultIterExt`], [`OptionIterExt`],
//!   [`SliceExt`], [`StrExt`]
//!
//! # Examples
//!
//! ```
//! use value_rail::prelude::*;
//!
//! fn parse_age(raw: &str) -> Result<u8, String> {
//!     raw.parse_trimmed::<u8>()
//!         .ok_or_else(|| format!("'{raw}' is not a number"))
//!         .filter_with(|age| *age <= 150, |age| format!("{age} is not a plausible age"))
//! }
//!
//! assert_eq!(parse_age(" 42 "), Ok(42));
//! assert!(parse_age("200").is_err());
//! ```

// Macros
pub use crate::validate_all;

// Core types
pub use crate::types::{Absent, ErrorVec};
pub use crate::validation::Validation;

// Traits
pub use crate::ext::{OptionIterExt, ResultIterExt, SliceExt, StrExt};
pub use crate::parse::ParseExt;
pub use crate::traits::{AbsentExt, FlattenResult, OptionExt, ResultExt};
pub use crate::validation::Validate;

#[cfg(feature = "std")]
pub use crate::catching::catching;
