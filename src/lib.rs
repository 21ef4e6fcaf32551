//! Combinators, validation and interop helpers over [`Option`] and [`Result`].
//!
//! The two sum types themselves are the ones from `core`: closed, unboxed and
//! exhaustively matchable. This crate fills in the combinators the standard
//! library leaves out, makes the `Option<T>` ≅ `Result<T, Absent>` isomorphism
//! explicit, and adds an accumulating [`Validation`] next to the fail-fast
//! `Result` chain.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `value_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Combinators
//!
//! ```
//! use value_rail::{OptionExt, ResultExt};
//!
//! let area = Some(3).zip_with(Some(4), |w, h| w * h);
//! assert_eq!(area, Some(12));
//!
//! let label = Ok::<i32, &str>(7).match_with(|v| format!("ok {v}"), |e| format!("err {e}"));
//! assert_eq!(label, "ok 7");
//!
//! let even = Ok::<i32, &str>(3).filter(|v| v % 2 == 0, "odd");
//! assert_eq!(even, Err("odd"));
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use value_rail::validation::Validate;
//!
//! let positive = |x: &i32| if *x > 0 { Ok(()) } else { Err("not positive") };
//! let even = |x: &i32| if x % 2 == 0 { Ok(()) } else { Err("not even") };
//! let small = |x: &i32| if *x < 100 { Ok(()) } else { Err("too large") };
//!
//! let errors = (-3_i32).validate_all(&[&positive, &even, &small]).unwrap_err();
//! assert_eq!(errors.as_slice(), ["not positive", "not even"]);
//! ```
//!
//! ## Collecting Results
//!
//! ```
//! use value_rail::ResultIterExt;
//!
//! let inputs = vec![Ok(1), Err("a"), Ok(2), Err("b")];
//! let (oks, errs) = inputs.into_iter().partition_results();
//! assert_eq!(oks, vec![1, 2]);
//! assert_eq!(errs, vec!["a", "b"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Panic capture into `Result` (requires `std` feature)
#[cfg(feature = "std")]
pub mod catching;
/// Conversions between Option, Result and Validation
pub mod convert;
/// Option-, Result- and Validation-returning helpers over iterators, slices and strings
pub mod ext;
/// Macros for rule-based validation
pub mod macros;
/// Fallible string parsing into Option and Result
pub mod parse;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits over Option and Result
pub mod traits;
/// Marker and error types used across the crate
pub mod types;
/// Validation type and rule checking for error accumulation
pub mod validation;

/// Logging hooks for absent values and errors (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[cfg(feature = "std")]
pub use catching::{catching, catching_into};
pub use convert::*;
pub use ext::{OptionIterExt, ResultIterExt, SliceExt, StrExt};
pub use parse::{NamedVariant, ParseExt};
pub use traits::*;
pub use types::{Absent, ErrorVec, IndexOutOfBounds, UnknownVariant};
pub use validation::*;

#[cfg(feature = "std")]
pub use types::Fault;
#[cfg(feature = "regex")]
pub use ext::RegexExt;
#[cfg(feature = "tracing")]
pub use tracing_ext::TraceExt;
