//! Extension traits over `Option` and `Result`.
//!
//! - [`OptionExt`]: `zip_with`, `match_with`, `inspect_none`, `into_result`
//! - [`ResultExt`]: `filter`, `select`, `select_many`, `match_with`, `bimap`, `swap`
//! - [`FlattenResult`]: one-level flattening of nested results
//! - [`Lift`], [`InfallibleExt`], [`InfallibleErrExt`]: values lifted over
//!   an uninhabited channel and extracted back without a panic path
//! - [`AbsentExt`]: `Result<T, Absent>` back to `Option<T>`
//! - [`WithError`]: abstraction for types that carry remappable error variants
//!
//! # Examples
//!
//! ```
//! use value_rail::traits::{OptionExt, ResultExt, AbsentExt};
//!
//! let doubled = Some(21).into_result().select(|v| v * 2).into_option();
//! assert_eq!(doubled, Some(42));
//! ```

pub mod lift;
pub mod option_ext;
pub mod result_ext;
pub mod with_error;

pub use lift::{AbsentExt, InfallibleErrExt, InfallibleExt, Lift};
pub use option_ext::OptionExt;
pub use result_ext::{FlattenResult, ResultExt};
pub use with_error::WithError;
