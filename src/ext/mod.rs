//! Helpers that lift the "maybe absent" outcomes of iterator aggregation,
//! slice lookup and string slicing into `Option`, `Result` and `Validation`.
//!
//! # Examples
//!
//! ```
//! use value_rail::ext::{ResultIterExt, SliceExt, StrExt};
//!
//! let raw = ["1", "2", "x"];
//! let parsed: Result<Vec<i32>, _> = raw.iter().map(|s| s.parse::<i32>()).collect_ok();
//! assert!(parsed.is_err());
//!
//! assert_eq!(raw.index_of(&"x"), Some(2));
//! assert_eq!("abc".char_at(5), None);
//! ```

pub mod iter;
#[cfg(feature = "regex")]
pub mod regex;
pub mod slice;
pub mod string;

pub use iter::{OptionIterExt, ResultIterExt};
#[cfg(feature = "regex")]
pub use self::regex::RegexExt;
pub use slice::SliceExt;
pub use string::StrExt;
