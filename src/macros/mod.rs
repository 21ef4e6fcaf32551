//! Ergonomic macros for rule-based validation.
//!
//! - [`macro@crate::validate_all`] - Runs a list of rule closures against one value and
//!   accumulates every failure, without coercing each rule to a trait object first.
//!
//! # Examples
//!
//! ```
//! use value_rail::validate_all;
//!
//! let result = validate_all!("hunter2",
//!     |p: &&str| if p.len() >= 8 { Ok(()) } else { Err("too short") },
//!     |p: &&str| if p.chars().any(char::is_uppercase) { Ok(()) } else { Err("no uppercase") },
//!     |p: &&str| if p.chars().any(|c| c.is_ascii_digit()) { Ok(()) } else { Err("no digit") },
//! );
//!
//! assert_eq!(result.unwrap_err().as_slice(), ["too short", "no uppercase"]);
//! ```

/// Checks a value against every rule, accumulating the errors of all failing rules.
///
/// Expands to the same logic as [`validate_all`](crate::validation::validate_all):
/// rules run once each, in the order written, and the result is
/// `Ok(value)` or `Err(ErrorVec)` holding the failures in that same order.
/// Each rule is any expression callable as `Fn(&T) -> Result<(), E>`.
///
/// # Syntax
///
/// - `validate_all!(value, rule, ...)`
///
/// # Examples
///
/// ```
/// use value_rail::validate_all;
///
/// fn positive(x: &i32) -> Result<(), String> {
///     if *x > 0 { Ok(()) } else { Err(format!("{x} is not positive")) }
/// }
///
/// let ok = validate_all!(5, positive, |x: &i32| if *x < 10 { Ok(()) } else { Err("big".to_string()) });
/// assert_eq!(ok, Ok(5));
/// ```
#[macro_export]
macro_rules! validate_all {
    ($value:expr, $($rule:expr),+ $(,)?) => {{
        let value = $value;
        let mut errors = $crate::ErrorVec::new();
        $(
            if let ::core::result::Result::Err(error) = ($rule)(&value) {
                errors.push(error);
            }
        )+
        if errors.is_empty() {
            ::core::result::Result::Ok(value)
        } else {
            ::core::result::Result::Err(errors)
        }
    }};
}
