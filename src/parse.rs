//! Fallible string parsing that lands in `Option` or `Result`.
//!
//! Conversion failures are values here: nothing in this module panics, and
//! every rejected input surfaces as `None` or `Err`.
//!
//! # Examples
//!
//! ```
//! use value_rail::ParseExt;
//!
//! assert_eq!("42".parse_some::<u8>(), Some(42));
//! assert_eq!("420".parse_some::<u8>(), None);
//! assert!("x".parse_ok::<i64>().is_err());
//! assert_eq!(" 7 ".parse_trimmed::<i32>(), Some(7));
//! assert_eq!("Yes".parse_bool_loose(), Some(true));
//! ```

use alloc::string::ToString;
use core::str::FromStr;

use crate::types::UnknownVariant;

const TRUE_WORDS: [&str; 4] = ["true", "yes", "on", "1"];
const FALSE_WORDS: [&str; 4] = ["false", "no", "off", "0"];

/// A fieldless enum whose variants can be looked up by name.
///
/// # Examples
///
/// ```
/// use value_rail::{NamedVariant, ParseExt};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl NamedVariant for Level {
///     const VARIANTS: &'static [Self] = &[Level::Low, Level::High];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Level::Low => "Low",
///             Level::High => "High",
///         }
///     }
/// }
///
/// assert_eq!("High".parse_variant::<Level>(), Ok(Level::High));
/// assert_eq!("high".parse_variant_ignore_case::<Level>(), Ok(Level::High));
/// assert!("high".parse_variant::<Level>().is_err());
/// ```
pub trait NamedVariant: Sized + Clone + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The name a variant is parsed from.
    fn name(&self) -> &'static str;
}

/// Parsing helpers on string slices.
pub trait ParseExt {
    /// Parses with [`FromStr`], discarding the error.
    fn parse_some<T: FromStr>(&self) -> Option<T>;

    /// Parses with [`FromStr`], keeping the error.
    fn parse_ok<T: FromStr>(&self) -> Result<T, T::Err>;

    /// Parses after trimming surrounding whitespace.
    fn parse_trimmed<T: FromStr>(&self) -> Option<T>;

    /// Accepts `true`/`yes`/`on`/`1` and `false`/`no`/`off`/`0`,
    /// ignoring ASCII case and surrounding whitespace.
    fn parse_bool_loose(&self) -> Option<bool>;

    /// Finds the variant whose name matches exactly.
    fn parse_variant<V: NamedVariant>(&self) -> Result<V, UnknownVariant>;

    /// Finds the variant whose name matches, ignoring ASCII case.
    fn parse_variant_ignore_case<V: NamedVariant>(&self) -> Result<V, UnknownVariant>;
}

impl ParseExt for str {
    #[inline]
    fn parse_some<T: FromStr>(&self) -> Option<T> {
        self.parse().ok()
    }

    #[inline]
    fn parse_ok<T: FromStr>(&self) -> Result<T, T::Err> {
        self.parse()
    }

    #[inline]
    fn parse_trimmed<T: FromStr>(&self) -> Option<T> {
        self.trim().parse().ok()
    }

    fn parse_bool_loose(&self) -> Option<bool> {
        let word = self.trim();
        if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            Some(true)
        } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            Some(false)
        } else {
            None
        }
    }

    fn parse_variant<V: NamedVariant>(&self) -> Result<V, UnknownVariant> {
        find_variant(self, |name| name == self)
    }

    fn parse_variant_ignore_case<V: NamedVariant>(&self) -> Result<V, UnknownVariant> {
        find_variant(self, |name| name.eq_ignore_ascii_case(self))
    }
}

fn find_variant<V, F>(input: &str, matches: F) -> Result<V, UnknownVariant>
where
    V: NamedVariant,
    F: Fn(&str) -> bool,
{
    V::VARIANTS
        .iter()
        .find(|variant| matches(variant.name()))
        .cloned()
        .ok_or_else(|| UnknownVariant {
            input: input.to_string(),
            type_name: core::any::type_name::<V>(),
        })
}
