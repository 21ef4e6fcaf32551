//! Capture-group lookups that return `Option` (requires `regex` feature).

use core::str::FromStr;

use regex::Regex;

/// Compiles `pattern`, keeping the syntax error instead of panicking.
///
/// # Examples
///
/// ```
/// use value_rail::ext::regex::compile;
///
/// assert!(compile(r"\d+").is_ok());
/// assert!(compile(r"(unclosed").is_err());
/// ```
#[inline]
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)
}

/// Option-returning capture helpers on [`Regex`].
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use value_rail::ext::RegexExt;
///
/// let re = Regex::new(r"(?P<key>\w+)=(?P<value>\d+)").unwrap();
/// assert_eq!(re.capture("retries=3", 1), Some("retries"));
/// assert_eq!(re.capture_named("retries=3", "value"), Some("3"));
/// assert_eq!(re.parse_capture::<u32>("retries=3", 2), Some(3));
/// assert_eq!(re.capture("no match here", 1), None);
/// ```
pub trait RegexExt {
    /// Text of group `group` in the first match.
    fn capture<'t>(&self, text: &'t str, group: usize) -> Option<&'t str>;

    /// Text of the named group in the first match.
    fn capture_named<'t>(&self, text: &'t str, name: &str) -> Option<&'t str>;

    /// Group `group` of the first match, parsed with [`FromStr`].
    fn parse_capture<T: FromStr>(&self, text: &str, group: usize) -> Option<T>;
}

impl RegexExt for Regex {
    fn capture<'t>(&self, text: &'t str, group: usize) -> Option<&'t str> {
        self.captures(text)?.get(group).map(|m| m.as_str())
    }

    fn capture_named<'t>(&self, text: &'t str, name: &str) -> Option<&'t str> {
        self.captures(text)?.name(name).map(|m| m.as_str())
    }

    fn parse_capture<T: FromStr>(&self, text: &str, group: usize) -> Option<T> {
        self.capture(text, group)?.parse().ok()
    }
}
