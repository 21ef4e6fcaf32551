/// Character-indexed and search helpers on `str` that return `Option`.
///
/// Indices are counted in `char`s, not bytes, so none of these can land in
/// the middle of a UTF-8 sequence.
///
/// # Examples
///
/// ```
/// use value_rail::StrExt;
///
/// let word = "héllo";
/// assert_eq!(word.char_at(1), Some('é'));
/// assert_eq!(word.substring(1, 3), Some("éll"));
/// assert_eq!(word.substring(4, 2), None);
///
/// assert_eq!("key=value".before("="), Some("key"));
/// assert_eq!("key=value".after("="), Some("value"));
/// assert_eq!("   ".non_blank(), None);
/// ```
pub trait StrExt {
    /// The `index`-th character.
    fn char_at(&self, index: usize) -> Option<char>;

    /// `len` characters starting at character `start`; `None` if the range
    /// runs past the end.
    fn substring(&self, start: usize, len: usize) -> Option<&str>;

    /// `None` for the empty string.
    fn non_empty(&self) -> Option<&str>;

    /// `None` for strings that are empty or whitespace only.
    fn non_blank(&self) -> Option<&str>;

    /// Text before the first occurrence of `pat`.
    fn before(&self, pat: &str) -> Option<&str>;

    /// Text after the first occurrence of `pat`.
    fn after(&self, pat: &str) -> Option<&str>;
}

impl StrExt for str {
    #[inline]
    fn char_at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }

    fn substring(&self, start: usize, len: usize) -> Option<&str> {
        let from = byte_offset(self, start)?;
        let to = byte_offset(&self[from..], len)? + from;
        Some(&self[from..to])
    }

    #[inline]
    fn non_empty(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }

    #[inline]
    fn non_blank(&self) -> Option<&str> {
        (!self.trim().is_empty()).then_some(self)
    }

    #[inline]
    fn before(&self, pat: &str) -> Option<&str> {
        self.split_once(pat).map(|(head, _)| head)
    }

    #[inline]
    fn after(&self, pat: &str) -> Option<&str> {
        self.split_once(pat).map(|(_, tail)| tail)
    }
}

// Byte offset of the `chars`-th character, or of the end when `chars`
// equals the character count.
fn byte_offset(text: &str, chars: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(core::iter::once(text.len()))
        .nth(chars)
}
