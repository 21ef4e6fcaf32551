use crate::types::IndexOutOfBounds;

/// Lookups on slices that report absence instead of panicking.
///
/// # Examples
///
/// ```
/// use value_rail::{IndexOutOfBounds, SliceExt};
///
/// let items = [3, 1, 4, 1, 5];
/// assert_eq!(items.index_of(&1), Some(1));
/// assert_eq!(items.last_index_of(&1), Some(3));
/// assert_eq!(items.single_where(|v| *v > 4), Some(&5));
/// assert_eq!(items.single_where(|v| *v == 1), None);
/// assert_eq!(items.try_get(9), Err(IndexOutOfBounds { index: 9, len: 5 }));
/// assert_eq!(items.max_opt(), Some(&5));
/// ```
pub trait SliceExt<T> {
    /// The only element, or `None` when the slice is empty or has several.
    fn single(&self) -> Option<&T>;

    /// The only element matching `pred`, or `None` for zero or several matches.
    fn single_where<P>(&self, pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Position of the first element equal to `needle`.
    fn index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Position of the last element equal to `needle`.
    fn last_index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Element at `index`, or the failed lookup as an error.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Smallest element; the first one wins on ties.
    fn min_opt(&self) -> Option<&T>
    where
        T: Ord;

    /// Largest element; the last one wins on ties.
    fn max_opt(&self) -> Option<&T>
    where
        T: Ord;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn single(&self) -> Option<&T> {
        match self {
            [only] => Some(only),
            _ => None,
        }
    }

    fn single_where<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.iter().filter(|item| pred(*item));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Some(found),
            _ => None,
        }
    }

    #[inline]
    fn index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == needle)
    }

    #[inline]
    fn last_index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == needle)
    }

    #[inline]
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds { index, len: self.len() })
    }

    #[inline]
    fn min_opt(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().min()
    }

    #[inline]
    fn max_opt(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().max()
    }
}
