use core::iter::{self, Chain, Once};
use core::slice;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::ErrorVec;

/// The errors of an invalid [`Validation`](crate::validation::Validation).
///
/// Always holds at least one error: the first one is stored on its own, so
/// every way of building an `Errors` has to supply it. Errors keep the order
/// in which they were reported.
///
/// # Serde Support
///
/// Serializes as a plain sequence. Deserializing an empty sequence fails.
///
/// # Examples
///
/// ```
/// use value_rail::validation::Errors;
///
/// let mut errors = Errors::new("missing name");
/// errors.push("missing email");
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &"missing name");
///
/// assert!(Errors::<&str>::from_vec(Default::default()).is_none());
/// ```
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Errors<E> {
    first: E,
    rest: ErrorVec<E>,
}

#[allow(clippy::len_without_is_empty)]
impl<E> Errors<E> {
    /// Starts a list with its first error.
    #[inline]
    pub fn new(first: E) -> Self {
        Self { first, rest: ErrorVec::new() }
    }

    /// Takes over `errors`, or returns `None` when it is empty.
    pub fn from_vec(errors: ErrorVec<E>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = errors.next()?;
        Some(Self { first, rest: errors.collect() })
    }

    /// Appends an error.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.rest.push(error);
    }

    /// The error reported first.
    #[inline]
    pub fn first(&self) -> &E {
        &self.first
    }

    /// Consumes the list, keeping only the error reported first.
    #[inline]
    pub fn into_first(self) -> E {
        self.first
    }

    /// Number of errors; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Iterates over the errors in report order.
    pub fn iter(&self) -> Chain<Once<&E>, slice::Iter<'_, E>> {
        iter::once(&self.first).chain(self.rest.iter())
    }

    /// Iterates mutably over the errors in report order.
    pub fn iter_mut(&mut self) -> Chain<Once<&mut E>, slice::IterMut<'_, E>> {
        iter::once(&mut self.first).chain(self.rest.iter_mut())
    }

    /// Maps every error, keeping the order.
    pub fn map<G, F>(self, mut f: F) -> Errors<G>
    where
        F: FnMut(E) -> G,
    {
        let first = f(self.first);
        Errors { first, rest: self.rest.into_iter().map(f).collect() }
    }

    /// Flattens into an [`ErrorVec`].
    pub fn into_vec(self) -> ErrorVec<E> {
        let mut errors = ErrorVec::with_capacity(self.len());
        errors.push(self.first);
        errors.extend(self.rest);
        errors
    }
}

impl<E> Extend<E> for Errors<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.rest.extend(iter);
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = Chain<Once<E>, smallvec::IntoIter<[E; 2]>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.first).chain(self.rest)
    }
}

impl<'a, E> IntoIterator for &'a Errors<E> {
    type Item = &'a E;
    type IntoIter = Chain<Once<&'a E>, slice::Iter<'a, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> From<Errors<E>> for ErrorVec<E> {
    #[inline]
    fn from(errors: Errors<E>) -> Self {
        errors.into_vec()
    }
}

#[cfg(feature = "serde")]
impl<E: Serialize> Serialize for Errors<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: Deserialize<'de>> Deserialize<'de> for Errors<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let errors = ErrorVec::<E>::deserialize(deserializer)?;
        Self::from_vec(errors)
            .ok_or_else(|| de::Error::invalid_length(0, &"at least one error"))
    }
}
