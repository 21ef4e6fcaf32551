use core::iter::FusedIterator;

use crate::validation::core::Validation;
use crate::validation::errors::Errors;

/// Borrowing iterator over the valid value, yielding at most one item.
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<A> FusedIterator for Iter<'_, A> {}

/// Mutable iterator over the valid value, yielding at most one item.
pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<A> FusedIterator for IterMut<'_, A> {}

/// Owning iterator over the valid value, yielding at most one item.
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<A> FusedIterator for IntoIter<A> {}

impl<E, A> IntoIterator for Validation<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Validation<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E, A> Validation<E, A> {
    pub fn iter(&self) -> Iter<'_, A> {
        match self {
            Validation::Valid(a) => Iter { inner: Some(a) },
            Validation::Invalid(_) => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Validation::Valid(a) => IterMut { inner: Some(a) },
            Validation::Invalid(_) => IterMut { inner: None },
        }
    }

    /// Iterates over accumulated errors in the order they were reported.
    pub fn iter_errors(&self) -> impl Iterator<Item = &E> + '_ {
        self.errors().into_iter().flat_map(Errors::iter)
    }

    /// Mutable counterpart of [`iter_errors`](Validation::iter_errors).
    pub fn iter_errors_mut(&mut self) -> impl Iterator<Item = &mut E> + '_ {
        let errors = match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        };
        errors.into_iter().flat_map(Errors::iter_mut)
    }

    /// The error list, if invalid.
    #[inline]
    pub fn errors(&self) -> Option<&Errors<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}
