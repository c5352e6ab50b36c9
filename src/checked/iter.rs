use crate::checked::core::Checked;
use crate::types::Error;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for Checked<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Checked<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Checked<T> {
    /// Iterates over the value, yielding at most one item.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    /// Iterates over the accumulated errors, in insertion order.
    ///
    /// Yields nothing for a valid outcome.
    pub fn iter_errors(&self) -> impl Iterator<Item = &Error> {
        match self {
            Checked::Valid(_) => [].iter(),
            Checked::Invalid(errors) => errors.errors().iter(),
        }
    }
}
