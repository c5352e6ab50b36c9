use crate::types::accumulator::Accumulator;
use crate::types::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of validation errors for one value.
///
/// The bag preserves insertion order through every operation, and every
/// mutator consumes `self` and returns a new bag. Its [`Display`] rendering
/// joins the messages with `"; "`, and callers format user-facing text from
/// that exact output.
///
/// [`Display`]: core::fmt::Display
///
/// # Examples
///
/// ```
/// use validrail::{Error, ErrorsBag};
///
/// let bag = ErrorsBag::empty()
///     .add(Error::new("too short"))
///     .add(Error::new("missing digit"));
///
/// assert_eq!(bag.len(), 2);
/// assert_eq!(bag.to_string(), "too short; missing digit");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorsBag {
    errors: Accumulator<Error>,
}

impl ErrorsBag {
    /// Creates an empty bag.
    #[inline]
    pub fn empty() -> Self {
        Self {
            errors: Accumulator::new(),
        }
    }

    /// Creates a bag holding a single error.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self {
            errors: core::iter::once(error).collect(),
        }
    }

    /// Creates a bag from an ordered sequence of messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::ErrorsBag;
    ///
    /// let bag = ErrorsBag::from_messages(["first", "second"]);
    /// assert_eq!(bag.len(), 2);
    /// ```
    #[inline]
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Error>,
    {
        Self {
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends one error, returning the extended bag.
    #[inline]
    pub fn add(mut self, error: Error) -> Self {
        self.errors.push(error);
        self
    }

    /// Concatenates `other` onto `self`, preserving both insertion orders.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::ErrorsBag;
    ///
    /// let a = ErrorsBag::from_messages(["a1", "a2"]);
    /// let b = ErrorsBag::from_messages(["b1"]);
    /// assert_eq!(a.add_all(b).to_string(), "a1; a2; b1");
    /// ```
    #[inline]
    pub fn add_all(mut self, other: ErrorsBag) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Returns the errors in insertion order.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        self.errors.as_slice()
    }

    /// Returns an iterator over the error messages in insertion order.
    #[inline]
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(Error::message)
    }

    /// Returns the number of errors.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the bag holds no errors.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if the bag holds at least one error.
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Panics with the joined message rendering.
    ///
    /// Raising is reserved for the very boundary of the system, for callers
    /// that prefer panic-style control flow there. [`Checked::or_fail`] is
    /// the value-extracting counterpart, which panics only when invalid.
    ///
    /// [`Checked::or_fail`]: crate::checked::Checked::or_fail
    ///
    /// # Panics
    ///
    /// Always, with the same text as the bag's `Display` output.
    pub fn or_fail(self) -> ! {
        panic!("{}", self)
    }
}

impl core::fmt::Display for ErrorsBag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl From<Error> for ErrorsBag {
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl FromIterator<Error> for ErrorsBag {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorsBag {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
