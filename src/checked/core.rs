use crate::types::{Error, ErrorsBag};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tagged success-value-or-errors outcome for one validated value.
///
/// `Checked<T>` is the boundary type a domain value's creation function
/// returns: either the constructed value or the complete [`ErrorsBag`]
/// accumulated while validating it. Unlike `Result`, combining checked
/// outcomes (via [`Checked::zip`] or the multi-field composer) accumulates
/// every error instead of keeping only the first.
///
/// # Variants
///
/// * `Valid(T)` - the constructed value
/// * `Invalid(ErrorsBag)` - one or more errors, in rule order
///
/// # Examples
///
/// ```
/// use validrail::Checked;
///
/// let valid = Checked::<i64>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Checked::<i64>::invalid("Age cannot be negative");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Checked<T> {
    Valid(T),
    Invalid(ErrorsBag),
}

impl<T> Checked<T> {
    /// Creates a valid outcome.
    #[must_use]
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid outcome from a single message.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Checked;
    ///
    /// let outcome = Checked::<()>::invalid("missing field");
    /// assert!(outcome.is_invalid());
    /// ```
    #[inline]
    pub fn invalid<E: Into<Error>>(error: E) -> Self {
        Self::Invalid(ErrorsBag::from_error(error.into()))
    }

    /// Creates an invalid outcome from an ordered sequence of messages.
    #[inline]
    pub fn invalid_many<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Error>,
    {
        Self::Invalid(ErrorsBag::from_messages(errors))
    }

    /// Returns true if the outcome carries a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns true if the outcome carries errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value, preserving errors unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Checked;
    ///
    /// let doubled = Checked::<i64>::valid(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Checked<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Checked::Valid(f(value)),
            Self::Invalid(errors) => Checked::Invalid(errors),
        }
    }

    /// Chains a computation that may itself produce an invalid outcome.
    ///
    /// Invokes `f` only when the current outcome is valid, like
    /// [`Result::and_then`].
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Checked<U>
    where
        F: FnOnce(T) -> Checked<U>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Checked::Invalid(errors),
        }
    }

    /// Combines two outcomes into a tuple, accumulating all errors.
    ///
    /// If both are valid, returns both values. If either or both are
    /// invalid, concatenates both bags in argument order.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Checked;
    ///
    /// let a = Checked::<i64>::invalid("error1");
    /// let b = Checked::<&str>::invalid("error2");
    /// let zipped = a.zip(b);
    /// assert_eq!(zipped.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Checked<U>) -> Checked<(T, U)> {
        match (self, other) {
            (Checked::Valid(a), Checked::Valid(b)) => Checked::Valid((a, b)),
            (Checked::Invalid(e), Checked::Valid(_)) => Checked::Invalid(e),
            (Checked::Valid(_), Checked::Invalid(e)) => Checked::Invalid(e),
            (Checked::Invalid(e1), Checked::Invalid(e2)) => Checked::Invalid(e1.add_all(e2)),
        }
    }

    /// Returns the value on the success path, panicking otherwise.
    ///
    /// On `Valid` this is a no-op unwrap; on `Invalid` it raises with the
    /// bag's joined rendering via [`ErrorsBag::or_fail`]. This is the
    /// explicit opt-in conversion for callers that prefer panic-style
    /// control flow at the very boundary of the system.
    ///
    /// # Panics
    ///
    /// If the outcome is `Invalid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Checked;
    ///
    /// assert_eq!(Checked::valid(7).or_fail(), 7);
    /// ```
    #[must_use]
    pub fn or_fail(self) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => errors.or_fail(),
        }
    }

    /// Converts into a `Result`, keeping the whole bag on the error side.
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<T, ErrorsBag> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a `Result` whose error side already is an [`ErrorsBag`].
    #[inline]
    pub fn from_result(result: Result<T, ErrorsBag>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }

    /// Extracts the error bag, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorsBag> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns a reference to the value, if valid.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<T> From<Result<T, ErrorsBag>> for Checked<T> {
    fn from(result: Result<T, ErrorsBag>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Checked<T>> for Result<T, ErrorsBag> {
    fn from(checked: Checked<T>) -> Self {
        checked.to_result()
    }
}

/// Collects outcomes into one, accumulating every error.
///
/// Unlike collecting `Result`s, a failing item does not stop iteration:
/// every invalid outcome contributes its whole bag, in iteration order.
///
/// # Examples
///
/// ```
/// use validrail::Checked;
///
/// let all: Checked<Vec<i64>> = [Checked::valid(1), Checked::valid(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let failed: Checked<Vec<i64>> =
///     [Checked::valid(1), Checked::invalid("a"), Checked::invalid("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(failed.into_errors().unwrap().len(), 2);
/// ```
impl<T> FromIterator<Checked<T>> for Checked<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Checked<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = ErrorsBag::empty();
        for outcome in iter {
            match outcome {
                Checked::Valid(value) => values.push(value),
                Checked::Invalid(bag) => errors = errors.add_all(bag),
            }
        }
        if errors.is_empty() {
            Checked::Valid(values)
        } else {
            Checked::Invalid(errors)
        }
    }
}

/// Collects `Result`s into one outcome, accumulating every `Err`.
impl<T, E: Into<Error>> FromIterator<Result<T, E>> for Checked<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(|result| match result {
                Ok(value) => Checked::Valid(value),
                Err(error) => Checked::invalid(error),
            })
            .collect()
    }
}
