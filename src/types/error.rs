use alloc::string::String;
use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single validation error carrying only its message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Error {
    message: String,
}

impl Error {
    /// Creates an error from a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Error;
    ///
    /// let err = Error::new("Value must be at least 0");
    /// assert_eq!(err.message(), "Value must be at least 0");
    /// ```
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns the owned message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
