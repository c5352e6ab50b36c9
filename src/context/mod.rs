//! The pipeline context threaded through validation and transform stages.
//!
//! A [`Context`] pairs the value under validation with the messages
//! accumulated so far. Stages consume the context and return a fresh one;
//! nothing is ever mutated in place, and no stage raises; failures only
//! ever append messages.
//!
//! Two rules govern how stages interact with earlier failures:
//!
//! - **Predicates keep running.** [`Context::validate`] executes its
//!   predicate even when errors were already accumulated, so independent
//!   rules on one value all report at once instead of stopping at the first
//!   failure.
//! - **Transforms stop.** [`Context::map`] and [`Context::transform`] never
//!   invoke their mapper once the context carries an error, protecting later
//!   stages from operating on a value an earlier stage already rejected.
//!
//! After a failed type guard there is no value of the target type, so
//! remaining predicate stages are skipped from that point on rather than
//! probing a wrong-typed value. The guard's own message is still reported.
use crate::checked::Checked;
use crate::types::accumulator::Accumulator;
use crate::types::{Error, ErrorsBag};
use alloc::string::String;
use alloc::vec::Vec;

/// Immutable holder of (current value, ordered error messages).
///
/// Created at pipeline entry with [`Context::of`] (or [`Context::rejected`]
/// when the entry guard fails), replaced at every stage, and consumed at the
/// pipeline's exit into either a domain value or an [`ErrorsBag`].
///
/// # Examples
///
/// ```
/// use validrail::Context;
///
/// let context = Context::of(-5)
///     .validate(|v| *v >= 0, "Age cannot be negative")
///     .validate(|v| *v <= 150, "Age cannot exceed 150");
///
/// assert!(context.has_errors());
/// assert_eq!(context.errors().len(), 1);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context<V> {
    value: Option<V>,
    errors: Accumulator<String>,
}

impl<V> Context<V> {
    /// Creates a context for a value, with no errors.
    #[inline]
    pub fn of(value: V) -> Self {
        Self {
            value: Some(value),
            errors: Accumulator::new(),
        }
    }

    /// Creates a context for a value that failed its entry guard.
    ///
    /// The context carries the guard's message and no typed value, so later
    /// predicate stages pass through without running.
    #[inline]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        let mut errors = Accumulator::new();
        errors.push(message.into());
        Self {
            value: None,
            errors,
        }
    }

    /// Returns the value under validation, if one survived the entry guard.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Consumes the context and returns the value, if present.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<V> {
        self.value
    }

    /// Runs `predicate` against the current value, appending `message` on
    /// failure.
    ///
    /// The predicate runs whenever a typed value is present, even if the
    /// context already carries errors. This asymmetry with [`Context::map`]
    /// is deliberate: it lets several independent rules on one value all
    /// report simultaneously.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Context;
    ///
    /// let context = Context::of("weak")
    ///     .validate(|v| v.len() >= 8, "too short")
    ///     .validate(|v| v.chars().any(|c| c.is_ascii_digit()), "needs a digit");
    ///
    /// assert_eq!(context.errors().len(), 2);
    /// ```
    #[inline]
    pub fn validate<P, S>(self, predicate: P, message: S) -> Self
    where
        P: FnOnce(&V) -> bool,
        S: Into<String>,
    {
        match &self.value {
            Some(value) if !predicate(value) => self.add_error(message),
            _ => self,
        }
    }

    /// Appends a message unconditionally.
    #[inline]
    pub fn add_error<S: Into<String>>(mut self, message: S) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Replaces the value with `mapper(value)` if the context is still valid.
    ///
    /// Once any error has been accumulated the mapper is never invoked and
    /// both value and error list are returned exactly as they were.
    #[inline]
    pub fn map<F>(self, mapper: F) -> Self
    where
        F: FnOnce(V) -> V,
    {
        if self.has_errors() {
            return self;
        }
        Self {
            value: self.value.map(mapper),
            errors: self.errors,
        }
    }

    /// Shape-changing [`Context::map`]: carries the value into a context of
    /// a different type.
    ///
    /// When the context is invalid the mapper is never invoked; the errors
    /// are carried forward and the new context holds no value.
    #[inline]
    pub fn transform<U, F>(self, mapper: F) -> Context<U>
    where
        F: FnOnce(V) -> U,
    {
        let valid = !self.has_errors();
        Context {
            value: match self.value {
                Some(value) if valid => Some(mapper(value)),
                _ => None,
            },
            errors: self.errors,
        }
    }

    /// Hybrid validate-and-transform stage.
    ///
    /// Runs `stage` whenever a typed value is present, like
    /// [`Context::validate`]; an `Err` message is appended to the error list.
    /// The `Ok` value is adopted only if the context was error-free before
    /// the stage, matching [`Context::map`]'s protection of later stages.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Context;
    ///
    /// let context = Context::of("12a".to_string()).try_transform(|v| {
    ///     v.parse::<i64>().map_err(|_| "not a number".to_string())
    /// });
    ///
    /// assert_eq!(context.errors().to_string(), "not a number");
    /// ```
    pub fn try_transform<U, F>(self, stage: F) -> Context<U>
    where
        F: FnOnce(V) -> Result<U, String>,
    {
        let valid = !self.has_errors();
        let mut errors = self.errors;
        let value = match self.value {
            Some(value) => match stage(value) {
                Ok(next) if valid => Some(next),
                Ok(_) => None,
                Err(message) => {
                    errors.push(message);
                    None
                }
            },
            None => None,
        };
        Context { value, errors }
    }

    /// Materializes the accumulated messages into an [`ErrorsBag`].
    ///
    /// Returns an empty bag when the context is valid.
    #[inline]
    pub fn errors(&self) -> ErrorsBag {
        self.errors
            .iter()
            .map(|message| Error::new(message.as_str()))
            .collect()
    }

    /// Returns true if no errors were accumulated.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if at least one error was accumulated.
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the context into a tagged outcome.
    ///
    /// If the context is valid, invokes `on_success` with the value and tags
    /// the result [`Checked::Valid`]; otherwise returns the accumulated bag
    /// as [`Checked::Invalid`]. This is the bridge domain constructors use to
    /// turn a finished pipeline into a constructed object.
    ///
    /// # Examples
    ///
    /// ```
    /// use validrail::Context;
    ///
    /// struct Age(i64);
    ///
    /// let outcome = Context::of(33)
    ///     .validate(|v| *v >= 0, "Age cannot be negative")
    ///     .then(Age);
    ///
    /// assert!(outcome.is_valid());
    /// ```
    pub fn then<T, F>(self, on_success: F) -> Checked<T>
    where
        F: FnOnce(V) -> T,
    {
        if self.has_errors() {
            return Checked::Invalid(self.errors());
        }
        match self.value {
            Some(value) => Checked::Valid(on_success(value)),
            // A guard rejection always records a message, so an empty error
            // list with no value cannot be produced by the facades.
            None => Checked::Invalid(ErrorsBag::empty()),
        }
    }

    /// Applies one stage, passing the context through it left-to-right.
    ///
    /// Stages are plain `Context -> Context` function values, so a pipeline
    /// is an explicit sequential fold:
    ///
    /// ```
    /// use validrail::validators::integer;
    ///
    /// let context = integer::from(200)
    ///     .pipe(integer::min(0, None))
    ///     .pipe(integer::max(150, None));
    ///
    /// assert_eq!(context.errors().to_string(), "Value must be at most 150");
    /// ```
    #[inline]
    pub fn pipe<U, F>(self, stage: F) -> Context<U>
    where
        F: FnOnce(Self) -> Context<U>,
    {
        stage(self)
    }

    /// Folds several same-typed contexts into one.
    ///
    /// Valid contexts contribute their values, in order; every accumulated
    /// message from every context is merged, in order. Superseded for entity
    /// use by [`MultiFieldContext`], but usable standalone.
    ///
    /// [`MultiFieldContext`]: crate::compose::MultiFieldContext
    pub fn combine<I>(contexts: I) -> Context<Vec<V>>
    where
        I: IntoIterator<Item = Context<V>>,
    {
        let mut values = Vec::new();
        let mut errors = Accumulator::new();
        for context in contexts {
            if context.has_errors() {
                errors.extend(context.errors);
            } else if let Some(value) = context.value {
                values.push(value);
            }
        }
        Context {
            value: Some(values),
            errors,
        }
    }

    /// Merges the errors of several contexts into one [`ErrorsBag`],
    /// preserving context order then per-context order.
    pub fn merge_errors<I>(contexts: I) -> ErrorsBag
    where
        I: IntoIterator<Item = Context<V>>,
    {
        contexts
            .into_iter()
            .fold(ErrorsBag::empty(), |bag, context| {
                bag.add_all(context.errors())
            })
    }
}
