//! Composition of several independent single-value validations into one
//! entity-level result.
//!
//! Each field of an entity is validated on its own pipeline, yielding a
//! tagged [`Checked`] outcome; the composer partitions those outcomes into a
//! values list and a [`FieldErrorsBag`]. A field lands on exactly one side,
//! never both, and the order fields were supplied is the order both sides
//! iterate in.
//!
//! [`Checked`]: crate::checked::Checked
//! [`FieldErrorsBag`]: crate::types::FieldErrorsBag
use crate::checked::Checked;
use crate::types::FieldErrorsBag;
use alloc::string::String;
use alloc::vec::Vec;

/// One-shot aggregation of ordered `(field name, outcome)` pairs.
///
/// Built once from its inputs and immutable thereafter. `is_valid` is true
/// iff no field contributed errors. Callers must check [`is_valid`] before
/// consuming [`values`]: an invalid composition still exposes the values of
/// the fields that individually succeeded, and constructing an entity from
/// such a partial set is a caller error the composer does not detect.
///
/// [`is_valid`]: MultiFieldContext::is_valid
/// [`values`]: MultiFieldContext::values
///
/// # Examples
///
/// ```
/// use validrail::{Checked, MultiFieldContext};
///
/// let composed = MultiFieldContext::setup([
///     ("name", Checked::valid("John Doe")),
///     ("email", Checked::invalid("Invalid email format")),
///     ("age", Checked::invalid("Age cannot exceed 150")),
/// ]);
///
/// assert!(!composed.is_valid());
/// assert_eq!(composed.errors().field_count(), 2);
/// assert_eq!(composed.value_of("name"), Some(&"John Doe"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiFieldContext<V> {
    values: Vec<(String, V)>,
    errors: FieldErrorsBag,
}

impl<V> MultiFieldContext<V> {
    /// Builds the composition from ordered `(field name, outcome)` pairs.
    ///
    /// A `Valid` outcome stores its value under the field name; an `Invalid`
    /// outcome records its bag's errors under the field name. Supplied order
    /// fixes the iteration order of both the values list and the error bag.
    pub fn setup<I, S>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (S, Checked<V>)>,
        S: Into<String>,
    {
        let mut values = Vec::new();
        let mut failures = Vec::new();
        for (field, outcome) in outcomes {
            match outcome {
                Checked::Valid(value) => values.push((field.into(), value)),
                Checked::Invalid(errors) => failures.push((field.into(), errors)),
            }
        }
        Self {
            values,
            errors: FieldErrorsBag::from_pairs(failures),
        }
    }

    /// Returns true iff every field validated successfully.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the validated `(field name, value)` pairs, in supplied order.
    ///
    /// May be non-empty even when [`is_valid`] is false, so check first.
    ///
    /// [`is_valid`]: MultiFieldContext::is_valid
    #[inline]
    pub fn values(&self) -> &[(String, V)] {
        &self.values
    }

    /// Consumes the composition and returns the validated pairs.
    #[inline]
    #[must_use]
    pub fn into_values(self) -> Vec<(String, V)> {
        self.values
    }

    /// Returns the validated value for `field_name`, if that field
    /// succeeded.
    #[inline]
    pub fn value_of(&self, field_name: &str) -> Option<&V> {
        self.values
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, value)| value)
    }

    /// Returns the per-field errors.
    #[inline]
    pub fn errors(&self) -> &FieldErrorsBag {
        &self.errors
    }

    /// Consumes the composition and returns the per-field errors.
    #[inline]
    pub fn into_errors(self) -> FieldErrorsBag {
        self.errors
    }
}

impl<V, S: Into<String>> FromIterator<(S, Checked<V>)> for MultiFieldContext<V> {
    fn from_iter<I: IntoIterator<Item = (S, Checked<V>)>>(iter: I) -> Self {
        Self::setup(iter)
    }
}
