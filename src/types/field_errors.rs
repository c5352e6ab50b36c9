use crate::types::error::Error;
use crate::types::ErrorVec;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered mapping of field name to that field's validation errors.
///
/// Built in a single step from per-field error lists; only fields carrying at
/// least one error are retained, and field order reflects the order the pairs
/// were supplied. The [`Display`] rendering emits `"[field] message"` per
/// error, joined with `"; "`, in field-then-message order; callers rely on
/// that exact format.
///
/// [`Display`]: core::fmt::Display
///
/// # Examples
///
/// ```
/// use validrail::{Error, FieldErrorsBag};
///
/// let bag = FieldErrorsBag::from_pairs([
///     ("name", vec![Error::new("too short")]),
///     ("age", vec![Error::new("negative")]),
/// ]);
///
/// assert_eq!(bag.field_count(), 2);
/// assert_eq!(bag.to_string(), "[name] too short; [age] negative");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldErrorsBag {
    fields: Vec<(String, ErrorVec<Error>)>,
}

impl FieldErrorsBag {
    /// Creates an empty bag.
    #[inline]
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builds the bag atomically from ordered `(field, errors)` pairs.
    ///
    /// Pairs with an empty error list are dropped, so every retained field is
    /// guaranteed to carry at least one error. Errors for a repeated field
    /// name are appended to its first occurrence.
    pub fn from_pairs<I, S, E>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, E)>,
        S: Into<String>,
        E: IntoIterator<Item = Error>,
    {
        let mut fields: Vec<(String, ErrorVec<Error>)> = Vec::new();
        for (name, errors) in pairs {
            let errors: ErrorVec<Error> = errors.into_iter().collect();
            if errors.is_empty() {
                continue;
            }
            let name = name.into();
            match fields.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, slot)) => slot.extend(errors),
                None => fields.push((name, errors)),
            }
        }
        Self { fields }
    }

    /// Returns `(field, errors)` pairs in supplied order.
    #[inline]
    pub fn errors_by_field(&self) -> impl Iterator<Item = (&str, &[Error])> {
        self.fields
            .iter()
            .map(|(name, errors)| (name.as_str(), errors.as_slice()))
    }

    /// Returns the errors recorded for `field_name`.
    ///
    /// A field with no recorded errors yields an empty slice, never a
    /// missing-key failure.
    #[inline]
    pub fn errors_for_field(&self, field_name: &str) -> &[Error] {
        self.fields
            .iter()
            .find(|(name, _)| name == field_name)
            .map_or(&[], |(_, errors)| errors.as_slice())
    }

    /// Returns the field names that carry errors, in supplied order.
    #[inline]
    pub fn fields_with_errors(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns every error, flattened by field order then per-field order.
    #[inline]
    pub fn all_errors(&self) -> impl Iterator<Item = &Error> {
        self.fields.iter().flat_map(|(_, errors)| errors.iter())
    }

    /// Returns every message, flattened by field order then per-field order.
    #[inline]
    pub fn all_messages(&self) -> impl Iterator<Item = &str> {
        self.all_errors().map(Error::message)
    }

    /// Returns true if at least one field carries an error.
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Returns true if no field carries an error.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the total number of errors across all fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.iter().map(|(_, errors)| errors.len()).sum()
    }

    /// Returns the number of fields that carry errors.
    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl core::fmt::Display for FieldErrorsBag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (name, errors) in &self.fields {
            for error in errors {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "[{}] {}", name, error)?;
                first = false;
            }
        }
        Ok(())
    }
}
