//! Factory functions for validating list-shaped values.
//!
//! The guard stage produces a `Context<Vec<Input>>`; once a pipeline has a
//! typed list, `map` and `validate` are generic over the item type so they
//! also serve lists produced by shape-changing stages such as
//! [`string::extract`].
//!
//! When the guard fails there is no list to operate on, so later list stages
//! pass the context through unchanged without adding further errors; only
//! the guard's own message is reported.
//!
//! [`string::extract`]: crate::validators::string::extract
use crate::context::Context;
use crate::validators::input::Input;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

const TYPE_MESSAGE: &str = "Value must be a list";

/// Guard stage: wraps the raw input and checks it is a list.
///
/// # Examples
///
/// ```
/// use validrail::validators::sequence;
///
/// assert!(sequence::from(vec![1, 2, 3]).is_valid());
/// assert!(sequence::from("not a list").has_errors());
/// ```
pub fn from<I: Into<Input>>(value: I) -> Context<Vec<Input>> {
    from_with(value, None)
}

/// Guard stage with a caller-supplied type-mismatch message.
pub fn from_with<I: Into<Input>>(value: I, message: Option<&str>) -> Context<Vec<Input>> {
    match value.into() {
        Input::List(values) => Context::of(values),
        _ => Context::rejected(message.unwrap_or(TYPE_MESSAGE)),
    }
}

/// Transform stage over the whole list. Never adds errors.
pub fn map<T, F>(mapper: F) -> impl FnOnce(Context<Vec<T>>) -> Context<Vec<T>>
where
    F: FnOnce(Vec<T>) -> Vec<T>,
{
    |context| context.map(mapper)
}

/// Predicate stage over the whole list.
pub fn validate<T, P>(
    predicate: P,
    message: impl Into<String>,
) -> impl FnOnce(Context<Vec<T>>) -> Context<Vec<T>>
where
    P: FnOnce(&[T]) -> bool,
{
    let message = message.into();
    move |context| context.validate(|values| predicate(values), message)
}

/// The list must not be empty.
pub fn not_empty<T>(message: Option<&str>) -> impl FnOnce(Context<Vec<T>>) -> Context<Vec<T>> {
    let message = message.unwrap_or("List cannot be empty").to_string();
    move |context| context.validate(|values| !values.is_empty(), message)
}
