//! Factory functions for validating integer values.
use crate::context::Context;
use crate::validators::input::Input;
use alloc::format;
use alloc::string::ToString;

const TYPE_MESSAGE: &str = "Value must be an integer";

/// Guard stage: wraps the raw input and checks it is an integer.
///
/// On mismatch the context carries the type-mismatch message and no typed
/// value, so later predicate stages pass through without running.
///
/// # Examples
///
/// ```
/// use validrail::validators::integer;
///
/// assert!(integer::from(30).is_valid());
/// assert!(integer::from("thirty").has_errors());
/// ```
pub fn from<I: Into<Input>>(value: I) -> Context<i64> {
    from_with(value, None)
}

/// Guard stage with a caller-supplied type-mismatch message.
pub fn from_with<I: Into<Input>>(value: I, message: Option<&str>) -> Context<i64> {
    match value.into() {
        Input::Integer(value) => Context::of(value),
        _ => Context::rejected(message.unwrap_or(TYPE_MESSAGE)),
    }
}

/// The value must be at least `min`.
pub fn min(min: i64, message: Option<&str>) -> impl FnOnce(Context<i64>) -> Context<i64> {
    let message = message.map_or_else(
        || format!("Value must be at least {min}"),
        ToString::to_string,
    );
    move |context| context.validate(|value| *value >= min, message)
}

/// The value must be at most `max`.
pub fn max(max: i64, message: Option<&str>) -> impl FnOnce(Context<i64>) -> Context<i64> {
    let message = message.map_or_else(
        || format!("Value must be at most {max}"),
        ToString::to_string,
    );
    move |context| context.validate(|value| *value <= max, message)
}

/// The value must lie in `min..=max`.
pub fn between(
    min: i64,
    max: i64,
    message: Option<&str>,
) -> impl FnOnce(Context<i64>) -> Context<i64> {
    let message = message.map_or_else(
        || format!("Value must be between {min} and {max}"),
        ToString::to_string,
    );
    move |context| context.validate(|value| (min..=max).contains(value), message)
}
