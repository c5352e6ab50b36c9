//! Factory functions for validating and normalizing string values.
//!
//! Length rules count characters, not bytes, so multi-byte input is measured
//! the way users perceive it.
use crate::context::Context;
use crate::validators::input::Input;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

const TYPE_MESSAGE: &str = "Value must be a string";

/// Guard stage: wraps the raw input and checks it is a string.
///
/// # Examples
///
/// ```
/// use validrail::validators::string;
///
/// assert!(string::from("hello").is_valid());
/// assert!(string::from(42).has_errors());
/// ```
pub fn from<I: Into<Input>>(value: I) -> Context<String> {
    from_with(value, None)
}

/// Guard stage with a caller-supplied type-mismatch message.
pub fn from_with<I: Into<Input>>(value: I, message: Option<&str>) -> Context<String> {
    match value.into() {
        Input::Text(value) => Context::of(value),
        _ => Context::rejected(message.unwrap_or(TYPE_MESSAGE)),
    }
}

/// The string must not be empty.
pub fn not_empty(message: Option<&str>) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message.unwrap_or("String cannot be empty").to_string();
    move |context| context.validate(|value| !value.is_empty(), message)
}

/// The string must be at least `min` characters long.
pub fn min_length(
    min: usize,
    message: Option<&str>,
) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message.map_or_else(
        || format!("String must be at least {min} characters"),
        ToString::to_string,
    );
    move |context| context.validate(|value| value.chars().count() >= min, message)
}

/// The string must be at most `max` characters long.
pub fn max_length(
    max: usize,
    message: Option<&str>,
) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message.map_or_else(
        || format!("String must be at most {max} characters"),
        ToString::to_string,
    );
    move |context| context.validate(|value| value.chars().count() <= max, message)
}

/// The string must look like an email address.
///
/// This is a structural check (a single `@`, a non-empty local part, a
/// dotted domain), not an RFC 5322 parser.
pub fn email(message: Option<&str>) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message.unwrap_or("Invalid email format").to_string();
    move |context| context.validate(|value| looks_like_email(value), message)
}

/// The string must contain at least one uppercase letter.
pub fn has_uppercase(message: Option<&str>) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message
        .unwrap_or("Must contain at least one uppercase letter")
        .to_string();
    move |context| context.validate(|value| value.chars().any(char::is_uppercase), message)
}

/// The string must contain at least one lowercase letter.
pub fn has_lowercase(message: Option<&str>) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message
        .unwrap_or("Must contain at least one lowercase letter")
        .to_string();
    move |context| context.validate(|value| value.chars().any(char::is_lowercase), message)
}

/// The string must contain at least one decimal digit.
pub fn has_digit(message: Option<&str>) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message
        .unwrap_or("Must contain at least one number")
        .to_string();
    move |context| context.validate(|value| value.chars().any(|c| c.is_ascii_digit()), message)
}

/// The string must contain at least one non-alphanumeric character.
pub fn has_special_character(
    message: Option<&str>,
) -> impl FnOnce(Context<String>) -> Context<String> {
    let message = message
        .unwrap_or("Must contain at least one special character")
        .to_string();
    move |context| {
        context.validate(
            |value| value.chars().any(|c| !c.is_ascii_alphanumeric()),
            message,
        )
    }
}

/// Transform stage: strips leading and trailing whitespace.
///
/// Never adds errors; like every transform, it is a no-op once the context
/// carries one.
pub fn trim() -> impl FnOnce(Context<String>) -> Context<String> {
    |context| context.map(|value| value.trim().to_string())
}

/// Hybrid validate-and-transform stage over a caller-supplied matcher.
///
/// The matcher returns the captured groups for a matching string and `None`
/// otherwise. On a match the context's value becomes the group list; on a
/// mismatch the message is appended. The matcher runs even on an
/// already-failing context, so its diagnostic is still gathered, but its
/// result is only adopted when no earlier stage failed.
///
/// # Examples
///
/// ```
/// use validrail::validators::string;
///
/// let context = string::from("100€").pipe(string::extract(
///     |value| {
///         let amount = value.strip_suffix('€')?;
///         Some(vec![amount.to_string()])
///     },
///     Some("Invalid money format"),
/// ));
///
/// assert_eq!(context.value(), Some(&vec!["100".to_string()]));
/// ```
pub fn extract<M>(
    matcher: M,
    message: Option<&str>,
) -> impl FnOnce(Context<String>) -> Context<Vec<String>>
where
    M: FnOnce(&str) -> Option<Vec<String>>,
{
    let message = message
        .unwrap_or("String does not match required pattern")
        .to_string();
    move |context| {
        context.try_transform(|value| matcher(&value).ok_or(message))
    }
}

/// Regex-backed [`extract`]: on a match the value becomes the full match
/// followed by every capture group (absent groups become empty strings).
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use validrail::validators::string;
///
/// let pattern = Regex::new(r"^(\d+)([€$])$").unwrap();
/// let context = string::from("100€").pipe(string::captures(&pattern, None));
///
/// let groups = context.into_value().unwrap();
/// assert_eq!(groups, vec!["100€", "100", "€"]);
/// ```
#[cfg(feature = "regex")]
#[cfg_attr(docsrs, doc(cfg(feature = "regex")))]
pub fn captures<'p>(
    pattern: &'p regex::Regex,
    message: Option<&str>,
) -> impl FnOnce(Context<String>) -> Context<Vec<String>> + 'p {
    let message = message
        .unwrap_or("String does not match required pattern")
        .to_string();
    move |context| {
        context.try_transform(|value| {
            pattern
                .captures(&value)
                .map(|captures| {
                    captures
                        .iter()
                        .map(|group| group.map_or_else(String::new, |g| g.as_str().to_string()))
                        .collect()
                })
                .ok_or(message)
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }
    domain.contains('.')
}
