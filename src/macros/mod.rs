//! Ergonomic macros for building pipelines and field compositions.
//!
//! - [`macro@crate::pipe`] - threads a context through a sequence of stages,
//!   left to right.
//! - [`macro@crate::fields`] - builds a
//!   [`MultiFieldContext`](crate::compose::MultiFieldContext) from
//!   `field => outcome` pairs in declaration order.

/// Threads a pipeline context through stages, left to right.
///
/// Each stage is a `Context -> Context` function value, typically produced
/// by a validator facade factory. `pipe!(ctx, a, b)` is exactly
/// `ctx.pipe(a).pipe(b)`, an explicit sequential fold.
///
/// # Examples
///
/// ```
/// use validrail::pipe;
/// use validrail::validators::integer;
///
/// let context = pipe!(
///     integer::from(-5),
///     integer::min(0, Some("Age cannot be negative")),
///     integer::max(150, Some("Age cannot exceed 150")),
/// );
///
/// assert_eq!(context.errors().to_string(), "Age cannot be negative");
/// ```
#[macro_export]
macro_rules! pipe {
    ($context:expr $(, $stage:expr)* $(,)?) => {{
        let context = $context;
        $(let context = $crate::context::Context::pipe(context, $stage);)*
        context
    }};
}

/// Builds a [`MultiFieldContext`](crate::compose::MultiFieldContext) from
/// `field => outcome` pairs.
///
/// Declaration order is load-bearing: it fixes the iteration order of both
/// the values list and the per-field error bag.
///
/// # Examples
///
/// ```
/// use validrail::{fields, Checked};
///
/// let composed = fields! {
///     "name" => Checked::valid("John Doe"),
///     "email" => Checked::invalid("Invalid email format"),
/// };
///
/// assert!(!composed.is_valid());
/// assert_eq!(
///     composed.errors().fields_with_errors().collect::<Vec<_>>(),
///     ["email"]
/// );
/// ```
#[macro_export]
macro_rules! fields {
    ($($field:expr => $outcome:expr),* $(,)?) => {
        $crate::compose::MultiFieldContext::setup([
            $(($field, $outcome)),*
        ])
    };
}
