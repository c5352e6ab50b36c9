//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use validrail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`pipe!`], [`fields!`]
//! - **Types**: [`Context`], [`Checked`], [`ErrorsBag`], [`FieldErrorsBag`],
//!   [`MultiFieldContext`], [`Input`]
//! - **Facades**: the `integer`, `string`, and `sequence` modules
//!
//! # Examples
//!
//! ```
//! use validrail::prelude::*;
//!
//! fn validate_age(raw: i64) -> Checked<i64> {
//!     pipe!(
//!         integer::from(raw),
//!         integer::min(0, Some("Age cannot be negative")),
//!         integer::max(150, Some("Age cannot exceed 150")),
//!     )
//!     .then(|age| age)
//! }
//!
//! assert!(validate_age(30).is_valid());
//! ```

// Macros
pub use crate::{fields, pipe};

// Core types
pub use crate::checked::Checked;
pub use crate::compose::MultiFieldContext;
pub use crate::context::Context;
pub use crate::types::{Error, ErrorsBag, FieldErrorsBag};

// Facades
pub use crate::validators::{integer, sequence, string, Input};
