//! Validrail turns untrusted, loosely typed input into validated domain
//! values without stopping at the first failure: every applicable rule runs,
//! and every resulting message is kept, per value and (for entities) per
//! field.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `validrail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validating a single value
//!
//! ```
//! use validrail::validators::integer;
//!
//! let context = integer::from(-5)
//!     .pipe(integer::min(0, Some("Age cannot be negative")))
//!     .pipe(integer::max(150, Some("Age cannot exceed 150")));
//!
//! assert!(context.has_errors());
//! assert_eq!(context.errors().to_string(), "Age cannot be negative");
//! ```
//!
//! ## Accumulating several failures at once
//!
//! ```
//! use validrail::validators::string;
//!
//! let context = string::from("weak")
//!     .pipe(string::min_length(8, None))
//!     .pipe(string::has_uppercase(None))
//!     .pipe(string::has_digit(None));
//!
//! assert_eq!(context.errors().len(), 3);
//! ```
//!
//! ## Composing an entity from independent fields
//!
//! ```
//! use validrail::{Checked, MultiFieldContext};
//!
//! let composed = MultiFieldContext::setup([
//!     ("name", Checked::valid("John Doe".to_string())),
//!     ("email", Checked::invalid("Invalid email format")),
//! ]);
//!
//! assert!(!composed.is_valid());
//! assert_eq!(composed.errors().to_string(), "[email] Invalid email format");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Tagged success-or-errors outcome returned at a value's creation boundary
pub mod checked;
/// Multi-field composition of independent validation outcomes
pub mod compose;
/// The pipeline context that threads a value through validation stages
pub mod context;
/// Stage-composition macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error containers and accumulation storage
pub mod types;
/// Validator facades for the primitive input kinds
pub mod validators;

pub use checked::Checked;
pub use compose::MultiFieldContext;
pub use context::Context;
pub use types::{Error, ErrorVec, ErrorsBag, FieldErrorsBag};
pub use validators::Input;
