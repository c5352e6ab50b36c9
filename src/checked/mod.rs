//! The tagged outcome returned at a value's creation boundary.
//!
//! A [`Checked`] is exactly one of success-with-value or
//! failure-with-[`ErrorsBag`], never both and never neither. It is the
//! contract a domain value's creation function honors when participating in
//! multi-field composition.
//!
//! [`ErrorsBag`]: crate::types::ErrorsBag
//!
//! # Examples
//!
//! ```
//! use validrail::Checked;
//!
//! let valid: Checked<i64> = Checked::valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Checked<i64> = Checked::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
