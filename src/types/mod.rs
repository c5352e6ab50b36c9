//! Error containers and the storage they share.
//!
//! The containers in this module are pure values: every mutator consumes
//! `self` and returns a fresh instance, and nothing here performs I/O or
//! holds shared state.
//!
//! # Examples
//!
//! ```
//! use validrail::{Error, ErrorsBag};
//!
//! let bag = ErrorsBag::from_messages(["too short", "missing digit"]);
//! assert_eq!(bag.to_string(), "too short; missing digit");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error;
pub mod errors_bag;
pub mod field_errors;

pub use accumulator::Accumulator;
pub use error::Error;
pub use errors_bag::ErrorsBag;
pub use field_errors::FieldErrorsBag;

/// SmallVec-backed collection used for accumulating error messages.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case where a value fails only a rule or two.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
