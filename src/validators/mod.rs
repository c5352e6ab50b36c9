//! Validator facades, one namespace of factory functions per primitive kind.
//!
//! Each factory returns a stage (a plain `Context -> Context` function
//! value), so pipelines are built by explicit left-to-right application via
//! [`Context::pipe`] or the [`pipe!`] macro. Every validating factory takes
//! an optional custom message; passing `None` falls back to the built-in
//! default.
//!
//! [`Context::pipe`]: crate::context::Context::pipe
//! [`pipe!`]: crate::pipe
//!
//! # Examples
//!
//! ```
//! use validrail::validators::string;
//!
//! let name = string::from("  John Doe  ")
//!     .pipe(string::trim())
//!     .pipe(string::min_length(2, Some("Name cannot be less than 2 characters")))
//!     .pipe(string::max_length(150, Some("Name cannot exceed 150 characters")));
//!
//! assert!(name.is_valid());
//! assert_eq!(name.value().map(String::as_str), Some("John Doe"));
//! ```
pub mod input;
pub mod integer;
pub mod sequence;
pub mod string;

pub use input::Input;
