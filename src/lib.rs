//! # trueno-printf: Device printf Lowering for Tensor Prints
//!
//! Turns a tensor print request into the printf format strings and argument
//! lists one GPU thread must emit, without exceeding the printf argument limit.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_printf::print::{PrintFormatter, PrintRequest, ThreadIdentity};
//!
//! let plan = PrintFormatter::default().format(&PrintRequest::new(" hello"), ThreadIdentity::new(1, 2, 3));
//! assert_eq!(plan.formats()[0], "pid (%u, %u, %u) %s");
//! ```
//!
//! ## Modules
//!
//! - [`print`] - Specifier resolution and request formatting
//! - [`output`] - Text and JSON dumps of print plans
//! - [`testing`] - Recording printf sink

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
// Allow format push string - not a critical performance path
#![allow(clippy::format_push_string)]
// Allow uninlined format args - stylistic preference
#![allow(clippy::uninlined_format_args)]
// Allow possible truncation - bit patterns are narrowed on purpose
#![allow(clippy::cast_possible_truncation)]
// Allow cast_possible_wrap - signed values are stored sign-extended
#![allow(clippy::cast_possible_wrap)]
// Allow cast_sign_loss - same bit patterns, reinterpreted
#![allow(clippy::cast_sign_loss)]
// Allow missing panics doc - contract violations are documented on `format`
#![allow(clippy::missing_panics_doc)]
// Allow unwrap_used in tests
#![allow(clippy::unwrap_used)]

pub mod output;
pub mod print;

/// Error types for trueno-printf operations
pub mod error;

/// Test doubles for the printf primitive
pub mod testing;

pub use error::{PrintError, Result};
pub use print::{PrintConfig, PrintFormatter, PrintPlan, PrintRequest, ThreadIdentity};
