//! Device Print Formatting
//!
//! Lowers a tensor print request into printf calls for one device thread.
//!
//! ## Architecture
//!
//! ```text
//! PrintRequest + ThreadIdentity → PrintFormatter → PrintPlan → PrintfSink
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trueno_printf::print::{Element, Operand, PrintFormatter, PrintRequest, Scalar, ThreadIdentity};
//!
//! let elements = vec![
//!     Element::new(Scalar::f32(1.0), vec![0, 0]),
//!     Element::new(Scalar::f32(2.0), vec![1, 2]),
//! ];
//! let request = PrintRequest::new(" x: ").operand(Operand::new(0, vec![4, 4], elements));
//!
//! let plan = PrintFormatter::default().format(&request, ThreadIdentity::new(0, 1, 0));
//! assert_eq!(plan.len(), 2);
//! assert_eq!(plan.formats(), ["pid (%u, %u, %u) idx (%1u, %1u)%s%f"]);
//! ```

mod config;
mod formatter;
mod plan;
mod request;
mod sink;
mod specifier;
mod types;
mod value;

pub use config::{PrintConfig, MAX_PRINTF_ARGS, PID_ARGS, RESERVED_ARGS, TRAILING_ARGS};
pub use formatter::{FormatCache, FormatKey, PrintFormatter, TRUNCATION_MARKER};
pub use plan::{Emission, FormatId, PrintPlan};
pub use request::{Element, Operand, PrintRequest};
pub use sink::{emit_plan, PrintfSink};
pub use specifier::resolve;
pub use types::{DisplayMode, PrintType};
pub use value::{PrintArg, Scalar, ThreadIdentity};

use crate::error::Result;

/// Validate a request and format it, for callers without an upstream validator
pub fn format_checked(
    formatter: &PrintFormatter,
    request: &PrintRequest,
    pid: ThreadIdentity,
) -> Result<PrintPlan> {
    request.validate()?;
    Ok(formatter.format(request, pid))
}
