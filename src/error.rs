//! Error types for trueno-printf
//!
//! Only recoverable conditions live here. Contract violations reaching the
//! formatter itself (mismatched coordinates, multi-element scalars) panic.

use thiserror::Error;

/// Result type alias for trueno-printf operations
pub type Result<T> = std::result::Result<T, PrintError>;

/// Errors reported at the print-request validation boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// Argument ceiling leaves no room for the reserved slots
    #[error("Invalid printf argument ceiling: {max_args} (requires >= {reserved})")]
    ArgumentCeiling {
        /// Requested ceiling
        max_args: usize,
        /// Slots reserved for thread identity, prefix and value
        reserved: usize,
    },

    /// Element coordinate does not match the operand rank
    #[error("Operand {operand} element {element}: coordinate has {actual} components, shape has {expected}")]
    CoordinateRank {
        /// Operand index
        operand: usize,
        /// Element position within the operand
        element: usize,
        /// Operand rank
        expected: usize,
        /// Coordinate length
        actual: usize,
    },

    /// Scalar operand owns more than one element
    #[error("Scalar operand {operand} owns {count} elements (expected at most 1)")]
    ScalarElementCount {
        /// Operand index
        operand: usize,
        /// Number of owned elements
        count: usize,
    },

    /// Operand index does not match its position in the request
    #[error("Operand at position {position} carries index {index}")]
    OperandIndex {
        /// Position in the request
        position: usize,
        /// Index stored on the operand
        index: usize,
    },

    /// Plan emission refers to a format string the plan does not hold
    #[error("Emission {emission} uses format #{format}, plan has {formats} format(s)")]
    UnknownFormat {
        /// Emission position
        emission: usize,
        /// Referenced format id
        format: usize,
        /// Number of formats in the plan
        formats: usize,
    },
}
