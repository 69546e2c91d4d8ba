//! Print Requests
//!
//! A print request is a prefix plus the slices of each tensor operand owned by
//! the issuing thread.

use super::types::DisplayMode;
use super::value::Scalar;
use crate::error::{PrintError, Result};
use serde::{Deserialize, Serialize};

/// One owned value and its coordinate in the operand's logical shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element value
    pub value: Scalar,
    /// Index per shape dimension, outermost first
    pub coordinate: Vec<u32>,
}

impl Element {
    /// Create an element
    #[must_use]
    pub fn new(value: Scalar, coordinate: Vec<u32>) -> Self {
        Self { value, coordinate }
    }
}

/// One tensor argument of a print request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    /// Position among the request's operands
    pub index: usize,
    /// Logical shape (empty for a scalar)
    pub shape: Vec<usize>,
    /// Elements owned by the issuing thread, in emission order
    pub elements: Vec<Element>,
}

impl Operand {
    /// Create a tensor operand
    #[must_use]
    pub fn new(index: usize, shape: Vec<usize>, elements: Vec<Element>) -> Self {
        Self {
            index,
            shape,
            elements,
        }
    }

    /// Create a scalar operand with its single coordinate-less element
    #[must_use]
    pub fn scalar(index: usize, value: Scalar) -> Self {
        Self::new(index, Vec::new(), vec![Element::new(value, Vec::new())])
    }

    /// Number of shape dimensions
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Whether this operand is a scalar
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Decimal digits needed to right-align indices in each dimension
    ///
    /// `ceil(log10(dim))` for `dim > 0`, computed without floating point.
    #[must_use]
    pub fn dim_widths(&self) -> Vec<usize> {
        self.shape.iter().map(|&dim| index_width(dim)).collect()
    }

    /// Check the ownership invariants of this operand
    pub fn validate(&self) -> Result<()> {
        if self.is_scalar() && self.elements.len() > 1 {
            return Err(PrintError::ScalarElementCount {
                operand: self.index,
                count: self.elements.len(),
            });
        }
        for (element, elem) in self.elements.iter().enumerate() {
            if elem.coordinate.len() != self.rank() {
                return Err(PrintError::CoordinateRank {
                    operand: self.index,
                    element,
                    expected: self.rank(),
                    actual: elem.coordinate.len(),
                });
            }
        }
        Ok(())
    }
}

/// Smallest `w` with `10^w >= dim`, or 0 for an empty dimension
fn index_width(dim: usize) -> usize {
    let mut width = 0;
    let mut reach: u128 = 1;
    while reach < dim as u128 {
        reach *= 10;
        width += 1;
    }
    width
}

/// A user-issued print directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintRequest {
    /// Prefix text, passed through as an opaque `%s` argument
    pub prefix: String,
    /// Tensor operands
    pub operands: Vec<Operand>,
    /// How element values are rendered
    pub display: DisplayMode,
}

impl PrintRequest {
    /// Create a request with no operands
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            operands: Vec::new(),
            display: DisplayMode::Decimal,
        }
    }

    /// Add an operand
    #[must_use]
    pub fn operand(mut self, operand: Operand) -> Self {
        self.operands.push(operand);
        self
    }

    /// Render element values as hex
    #[must_use]
    pub fn hex(mut self) -> Self {
        self.display = DisplayMode::Hex;
        self
    }

    /// Set the display mode
    #[must_use]
    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Whether lines need an operand tag to stay unambiguous
    #[must_use]
    pub fn is_multi_operand(&self) -> bool {
        self.operands.len() > 1
    }

    /// Check every operand's invariants
    pub fn validate(&self) -> Result<()> {
        for (position, operand) in self.operands.iter().enumerate() {
            if operand.index != position {
                return Err(PrintError::OperandIndex {
                    position,
                    index: operand.index,
                });
            }
            operand.validate()?;
        }
        Ok(())
    }
}
