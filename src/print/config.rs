//! Formatter Configuration
//!
//! The variadic argument ceiling drives index truncation.

use crate::error::{PrintError, Result};
use serde::{Deserialize, Serialize};

/// nvptx printf accepts at most 32 variadic arguments; extra ones print garbage.
pub const MAX_PRINTF_ARGS: usize = 32;

/// Slots taken by the thread identity triple
pub const PID_ARGS: usize = 3;

/// Slots taken after the index: prefix string and element value
pub const TRAILING_ARGS: usize = 2;

/// Slots every element line needs regardless of rank
pub const RESERVED_ARGS: usize = PID_ARGS + TRAILING_ARGS;

/// Print formatter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrintConfig")]
pub struct PrintConfig {
    max_args: usize,
}

/// Unchecked wire form of [`PrintConfig`]
#[derive(Deserialize)]
struct RawPrintConfig {
    max_args: usize,
}

impl TryFrom<RawPrintConfig> for PrintConfig {
    type Error = PrintError;

    fn try_from(raw: RawPrintConfig) -> Result<Self> {
        Self::new(raw.max_args)
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            max_args: MAX_PRINTF_ARGS,
        }
    }
}

impl PrintConfig {
    /// Create a configuration for a backend with the given argument ceiling
    pub const fn new(max_args: usize) -> Result<Self> {
        if max_args < RESERVED_ARGS {
            return Err(PrintError::ArgumentCeiling {
                max_args,
                reserved: RESERVED_ARGS,
            });
        }
        Ok(Self { max_args })
    }

    /// Argument ceiling for one printf call
    #[must_use]
    pub const fn max_args(self) -> usize {
        self.max_args
    }

    /// Number of coordinate components one line may carry
    #[must_use]
    pub const fn max_allowed_rank(self) -> usize {
        self.max_args.saturating_sub(RESERVED_ARGS)
    }
}
