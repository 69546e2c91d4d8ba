//! Print Plans
//!
//! The output of formatting one request: distinct format strings plus one
//! emission per printed line.

use super::value::PrintArg;
use crate::error::PrintError;
use serde::{Deserialize, Serialize};

/// Index of a distinct format string within a [`PrintPlan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormatId(usize);

impl FormatId {
    /// Position in [`PrintPlan::formats`]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One printf call: a format reference and its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emission {
    /// Format string this call uses
    pub format: FormatId,
    /// Variadic arguments, in specifier order
    pub args: Vec<PrintArg>,
}

/// Emission instructions for one request on one thread
///
/// Every emission's format id indexes into `formats`; deserialization checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrintPlan")]
pub struct PrintPlan {
    formats: Vec<String>,
    emissions: Vec<Emission>,
}

/// Unchecked wire form of [`PrintPlan`]
#[derive(Deserialize)]
struct RawPrintPlan {
    formats: Vec<String>,
    emissions: Vec<Emission>,
}

impl TryFrom<RawPrintPlan> for PrintPlan {
    type Error = PrintError;

    fn try_from(raw: RawPrintPlan) -> Result<Self, PrintError> {
        let formats = raw.formats.len();
        if let Some((emission, e)) = raw
            .emissions
            .iter()
            .enumerate()
            .find(|(_, e)| e.format.0 >= formats)
        {
            return Err(PrintError::UnknownFormat {
                emission,
                format: e.format.0,
                formats,
            });
        }
        Ok(Self {
            formats: raw.formats,
            emissions: raw.emissions,
        })
    }
}

impl PrintPlan {
    /// Create an empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new format string
    pub(crate) fn push_format(&mut self, text: String) -> FormatId {
        self.formats.push(text);
        FormatId(self.formats.len() - 1)
    }

    /// Append an emission
    pub(crate) fn push_emission(&mut self, format: FormatId, args: Vec<PrintArg>) {
        debug_assert!(format.0 < self.formats.len());
        self.emissions.push(Emission { format, args });
    }

    /// Distinct format strings, in first-use order
    #[must_use]
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Emissions, in element order
    #[must_use]
    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    /// Format text of a format id
    #[must_use]
    pub fn format(&self, id: FormatId) -> &str {
        &self.formats[id.0]
    }

    /// Number of distinct format strings
    #[must_use]
    pub fn distinct_formats(&self) -> usize {
        self.formats.len()
    }

    /// Number of printf calls
    #[must_use]
    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    /// Whether the plan prints nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    /// Iterate `(format text, arguments)` per printf call
    pub fn lines(&self) -> impl Iterator<Item = (&str, &[PrintArg])> + '_ {
        self.emissions
            .iter()
            .map(|e| (self.format(e.format), e.args.as_slice()))
    }
}
