//! Test doubles for the printf primitive

use crate::print::{PrintArg, PrintfSink};

/// One call seen by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// First use of a format string
    Register {
        /// Registered text
        format: String,
        /// Call arguments
        args: Vec<PrintArg>,
    },
    /// Reuse of a registered format
    Emit {
        /// Handle returned by the matching `Register`
        handle: usize,
        /// Call arguments
        args: Vec<PrintArg>,
    },
}

/// A [`PrintfSink`] that records calls instead of emitting device code
///
/// Handles are positions in [`RecordingSink::registered`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    registered: Vec<String>,
    calls: Vec<RecordedCall>,
}

impl RecordingSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered format strings, in registration order
    #[must_use]
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Every call, in order
    #[must_use]
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }
}

impl PrintfSink for RecordingSink {
    type Handle = usize;

    fn register(&mut self, format: &str, args: &[PrintArg]) -> usize {
        self.registered.push(format.to_string());
        self.calls.push(RecordedCall::Register {
            format: format.to_string(),
            args: args.to_vec(),
        });
        self.registered.len() - 1
    }

    fn emit(&mut self, handle: &usize, args: &[PrintArg]) {
        self.calls.push(RecordedCall::Emit {
            handle: *handle,
            args: args.to_vec(),
        });
    }
}
