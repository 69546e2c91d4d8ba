//! Emit Driver
//!
//! Replays a [`PrintPlan`] against the device printf primitive, registering
//! each distinct format string once.

use super::plan::PrintPlan;
use super::value::PrintArg;

/// The external "emit one formatted call" primitive
///
/// `register` is called the first time a format is used and returns a handle
/// to the registered text; `emit` reuses that handle with new arguments.
pub trait PrintfSink {
    /// Handle to a registered format string
    type Handle;

    /// Register `format` and emit one call with `args`
    fn register(&mut self, format: &str, args: &[PrintArg]) -> Self::Handle;

    /// Emit one call against a previously registered format
    fn emit(&mut self, handle: &Self::Handle, args: &[PrintArg]);
}

/// Emit every call of `plan` in order.
///
/// Returns the handles of the registered formats, indexed like
/// [`PrintPlan::formats`].
pub fn emit_plan<S: PrintfSink>(plan: &PrintPlan, sink: &mut S) -> Vec<Option<S::Handle>> {
    let mut handles: Vec<Option<S::Handle>> = std::iter::repeat_with(|| None)
        .take(plan.distinct_formats())
        .collect();

    for emission in plan.emissions() {
        let slot = emission.format.index();
        if let Some(handle) = &handles[slot] {
            sink.emit(handle, &emission.args);
        } else {
            handles[slot] = Some(sink.register(plan.format(emission.format), &emission.args));
        }
    }

    handles
}
