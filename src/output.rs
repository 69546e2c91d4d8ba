//! Output formatters for print plans
//!
//! Plain-text and JSON dumps of a [`PrintPlan`] for inspecting what a print
//! lowers to.

use crate::print::{PrintPlan, ThreadIdentity};

/// Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON for tooling and CI
    Json,
}

/// Format a plan as a text listing of formats and calls
#[must_use]
pub fn format_text(plan: &PrintPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Print plan: {} call(s), {} format(s)\n",
        plan.len(),
        plan.distinct_formats()
    ));
    output.push_str(&format!(
        "  pid args from: {}\n",
        ThreadIdentity::registers().join(", ")
    ));

    for (i, format) in plan.formats().iter().enumerate() {
        output.push_str(&format!("  fmt#{}: {:?}\n", i, format));
    }

    for emission in plan.emissions() {
        let args: Vec<String> = emission.args.iter().map(ToString::to_string).collect();
        output.push_str(&format!(
            "  printf(fmt#{}, {})\n",
            emission.format.index(),
            args.join(", ")
        ));
    }

    output
}

/// Format a plan as JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn format_json(plan: &PrintPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

/// Format a plan in the given format
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn format_plan(plan: &PrintPlan, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(plan)),
        OutputFormat::Json => format_json(plan),
    }
}
