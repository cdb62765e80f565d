//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;

use crate::error::NetcalcError;

/// Format a label/value pair with the label right-aligned.
///
/// # Arguments
/// * `label` - The row label
/// * `value` - The value to print after the label
/// * `width` - The minimum width of the label column
///
/// # Returns
/// A single line `"<label>: <value>"`
pub fn format_row<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:>width$} {value}", value = value.to_string())
}

/// Format an engine error for stderr, the failing argument highlighted.
pub fn format_error(err: &NetcalcError) -> String {
    let prefix = "invalid".on_red();
    match err.argument_name() {
        Some(arg) => format!("{prefix} {arg}: {err}", arg = arg.to_string().as_str().bold()),
        None => format!("{prefix} {err}"),
    }
}
