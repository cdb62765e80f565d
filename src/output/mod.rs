//! Output formatting for the command line front end.
//!
//! - [`report`] - operation result as text rows or JSON
//! - [`terminal`] - row and error formatting with colors

mod report;
mod terminal;

pub use report::Report;
pub use terminal::{format_error, format_row};
