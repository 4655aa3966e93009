//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::{OutputFormat, Report};

/// Trait for rendering a command's report to an output format.
pub trait OutputRenderer {
    /// Render the report to a string.
    fn render(&self, report: &Report) -> String;
}

/// Render `report` with the renderer for `format`.
pub fn render(format: OutputFormat, report: &Report) -> String {
    match format {
        OutputFormat::Terminal => terminal::TerminalRenderer.render(report),
        OutputFormat::Json => json::JsonRenderer.render(report),
    }
}
