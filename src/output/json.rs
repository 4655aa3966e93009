//! JSON output renderer.
//!
//! Outputs `{"greeting": ..., "sum": {...}, "user": {...}}`, omitting parts
//! the command did not produce.

use crate::models::Report;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        let mut rendered =
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
