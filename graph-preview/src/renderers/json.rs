//! JSON renderer for structured output

use super::ReportRenderer;
use crate::report::PreviewReport;

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &PreviewReport) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}
