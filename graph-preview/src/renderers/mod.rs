//! Report renderers for different output formats
//!
//! This module renders a [`PreviewReport`] in different formats while keeping
//! classification and report assembly separate from presentation concerns.

use crate::report::PreviewReport;

/// Simple trait for rendering preview reports in different formats
pub trait ReportRenderer {
    /// Render a report to a string in the specific format
    fn render(&self, report: &PreviewReport) -> String;
}

// Sub-modules
pub mod cli;
pub mod html;
pub mod json;

// Re-exports for convenience
pub use cli::CliRenderer;
pub use html::{render_content_page, render_not_found_page, HtmlRenderer};
pub use json::JsonRenderer;
