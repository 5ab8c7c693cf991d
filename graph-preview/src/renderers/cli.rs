//! CLI renderer for terminal output

use super::ReportRenderer;
use crate::report::{GraphQlErrorView, PreviewReport, RequestView};
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table,
};

/// CLI renderer that produces a plain-text preview error report
pub struct CliRenderer {
    /// Whether to prefix section headers with emojis
    pub use_emojis: bool,
}

impl CliRenderer {
    /// Create a new CLI renderer
    pub fn new() -> Self {
        Self { use_emojis: true }
    }

    /// Create a CLI renderer without emojis
    pub fn plain() -> Self {
        Self { use_emojis: false }
    }

    fn heading(&self, emoji: &str, title: &str) -> String {
        if self.use_emojis {
            format!("\n{} {}\n", emoji, title)
        } else {
            format!("\n{}\n", title)
        }
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for CliRenderer {
    fn render(&self, report: &PreviewReport) -> String {
        let mut output = String::new();

        let mut title = String::from("PREVIEW ERROR");
        if let Some(badge) = &report.badge {
            title.push_str(&format!(" [{}]", badge.label));
        }
        if let Some(status) = report.http_status {
            title.push_str(&format!(" (HTTP {})", status));
        }
        output.push_str(&format!("{}\n{}\n", title, "═".repeat(title.chars().count())));
        output.push_str(&format!("{}\n", report.message));

        if let Some(content_type) = &report.missing_content_type {
            output.push_str(&self.heading("🧩", "MISSING CONTENT TYPE"));
            output.push_str(&format!("  {}\n", content_type));
        }

        if !report.graphql_errors.is_empty() {
            output.push_str(&self.heading(
                "🚨",
                &format!("GRAPHQL ERRORS ({})", report.graphql_errors.len()),
            ));
            output.push_str(&format_error_table(&report.graphql_errors));
            output.push('\n');
        }

        if let Some(request) = &report.request {
            output.push_str(&self.heading("📄", "QUERY"));
            output.push_str(&format_query(request));
        }
        if let Some(variables) = &report.variables {
            output.push_str(&self.heading("🔧", "VARIABLES"));
            output.push_str(&format!("{}\n", variables));
        }

        output.push_str(&self.heading("💡", "TROUBLESHOOTING"));
        for tip in &report.tips {
            output.push_str(&format!("  • {}\n", tip));
        }

        output.push_str(&self.heading("🔎", "PREVIEW PARAMETERS"));
        output.push_str(&format!("{}\n", report.params));

        output.push_str(&self.heading("🧾", "FULL ERROR"));
        output.push_str(&format!("{}\n", report.full_error));

        output
    }
}

fn format_error_table(errors: &[GraphQlErrorView]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Message").add_attribute(Attribute::Bold),
            Cell::new("Location").add_attribute(Attribute::Bold),
        ]);

    for error in errors {
        table.add_row(vec![
            Cell::new(&error.message),
            Cell::new(error.locations.as_deref().unwrap_or("-")),
        ]);
    }

    table.to_string()
}

/// Numbered query lines, with `>` marking lines an error points at
fn format_query(request: &RequestView) -> String {
    let width = request.lines.len().to_string().len();
    request
        .lines
        .iter()
        .map(|line| {
            format!(
                "{} {:>width$} │ {}\n",
                if line.highlighted { ">" } else { " " },
                line.number,
                line.text,
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphFailure, GraphQlError, GraphRequest};
    use crate::types::PreviewParams;
    use serde_json::Map;

    #[test]
    fn test_cli_renderer_content_error() {
        let failure = GraphFailure::content(
            200,
            vec![GraphQlError::new("Unknown type Foo").at(2, 3)],
            GraphRequest::new("query {\n  item\n}", Map::new()),
        );
        let report = PreviewReport::build(&failure, &PreviewParams::for_key("abc"));
        let output = CliRenderer::plain().render(&report);

        assert!(output.starts_with("PREVIEW ERROR [GraphQL Error] (HTTP 200)\n"));
        assert!(output.contains("GRAPHQL ERRORS (1)"));
        assert!(output.contains("Unknown type Foo"));
        assert!(output.contains("Line 2, Column 3"));
        assert!(output.contains("> 2 │   item\n"));
        assert!(output.contains("  1 │ query {\n"));
        assert!(output.contains("TROUBLESHOOTING"));
        assert!(output.contains("VARIABLES\n{}\n"));
        assert!(output.contains("PREVIEW PARAMETERS\n{\n  \"key\": \"abc\"\n}\n"));
        assert!(output.contains("FULL ERROR\n{\n"));
        assert!(output.contains("\"name\": \"GraphContentResponseError\""));
        assert!(!output.contains("🚨"));
    }

    #[test]
    fn test_cli_renderer_missing_content_type() {
        let report = PreviewReport::build(
            &GraphFailure::missing_content_type("HeroBlock"),
            &PreviewParams::for_key("abc"),
        );
        let output = CliRenderer::new().render(&report);

        assert!(output.contains("🧩 MISSING CONTENT TYPE\n  HeroBlock\n"));
        assert!(!output.contains("QUERY"));
        assert!(!output.contains("VARIABLES"));
        assert!(output.contains("🧾 FULL ERROR\n"));
        assert_eq!(output.matches("  • ").count(), report.tips.len());
    }
}
