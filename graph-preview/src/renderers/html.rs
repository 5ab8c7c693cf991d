//! HTML renderer for the in-browser preview error page

use super::ReportRenderer;
use crate::formatter::{html_escape, pretty_json};
use crate::report::{GraphQlErrorView, PreviewReport, RequestView};
use crate::types::{PreviewContent, PreviewParams};
use crate::url_builder::communication_injector_url;

/// HTML renderer that produces a standalone error page
pub struct HtmlRenderer {
    /// Whether to include CSS styling
    pub include_styles: bool,
    /// Whether to include the copy-to-clipboard script
    pub include_scripts: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer with styles and scripts
    pub fn new() -> Self {
        Self {
            include_styles: true,
            include_scripts: true,
        }
    }

    /// Create an HTML renderer without CSS or scripts
    pub fn bare() -> Self {
        Self {
            include_styles: false,
            include_scripts: false,
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &PreviewReport) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Preview Error</title>\n");
        if self.include_styles {
            html.push_str(include_str!("../../templates/report.css"));
        }
        html.push_str("</head>\n<body>\n<div class=\"preview-error\">\n");

        html.push_str(&format_header(report));
        html.push_str(&format_section(
            "Error Message",
            &format!("<p class=\"mono message\">{}</p>\n", html_escape(&report.message)),
        ));

        if let Some(content_type) = &report.missing_content_type {
            html.push_str(&format_section(
                "Missing Content Type",
                &format!("<p class=\"mono content-type\">{}</p>\n", html_escape(content_type)),
            ));
        }

        if !report.graphql_errors.is_empty() {
            html.push_str(&format_graphql_errors(&report.graphql_errors));
        }

        if let Some(request) = &report.request {
            html.push_str(&format_request(request));
        }
        if let Some(variables) = &report.variables {
            html.push_str(&format_variables(variables));
        }

        html.push_str(&format_tips(&report.tips));
        html.push_str(&format_details("Preview Parameters", &report.params));
        html.push_str(&format_details("Full Error Details", &report.full_error));

        html.push_str("</div>\n");
        if self.include_scripts {
            html.push_str(include_str!("../../templates/copy.js"));
        }
        html.push_str("</body>\n</html>\n");

        html
    }
}

fn format_header(report: &PreviewReport) -> String {
    let mut html = String::from("<div class=\"header\">\n<h1>Preview Error</h1>\n");

    if let Some(badge) = &report.badge {
        html.push_str(&format!(
            "<span class=\"badge {}\">{}</span>\n",
            badge.tone.css_class(),
            html_escape(&badge.label)
        ));
    }
    if let Some(status) = report.http_status {
        html.push_str(&format!(
            "<span class=\"badge badge-status\">HTTP {}</span>\n",
            status
        ));
    }

    html.push_str("</div>\n");
    html
}

fn format_section(title: &str, body: &str) -> String {
    format!("<section>\n<h2>{}</h2>\n{}</section>\n", title, body)
}

fn format_graphql_errors(errors: &[GraphQlErrorView]) -> String {
    let mut body = String::new();

    for error in errors {
        body.push_str("<div class=\"graphql-error\">\n");
        body.push_str(&format!(
            "<p class=\"mono error-message\">{}</p>\n",
            html_escape(&error.message)
        ));
        if let (Some(label), Some(locations)) = (&error.locations_label, &error.locations) {
            body.push_str(&format!(
                "<div class=\"locations\"><strong>{}:</strong> <span class=\"mono\">{}</span></div>\n",
                label,
                html_escape(locations)
            ));
        }
        if let Some(extensions) = &error.extensions {
            body.push_str(&format!("<pre class=\"mono\">{}</pre>\n", html_escape(extensions)));
        }
        body.push_str("</div>\n");
    }

    format_section(&format!("GraphQL Errors ({})", errors.len()), &body)
}

fn copy_button(target: &str, label: &str) -> String {
    format!(
        "<button type=\"button\" class=\"copy\" data-copy=\"{}\">{}</button>",
        target, label
    )
}

fn copy_source(id: &str, text: &str) -> String {
    format!(
        "<textarea class=\"copy-source\" id=\"{}\" readonly>{}</textarea>\n",
        id,
        html_escape(text)
    )
}

fn format_request(request: &RequestView) -> String {
    let mut html = String::new();

    html.push_str("<section>\n<div class=\"section-header\">\n<h2>GraphQL Query</h2>\n<div>");
    html.push_str(&copy_button("copy-query", "Copy Query"));
    html.push_str(&copy_button("copy-request", "Copy Full Request"));
    html.push_str("</div>\n</div>\n");
    html.push_str(
        "<p class=\"hint\">Paste the query and variables into GraphiQL or another GraphQL client to debug.</p>\n",
    );

    html.push_str("<div class=\"query mono\">\n");
    for line in &request.lines {
        html.push_str(&format!(
            "<div class=\"line{}\"><span class=\"line-number\">{}</span><span>{}</span></div>\n",
            if line.highlighted { " error" } else { "" },
            line.number,
            html_escape(&line.text)
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&copy_source("copy-query", &request.query));
    html.push_str(&copy_source("copy-request", &request.full_request));
    html.push_str("</section>\n");

    html
}

fn format_variables(variables: &str) -> String {
    let mut html =
        String::from("<section>\n<div class=\"section-header\">\n<h2>Query Variables</h2>\n");
    html.push_str(&copy_button("copy-variables", "Copy Variables"));
    html.push_str("\n</div>\n");
    html.push_str(&format!("<pre class=\"mono\">{}</pre>\n", html_escape(variables)));
    html.push_str(&copy_source("copy-variables", variables));
    html.push_str("</section>\n");

    html
}

fn format_tips(tips: &[String]) -> String {
    let items: String = tips
        .iter()
        .map(|tip| format!("<li>{}</li>\n", html_escape(tip)))
        .collect();
    format_section("Troubleshooting", &format!("<ul>\n{}</ul>\n", items))
}

fn format_details(summary: &str, body: &str) -> String {
    format!(
        "<details>\n<summary>{}</summary>\n<pre class=\"mono\">{}</pre>\n</details>\n",
        summary,
        html_escape(body)
    )
}

/// Page shown when preview content was fetched successfully.
///
/// When a CMS URL is known, the editor communication script is included so
/// the page can talk to the CMS editing overlay.
pub fn render_content_page(
    content: &PreviewContent,
    params: &PreviewParams,
    cms_url: Option<&str>,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape(content.key.as_deref().unwrap_or("Preview"))
    ));
    html.push_str("</head>\n<body>\n");

    if let Some(cms_url) = cms_url.filter(|url| !url.is_empty()) {
        html.push_str(&format!(
            "<script src=\"{}\" defer></script>\n",
            html_escape(&communication_injector_url(cms_url))
        ));
    }

    html.push_str(&format!(
        "<article data-content-type=\"{}\" data-key=\"{}\" data-version=\"{}\" data-locale=\"{}\" data-context=\"{}\">\n",
        html_escape(content.content_type.as_deref().unwrap_or_default()),
        html_escape(content.key.as_deref().unwrap_or_default()),
        html_escape(content.version.as_deref().unwrap_or_default()),
        html_escape(content.locale.as_deref().unwrap_or_default()),
        html_escape(params.ctx.as_deref().unwrap_or("view")),
    ));
    html.push_str(&format!(
        "<pre>{}</pre>\n</article>\n",
        html_escape(&pretty_json(&content.data))
    ));
    html.push_str("</body>\n</html>\n");

    html
}

/// Page shown when no content matches a URL path
pub fn render_not_found_page() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>404</title>\n</head>\n<body>\n<div class=\"not-found\">\n<h1>404</h1>\n<p>Page not found</p>\n</div>\n</body>\n</html>\n".to_string()
}
