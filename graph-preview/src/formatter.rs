//! Text formatting helpers shared by the report and its renderers

use crate::graph::SourceLocation;
use serde::Serialize;
use std::collections::BTreeSet;

/// One line of a query, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryLine {
    pub number: u32,
    pub text: String,
    pub highlighted: bool,
}

/// Split a query into numbered lines, marking the lines in `line_numbers`.
///
/// Numbers outside the query are ignored.
pub fn highlight_lines(query: &str, line_numbers: &BTreeSet<u32>) -> Vec<QueryLine> {
    query
        .split('\n')
        .zip(1u32..)
        .map(|(text, number)| QueryLine {
            number,
            text: text.to_string(),
            highlighted: line_numbers.contains(&number),
        })
        .collect()
}

/// `Line {n}, Column {m}` for each location, joined by `"; "`
pub fn format_locations(locations: &[SourceLocation]) -> String {
    locations
        .iter()
        .map(|location| format!("Line {}, Column {}", location.line, location.column))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pretty-print any serializable value as two-space indented JSON
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

/// Simple HTML escaping
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
