//! Template engine implementation

mod tokenize;

use crate::config::SubstitutionConfig;
use crate::template::error::TemplateError;
use crate::template::model::ValueMapping;
use indexmap::IndexSet;

use tokenize::TokenStream;

/// Result of scanning a template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scan {
    /// Unique placeholder names in first-occurrence order
    pub variables: Vec<String>,
    /// Malformed placeholders, in document order
    pub issues: Vec<TemplateError>,
}

/// Scan `html` for placeholders
///
/// Never fails: empty placeholders are collected as issues and left out of
/// the variable set.
pub fn scan(html: &str) -> Scan {
    let mut names: IndexSet<&str> = IndexSet::new();
    let mut issues = Vec::new();
    let mut occurrences = 0usize;

    let mut stream = TokenStream::new(html);
    for token in stream.by_ref() {
        occurrences += 1;
        if token.is_empty() {
            issues.push(TemplateError::EmptyPlaceholder {
                offset: token.start,
                line: token.line,
            });
            continue;
        }
        names.insert(token.name);
    }

    tracing::debug!(
        lines = stream.line(),
        occurrences,
        unique = names.len(),
        issues = issues.len(),
        "scanned template"
    );

    Scan {
        variables: names.into_iter().map(str::to_string).collect(),
        issues,
    }
}

/// Extract the unique placeholder names of `html`
///
/// `extract_variables("{{b}}{{a}}{{b}}") == ["b", "a"]`
///
/// # Errors
///
/// Returns the first [`TemplateError`] if the template has an empty
/// placeholder.
pub fn extract_variables(html: &str) -> Result<Vec<String>, TemplateError> {
    let scanned = scan(html);
    match scanned.issues.into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(scanned.variables),
    }
}

/// Replace every placeholder that has an entry in `mapping`
///
/// Each matching `{{name}}` becomes
/// `<span style="{highlight_style}">{value}</span>`, with the sentinel in
/// place of empty values. Matching is on the whole delimited token, and the
/// output is written in a single forward pass that never re-reads replaced
/// text. Placeholders without an entry are copied verbatim.
pub fn substitute(html: &str, mapping: &ValueMapping, style: &SubstitutionConfig) -> String {
    let mut output = String::with_capacity(html.len());
    let mut cursor = 0usize;
    let mut replaced = 0usize;

    for token in TokenStream::new(html) {
        let Some(value) = mapping.get(token.name) else {
            continue;
        };

        output.push_str(&html[cursor..token.start]);
        push_value(&mut output, value, style);
        cursor = token.end();
        replaced += 1;
    }
    output.push_str(&html[cursor..]);

    tracing::debug!(replaced, "substituted placeholders");
    output
}

fn push_value(output: &mut String, value: &str, style: &SubstitutionConfig) {
    let shown = if value.is_empty() {
        style.sentinel.as_str()
    } else {
        value
    };
    output.push_str("<span style=\"");
    output.push_str(&html_escape::encode_double_quoted_attribute(
        &style.highlight_style,
    ));
    output.push_str("\">");
    output.push_str(&html_escape::encode_text(shown));
    output.push_str("</span>");
}

#[cfg(test)]
mod tests;
