//! Documentation rendering
//!
//! Turns a declaration's pretty-printed signature and raw doc comment into
//! the document's markdown documentation field: a fenced code block tagged
//! with the source language, then the normalized doc-comment text after a
//! `----` marker line.

use crate::decl::Declaration;
use crate::document::Documentation;

/// Marker separating the signature block from the doc-comment text.
const DOC_SEPARATOR: &str = "----";

/// Renders the documentation message for a declaration.
///
/// No signature means no documentation (empty message, not an error).
pub fn render_documentation(decl: &Declaration) -> Documentation {
    let Some(signature) = decl.signature.as_deref() else {
        return Documentation::markdown("");
    };
    let comment = decl
        .doc_comment
        .as_deref()
        .map(strip_doc_comment)
        .unwrap_or_default();
    Documentation::markdown(format!(
        "```{}\n{}\n```{}",
        decl.language.as_str(),
        signature,
        comment
    ))
}

/// Strips comment delimiters and `*` continuation markers from a raw doc
/// comment and prefixes the result with the `----` marker block.
///
/// Empty input stays empty.
pub fn strip_doc_comment(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let mut out = format!("\n\n{DOC_SEPARATOR}\n");
    out.push_str(&strip_doc_lines(raw));
    out
}

/// Per-line delimiter stripping.
///
/// For each line: trim leading whitespace, consume one `/`, a run of `*`,
/// then whitespace again; from the end, consume one `/`, a run of `*`, then
/// trailing whitespace. Lines that strip to nothing are dropped; each
/// surviving line is emitted after a newline. Operates on char boundaries,
/// so degenerate input (a lone `*`, whitespace-only lines, multi-byte text)
/// can never slice out of range, and the transform is idempotent:
/// `strip_doc_lines(strip_doc_lines(x)) == strip_doc_lines(x)`.
pub fn strip_doc_lines(raw: &str) -> String {
    let mut out = String::new();
    for line in raw.lines() {
        let chars: Vec<char> = line.chars().collect();
        let mut start = 0;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
        if start < chars.len() && chars[start] == '/' {
            start += 1;
        }
        while start < chars.len() && chars[start] == '*' {
            start += 1;
        }
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
        if start >= chars.len() {
            continue;
        }
        let mut end = chars.len() - 1;
        if end > start && chars[end] == '/' {
            end -= 1;
        }
        while end > start && chars[end] == '*' {
            end -= 1;
        }
        while end > start && chars[end].is_whitespace() {
            end -= 1;
        }
        if end == start {
            continue;
        }
        out.push('\n');
        out.extend(&chars[start..=end]);
    }
    out
}
