//! Hover information provider for pipeline keywords.

use tower_lsp::lsp_types::*;

use crate::document::Document;
use crate::keywords::{self, KeywordEntry};
use crate::word;

/// Provide hover information for a position in the document.
pub fn provide_hover(doc: &Document, position: Position) -> Option<Hover> {
    let content = doc.content();
    let offset = doc.position_to_offset(position);
    let span = word::word_span(&content, offset);
    let word = doc.rope.slice(span.clone()).to_string();

    let Some(entry) = keywords::lookup(&word) else {
        tracing::debug!("No keyword at offset {}: {:?}", offset, word);
        return None;
    };
    tracing::debug!("Hover at offset {} on keyword: {}", offset, word);

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format_entry(entry),
        }),
        range: Some(Range::new(
            doc.offset_to_position(span.start),
            doc.offset_to_position(span.end),
        )),
    })
}

/// Render an entry as three markdown lines with bold labels.
///
/// Each line ends in trailing spaces so renderers keep the hard line break.
pub fn format_entry(entry: &KeywordEntry) -> String {
    [
        format!("**Required:** {}   ", entry.required),
        format!("**Parameters:** {}   ", entry.parameters),
        format!("**Allowed:** {}   ", entry.allowed),
    ]
    .join("\n")
}
