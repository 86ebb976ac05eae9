//! Errors raised while keeping documents in sync with the editor.

use thiserror::Error;

/// A content change that cannot be applied to the current text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("line {line} is past the end of the document ({lines} lines)")]
    LineOutOfRange { line: u32, lines: usize },

    #[error("edit range {start}..{end} is inverted")]
    InvertedRange { start: usize, end: usize },
}
