//! Document state management.

use ropey::Rope;
use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

use crate::error::DocumentError;

/// An open document in the editor.
pub struct Document {
    /// The document content as a rope for efficient editing.
    pub rope: Rope,
    /// Document version for incremental sync.
    pub version: i32,
}

impl Document {
    /// Create a new document from content.
    pub fn new(content: &str, version: i32) -> Self {
        Self {
            rope: Rope::from_str(content),
            version,
        }
    }

    /// Apply a content change from the editor.
    ///
    /// The version is recorded even when the edit is rejected, so a later
    /// full-text change brings the document back in sync.
    pub fn apply_change(
        &mut self,
        change: &TextDocumentContentChangeEvent,
        version: i32,
    ) -> Result<(), DocumentError> {
        self.version = version;

        let Some(range) = change.range else {
            self.rope = Rope::from_str(&change.text);
            return Ok(());
        };

        let start = self.strict_offset(range.start)?;
        let end = self.strict_offset(range.end)?;
        if start > end {
            return Err(DocumentError::InvertedRange { start, end });
        }

        self.rope.remove(start..end);
        self.rope.insert(start, &change.text);
        Ok(())
    }

    /// Get the document content as a string.
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Convert an LSP position to a character offset.
    ///
    /// `pos.character` counts UTF-16 code units. Lines past the end map to
    /// the end of the document, columns past the end of a line map to the
    /// end of that line, and a column inside a surrogate pair maps to the
    /// character it belongs to.
    pub fn position_to_offset(&self, pos: Position) -> usize {
        let line = pos.line as usize;
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let slice = self.rope.line(line);
        let line_cu = slice.char_to_utf16_cu(self.line_len(line));
        let col = slice.utf16_cu_to_char((pos.character as usize).min(line_cu));
        self.rope.line_to_char(line) + col
    }

    /// Convert a character offset to an LSP position in UTF-16 code units.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(line);
        let character = self.rope.line(line).char_to_utf16_cu(offset - line_start);
        Position::new(line as u32, character as u32)
    }

    /// Like [`Self::position_to_offset`], but refuses lines that do not exist.
    fn strict_offset(&self, pos: Position) -> Result<usize, DocumentError> {
        let lines = self.rope.len_lines();
        if pos.line as usize >= lines {
            return Err(DocumentError::LineOutOfRange {
                line: pos.line,
                lines,
            });
        }
        Ok(self.position_to_offset(pos))
    }

    /// Number of characters on `line`, excluding its line ending.
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::Range;

    fn edit(start: (u32, u32), end: (u32, u32), text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: Some(Range::new(
                Position::new(start.0, start.1),
                Position::new(end.0, end.1),
            )),
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_position_to_offset() {
        let doc = Document::new("pipeline {\n  agent any\n}", 1);
        assert_eq!(doc.position_to_offset(Position::new(0, 0)), 0);
        assert_eq!(doc.position_to_offset(Position::new(1, 2)), 13);
        assert_eq!(doc.position_to_offset(Position::new(2, 0)), 23);
    }

    #[test]
    fn test_position_to_offset_clamps() {
        let doc = Document::new("stages {\r\n}", 1);
        // Column past the line ending stays on the line.
        assert_eq!(doc.position_to_offset(Position::new(0, 40)), 8);
        // Last line without a newline keeps its final character reachable.
        assert_eq!(doc.position_to_offset(Position::new(1, 1)), 11);
        assert_eq!(doc.position_to_offset(Position::new(9, 0)), 11);
    }

    #[test]
    fn test_columns_count_utf16_code_units() {
        let doc = Document::new("// 🚀\nstage('🚀 Deploy') { steps {} }", 1);
        // Line 1 starts at char 5; the rocket takes two code units.
        assert_eq!(doc.position_to_offset(Position::new(1, 7)), 12);
        assert_eq!(doc.position_to_offset(Position::new(1, 9)), 13);
        assert_eq!(doc.position_to_offset(Position::new(1, 25)), 29);
        // Inside the surrogate pair resolves to the rocket itself.
        assert_eq!(doc.position_to_offset(Position::new(1, 8)), 12);
        // Past the end of the first line stops before the newline.
        assert_eq!(doc.position_to_offset(Position::new(0, 10)), 4);

        assert_eq!(doc.offset_to_position(13), Position::new(1, 9));
        assert_eq!(doc.offset_to_position(4), Position::new(0, 5));
    }

    #[test]
    fn test_offset_to_position() {
        let doc = Document::new("pipeline {\n  agent any\n}", 1);
        assert_eq!(doc.offset_to_position(13), Position::new(1, 2));
        assert_eq!(doc.offset_to_position(1000), Position::new(2, 1));
    }

    #[test]
    fn test_full_change_replaces_text() {
        let mut doc = Document::new("agent any", 1);
        let change = TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "post {}".to_string(),
        };
        doc.apply_change(&change, 2).unwrap();
        assert_eq!(doc.content(), "post {}");
        assert_eq!(doc.version, 2);
    }

    #[test]
    fn test_ranged_change() {
        let mut doc = Document::new("pipeline {\n  agent any\n}", 1);
        doc.apply_change(&edit((1, 8), (1, 11), "none"), 2).unwrap();
        assert_eq!(doc.content(), "pipeline {\n  agent none\n}");

        doc.apply_change(&edit((2, 1), (2, 1), "\n"), 3).unwrap();
        assert_eq!(doc.content(), "pipeline {\n  agent none\n}\n");
    }

    #[test]
    fn test_rejected_changes() {
        let mut doc = Document::new("when {}", 1);

        let err = doc.apply_change(&edit((3, 0), (3, 1), "x"), 2).unwrap_err();
        assert_eq!(err, DocumentError::LineOutOfRange { line: 3, lines: 1 });

        let err = doc.apply_change(&edit((0, 4), (0, 1), "x"), 3).unwrap_err();
        assert_eq!(err, DocumentError::InvertedRange { start: 4, end: 1 });

        assert_eq!(doc.content(), "when {}");
        assert_eq!(doc.version, 3);
    }
}
