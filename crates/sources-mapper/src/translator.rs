//! Translation between document-relative and script-relative positions.
//!
//! An inline script starts somewhere inside its embedding document. Positions on
//! the script's first line are shifted by both the line and the column where
//! the script starts; positions on later lines only by the line. For a
//! standalone script the start is `0:0` and both translations are the identity.

use script_locations::{Position, Range};

/// Converts positions in an embedding document to positions relative to the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlToScriptPositionTranslator {
    script_start: Position,
}

impl HtmlToScriptPositionTranslator {
    /// Creates a translator for a script starting at `script_start` in its document.
    #[inline]
    pub fn new(script_start: Position) -> Self {
        Self { script_start }
    }

    /// Converts a document-relative position to a script-relative one.
    ///
    /// Returns `None` if `position_in_document` comes before the script start.
    pub fn to_position_relative_to_script(
        &self,
        position_in_document: Position,
    ) -> Option<Position> {
        let start = self.script_start;
        let line = position_in_document.line.checked_sub(start.line)?;
        let column = if line == 0 {
            position_in_document.column.checked_sub(start.column)?
        } else {
            position_in_document.column
        };
        Some(Position::new(line, column))
    }
}

/// Converts script-relative positions back to positions in the embedding document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptToHtmlPositionTranslator {
    script_start: Position,
}

impl ScriptToHtmlPositionTranslator {
    /// Creates a translator for a script starting at `script_start` in its document.
    #[inline]
    pub fn new(script_start: Position) -> Self {
        Self { script_start }
    }

    /// Converts a script-relative position to a document-relative one.
    pub fn to_position_relative_to_html(&self, position_in_script: Position) -> Position {
        let start = self.script_start;
        let column = if position_in_script.line == 0 {
            position_in_script.column + start.column
        } else {
            position_in_script.column
        };
        Position::new(position_in_script.line + start.line, column)
    }

    /// Converts each script-relative position to a zero-width document range at that character.
    pub fn to_many_ranges_relative_to_html(
        &self,
        positions_in_script: impl IntoIterator<Item = Position>,
    ) -> Vec<Range> {
        positions_in_script
            .into_iter()
            .map(|position| Range::at(self.to_position_relative_to_html(position)))
            .collect()
    }

    /// Converts script-relative ranges to document ranges, translating both ends.
    pub fn to_ranges_relative_to_html(
        &self,
        ranges_in_script: impl IntoIterator<Item = Range>,
    ) -> Vec<Range> {
        ranges_in_script
            .into_iter()
            .map(|range| {
                Range::new(
                    self.to_position_relative_to_html(range.start),
                    self.to_position_relative_to_html(range.exclusive_end),
                )
            })
            .collect()
    }
}
