//! Line index for byte offset ↔ UTF-16 position conversion.

use crate::Position;
use text_size::TextSize;

/// A non-ASCII character, recorded so UTF-16 columns can be recovered from byte columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WideChar {
    /// Byte offset of the character from the start of its line.
    start: u32,
    len_utf8: u32,
    len_utf16: u32,
}

impl WideChar {
    #[inline]
    fn end(&self) -> u32 {
        self.start + self.len_utf8
    }

    /// Bytes this character occupies beyond its UTF-16 width.
    #[inline]
    fn excess(&self) -> u32 {
        self.len_utf8 - self.len_utf16
    }
}

/// An index for converting between byte offsets in a document and
/// [`Position`]s whose columns count UTF-16 code units.
///
/// Lines end the way the JavaScript runtime ends them: at `\n`, `\r\n`, a lone
/// `\r`, U+2028 or U+2029. Hosts use it to find where an inline `<script>` body
/// starts inside an `.html` document.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[i]` is the byte offset where line `i` begins.
    line_starts: Vec<TextSize>,
    /// `line_ends[i]` is the byte offset of line `i`'s terminator, or the text length.
    line_ends: Vec<TextSize>,
    /// Non-ASCII characters of each line, in order.
    wide_chars: Vec<Vec<WideChar>>,
    len: TextSize,
}

impl LineIndex {
    /// Creates a new line index from document text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut line_ends = Vec::new();
        let mut wide_chars = vec![Vec::new()];
        let mut line_start = 0usize;

        let mut chars = text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            let terminator_len = match c {
                '\n' | '\u{2028}' | '\u{2029}' => c.len_utf8(),
                '\r' if matches!(chars.peek(), Some((_, '\n'))) => {
                    chars.next();
                    2
                }
                '\r' => 1,
                _ => {
                    if !c.is_ascii() {
                        if let Some(line_chars) = wide_chars.last_mut() {
                            line_chars.push(WideChar {
                                start: (offset - line_start) as u32,
                                len_utf8: c.len_utf8() as u32,
                                len_utf16: c.len_utf16() as u32,
                            });
                        }
                    }
                    continue;
                }
            };

            line_ends.push(TextSize::from(offset as u32));
            line_start = offset + terminator_len;
            line_starts.push(TextSize::from(line_start as u32));
            wide_chars.push(Vec::new());
        }
        line_ends.push(TextSize::from(text.len() as u32));

        Self {
            line_starts,
            line_ends,
            wide_chars,
            len: TextSize::from(text.len() as u32),
        }
    }

    /// Returns the number of lines in the document.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a position.
    ///
    /// Returns `None` if the offset is past the end of the text or falls inside
    /// a multi-byte character or a multi-byte line terminator.
    pub fn position(&self, offset: TextSize) -> Option<Position> {
        if offset > self.len {
            return None;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        if offset > self.line_ends[line] {
            return None;
        }

        let byte_column = u32::from(offset) - u32::from(self.line_starts[line]);
        let mut column = byte_column;
        for wide in &self.wide_chars[line] {
            if wide.start >= byte_column {
                break;
            }
            if wide.end() > byte_column {
                return None;
            }
            column -= wide.excess();
        }

        Some(Position::new(line as u32, column))
    }

    /// Converts a position to a byte offset.
    ///
    /// Returns `None` if the line is out of bounds, the column is past the end of
    /// its line, or the column splits a surrogate pair.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let line_end = self.line_ends[line];

        let mut excess = 0;
        for wide in &self.wide_chars[line] {
            let utf16_start = wide.start - excess;
            if position.column <= utf16_start {
                break;
            }
            if position.column < utf16_start + wide.len_utf16 {
                return None;
            }
            excess += wide.excess();
        }

        let offset = line_start + TextSize::from(position.column + excess);
        (offset <= line_end).then_some(offset)
    }
}
