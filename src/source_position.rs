use serde::Deserialize;
use serde::Serialize;

/// A human-readable source location: 1-based line and column.
///
/// Positions are computed from byte offsets only when an error is being
/// reported, never on the per-token hot path, so the O(n) scan in
/// [`SourcePosition::of_offset`] is the whole position-mapping story.
///
/// # Indexing Convention
///
/// - `line`: 1 = first line of the document
/// - `column`: 1 = first character of the line; counts *characters*, not
///   bytes, so a 4-byte emoji advances the column by 1
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
}

impl SourcePosition {
    /// Creates a position from 1-based line and column numbers.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolves a byte offset in `source` to its line/column position.
    ///
    /// The line number is 1 plus the count of line terminators strictly
    /// before `offset`; the column is 1 plus the count of characters since
    /// the most recent line terminator. `\n`, `\r`, and the `\r\n` pair each
    /// count as a single terminator.
    ///
    /// An `offset` at or past the end of `source` resolves to the position
    /// one past the final character.
    pub fn of_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        let mut last_char_was_cr = false;
        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            match ch {
                '\n' => {
                    if last_char_was_cr {
                        // The \n of a \r\n pair: the line already advanced.
                        last_char_was_cr = false;
                    } else {
                        line += 1;
                        column = 1;
                    }
                }
                '\r' => {
                    line += 1;
                    column = 1;
                    last_char_was_cr = true;
                }
                _ => {
                    column += 1;
                    last_char_was_cr = false;
                }
            }
        }
        Self { line, column }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column number (in characters).
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
