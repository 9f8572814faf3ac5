use crate::SourcePosition;

/// A lexical error: some prefix of the remaining input matched no
/// token-start rule.
///
/// This covers every way lexing can fail, including unterminated string
/// literals and invalid numeric forms such as leading zeros — each of those
/// makes the corresponding token rule reject, leaving unrecognized input at
/// the failure point.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized input at {position}")]
pub struct LexError {
    offset: u32,
    position: SourcePosition,
}

impl LexError {
    pub(crate) fn new(offset: u32, position: SourcePosition) -> Self {
        Self { offset, position }
    }

    /// Returns the byte offset of the first unrecognized character.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the line/column position of the first unrecognized character.
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}
