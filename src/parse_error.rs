use crate::LexError;
use crate::ParseErrorKind;
use crate::SourcePosition;

/// A syntax error, classified and positioned.
///
/// Exactly one of these is produced per failed parse — the first error
/// encountered, never an aggregate — and no partial AST accompanies it.
/// Byte offsets are resolved to line/column once, at the top-level `parse`
/// boundary; everything below that deals in offsets only.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{position}: error: {kind}")]
pub struct ParseError<'src> {
    kind: ParseErrorKind<'src>,
    position: SourcePosition,
}

impl<'src> ParseError<'src> {
    /// Creates a parse error from a kind and a resolved position.
    pub fn new(kind: ParseErrorKind<'src>, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &ParseErrorKind<'src> {
        &self.kind
    }

    /// Returns the 1-based line/column of the construct's opening token
    /// (or of the offending token, for unexpected-token and lexical
    /// errors).
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}

impl<'src> From<LexError> for ParseError<'src> {
    fn from(error: LexError) -> Self {
        Self {
            kind: ParseErrorKind::UnrecognizedInput,
            position: error.position(),
        }
    }
}
