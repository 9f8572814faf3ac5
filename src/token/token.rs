use crate::ByteSpan;
use crate::token::TokenKind;
use serde::Deserialize;
use serde::Serialize;

/// A lexed token: its kind plus the byte range it covers in the source.
///
/// Insignificant input (whitespace, commas, `#` comments) never becomes a
/// token; concatenating the spans of a token sequence therefore recovers all
/// of the significant source text, in order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub span: ByteSpan,
}

impl<'src> Token<'src> {
    /// Creates a token from a kind and span.
    pub fn new(kind: TokenKind<'src>, span: ByteSpan) -> Self {
        Self { kind, span }
    }
}
