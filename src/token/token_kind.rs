use crate::token::StringValue;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// The kind of a token, including any literal payload.
///
/// Literal values (`IntValue`, `FloatValue`) store only the raw source text:
/// GraphQL numeric literals may exceed native precision, and the canonical
/// textual form must round-trip, so nothing is parsed to a machine number
/// here.
///
/// Keywords (`query`, `fragment`, `on`, `true`, ...) are *not* a separate
/// kind. They are ordinary `Name` tokens whose text the parser compares in
/// the grammar positions where they matter; a fragment named `onward` must
/// lex as one `Name`.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: literal payloads borrow
/// slices of the source text via `Cow::Borrowed`. `Cow::Owned` remains
/// available for tokens constructed programmatically (e.g. in tests).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...` (exactly three consecutive dots)
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `}`
    CurlyBraceClose,
    /// `|`
    Pipe,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name/identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including any leading `-`
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including any leading `-`
    /// (e.g. `"-1.23e-4"`, `"4.2e10"`).
    FloatValue(Cow<'src, str>),

    /// A string literal, tagged by quoting form. Content excludes the
    /// quote delimiters.
    StringValue(StringValue<'src>),
}

impl<'src> TokenKind<'src> {
    /// Create a `Name` token kind borrowing from the source text.
    #[inline]
    pub fn name(text: &'src str) -> Self {
        TokenKind::Name(Cow::Borrowed(text))
    }

    /// Create an `IntValue` token kind borrowing from the source text.
    #[inline]
    pub fn int_value(text: &'src str) -> Self {
        TokenKind::IntValue(Cow::Borrowed(text))
    }

    /// Create a `FloatValue` token kind borrowing from the source text.
    #[inline]
    pub fn float_value(text: &'src str) -> Self {
        TokenKind::FloatValue(Cow::Borrowed(text))
    }

    /// Returns the name text if this is a `Name` token.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            TokenKind::Name(text) => Some(text),
            _ => None,
        }
    }

    /// Returns a short human-readable description of this token kind,
    /// suitable for error messages.
    pub fn description(&self) -> Cow<'static, str> {
        match self {
            TokenKind::Bang => Cow::Borrowed("`!`"),
            TokenKind::Dollar => Cow::Borrowed("`$`"),
            TokenKind::ParenOpen => Cow::Borrowed("`(`"),
            TokenKind::ParenClose => Cow::Borrowed("`)`"),
            TokenKind::Ellipsis => Cow::Borrowed("`...`"),
            TokenKind::Colon => Cow::Borrowed("`:`"),
            TokenKind::Equals => Cow::Borrowed("`=`"),
            TokenKind::At => Cow::Borrowed("`@`"),
            TokenKind::SquareBracketOpen => Cow::Borrowed("`[`"),
            TokenKind::SquareBracketClose => Cow::Borrowed("`]`"),
            TokenKind::CurlyBraceOpen => Cow::Borrowed("`{`"),
            TokenKind::CurlyBraceClose => Cow::Borrowed("`}`"),
            TokenKind::Pipe => Cow::Borrowed("`|`"),
            TokenKind::Name(text) => Cow::Owned(format!("name `{text}`")),
            TokenKind::IntValue(text) => Cow::Owned(format!("integer `{text}`")),
            TokenKind::FloatValue(text) => Cow::Owned(format!("float `{text}`")),
            TokenKind::StringValue(_) => Cow::Borrowed("string literal"),
        }
    }
}
