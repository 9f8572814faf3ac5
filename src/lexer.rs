//! The lexer: turns source text into an ordered sequence of [`Token`]s.
//!
//! Lexing is zero-copy: every literal payload borrows a slice of the source
//! string. The lexer holds no shared state and may be run repeatedly over
//! the same text; each call to [`tokenize`] is independent.
//!
//! Before each token the lexer skips *insignificant* input: Unicode
//! whitespace (including line terminators), commas, and `#` comments
//! (consumed to end of line). At each position token recognition is
//! attempted in a fixed order: punctuator, name, float literal, int
//! literal, string literal. The first rule to match wins; if none matches,
//! lexing fails with a [`LexError`] at that position.

use crate::ByteSpan;
use crate::LexError;
use crate::SourcePosition;
use crate::token::StringValue;
use crate::token::Token;
use crate::token::TokenKind;
use memchr::memchr2;
use memchr::memchr3;
use memchr::memmem;

/// Lexes `source` into tokens.
///
/// Returns the full token sequence, or a [`LexError`] pointing at the first
/// position where no token rule matches. Unterminated string literals and
/// malformed numeric literals (e.g. leading zeros) surface this way: the
/// corresponding rule rejects, leaving unrecognized input behind.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.read_token() {
        tokens.push(token);
    }
    if !lexer.is_at_end() {
        let offset = lexer.offset;
        return Err(LexError::new(
            offset as u32,
            SourcePosition::of_offset(source, offset),
        ));
    }
    Ok(tokens)
}

/// Internal lexer state: the source text plus a byte offset into it.
///
/// Every `read_*` rule either consumes input and returns `Some`, or leaves
/// the offset exactly where it found it and returns `None`.
struct Lexer<'src> {
    source: &'src str,
    /// Current byte offset; the text left to lex is `&source[offset..]`.
    offset: usize,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self { source, offset: 0 }
    }

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// Returns `true` once all input (including any trailing insignificant
    /// text) has been consumed.
    fn is_at_end(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Reads the next token, skipping any insignificant input before it.
    ///
    /// Returns `None` at end of input *or* when no rule matches; the caller
    /// distinguishes the two via [`Lexer::is_at_end`].
    fn read_token(&mut self) -> Option<Token<'src>> {
        self.skip_insignificant();
        let start = self.offset;
        let kind = self
            .read_punctuator()
            .or_else(|| self.read_name())
            .or_else(|| self.read_float_value())
            .or_else(|| self.read_int_value())
            .or_else(|| self.read_string_value())?;
        Some(Token::new(
            kind,
            ByteSpan::new(start as u32, self.offset as u32),
        ))
    }

    // =========================================================================
    // Insignificant input
    // =========================================================================

    /// Skips Unicode whitespace, commas, and `#` comments.
    ///
    /// A comment runs to the next line terminator; the terminator itself is
    /// left for the whitespace loop (a comment at end of input simply runs
    /// to the end).
    fn skip_insignificant(&mut self) {
        loop {
            let mut chars = self.remaining().chars();
            match chars.next() {
                Some(ch) if ch.is_whitespace() || ch == ',' => {
                    self.offset += ch.len_utf8();
                }
                Some('#') => {
                    self.offset += 1;
                    let rest = self.remaining().as_bytes();
                    match memchr2(b'\n', b'\r', rest) {
                        Some(idx) => self.offset += idx,
                        None => self.offset = self.source.len(),
                    }
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Punctuators
    // =========================================================================

    /// Reads a punctuator token.
    ///
    /// All punctuators are single characters except the ellipsis, which
    /// requires exactly three consecutive dots (`..` alone matches nothing).
    fn read_punctuator(&mut self) -> Option<TokenKind<'src>> {
        let kind = match *self.remaining().as_bytes().first()? {
            b'!' => TokenKind::Bang,
            b'$' => TokenKind::Dollar,
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            b':' => TokenKind::Colon,
            b'=' => TokenKind::Equals,
            b'@' => TokenKind::At,
            b'[' => TokenKind::SquareBracketOpen,
            b']' => TokenKind::SquareBracketClose,
            b'{' => TokenKind::CurlyBraceOpen,
            b'}' => TokenKind::CurlyBraceClose,
            b'|' => TokenKind::Pipe,
            b'.' => {
                if self.remaining().starts_with("...") {
                    self.offset += 3;
                    return Some(TokenKind::Ellipsis);
                }
                return None;
            }
            _ => return None,
        };
        self.offset += 1;
        Some(kind)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Reads a name token: `[A-Za-z_][A-Za-z0-9_]*`.
    ///
    /// Keywords are not recognized here; `fragment`, `on`, `true`, etc. lex
    /// as ordinary names and are interpreted contextually by the parser.
    fn read_name(&mut self) -> Option<TokenKind<'src>> {
        let bytes = self.remaining().as_bytes();
        let first = *bytes.first()?;
        if !(first.is_ascii_alphabetic() || first == b'_') {
            return None;
        }
        let mut len = 1;
        while let Some(&byte) = bytes.get(len) {
            if byte.is_ascii_alphanumeric() || byte == b'_' {
                len += 1;
            } else {
                break;
            }
        }
        let text = &self.remaining()[..len];
        self.offset += len;
        Some(TokenKind::name(text))
    }

    // =========================================================================
    // Numeric literals
    // =========================================================================

    /// Reads the mandatory integer part of a numeric literal: an optional
    /// leading `-`, then either the single digit `0` or a non-zero digit
    /// followed by more digits.
    ///
    /// Leading zeros other than a bare `0` must not match, so `04` leaves
    /// the offset untouched and the overall lex fails there.
    fn read_integer_part(&mut self) -> Option<&'src str> {
        let start = self.offset;
        let bytes = self.remaining().as_bytes();
        let mut len = 0;
        if bytes.first() == Some(&b'-') {
            len += 1;
        }
        match bytes.get(len) {
            Some(b'0') => {
                if bytes.get(len + 1).is_some_and(|b| b.is_ascii_digit()) {
                    return None;
                }
                len += 1;
            }
            Some(byte) if byte.is_ascii_digit() => {
                len += 1;
                while bytes.get(len).is_some_and(|b| b.is_ascii_digit()) {
                    len += 1;
                }
            }
            _ => return None,
        }
        self.offset += len;
        Some(&self.source[start..self.offset])
    }

    /// Reads a float literal: an integer part followed by a fractional part
    /// (`.` plus at least one digit) and/or an exponent part (`e`/`E`,
    /// optional sign, at least one digit).
    ///
    /// If neither follows the integer part, the whole attempt is rolled
    /// back so the int rule can claim the digits instead.
    fn read_float_value(&mut self) -> Option<TokenKind<'src>> {
        let start = self.offset;
        self.read_integer_part()?;

        let has_fractional_part = self.read_fractional_part();
        let has_exponent_part = self.read_exponent_part();
        if !has_fractional_part && !has_exponent_part {
            self.offset = start;
            return None;
        }

        Some(TokenKind::float_value(&self.source[start..self.offset]))
    }

    /// Consumes `.` plus one-or-more digits, if present.
    fn read_fractional_part(&mut self) -> bool {
        let bytes = self.remaining().as_bytes();
        if bytes.first() != Some(&b'.') || !bytes.get(1).is_some_and(|b| b.is_ascii_digit()) {
            return false;
        }
        let mut len = 2;
        while bytes.get(len).is_some_and(|b| b.is_ascii_digit()) {
            len += 1;
        }
        self.offset += len;
        true
    }

    /// Consumes `e`/`E`, an optional sign, and one-or-more digits, if
    /// present. An exponent indicator without digits matches nothing.
    fn read_exponent_part(&mut self) -> bool {
        let bytes = self.remaining().as_bytes();
        if !matches!(bytes.first(), Some(b'e' | b'E')) {
            return false;
        }
        let mut len = 1;
        if matches!(bytes.get(len), Some(b'+' | b'-')) {
            len += 1;
        }
        if !bytes.get(len).is_some_and(|b| b.is_ascii_digit()) {
            return false;
        }
        while bytes.get(len).is_some_and(|b| b.is_ascii_digit()) {
            len += 1;
        }
        self.offset += len;
        true
    }

    /// Reads an int literal: just an integer part.
    fn read_int_value(&mut self) -> Option<TokenKind<'src>> {
        let text = self.read_integer_part()?;
        Some(TokenKind::int_value(text))
    }

    // =========================================================================
    // String literals
    // =========================================================================

    /// Reads a string literal.
    ///
    /// Three consecutive `"` start a block string whose content is the raw
    /// text up to the next `"""`, preserved verbatim (no de-indentation, no
    /// escape processing). A single `"` *not* immediately followed by
    /// another `"` starts a single-line string whose content is the raw
    /// text up to the closing `"`; a line terminator before the closing
    /// quote makes the rule reject. Note that a bare `""` matches neither
    /// form.
    ///
    /// A missing terminator rejects the whole rule, so the `"` that opened
    /// the string is where the resulting [`LexError`] points.
    fn read_string_value(&mut self) -> Option<TokenKind<'src>> {
        let remaining = self.remaining();
        let bytes = remaining.as_bytes();

        if remaining.starts_with("\"\"\"") {
            let content_and_rest = &remaining[3..];
            let terminator = memmem::find(content_and_rest.as_bytes(), b"\"\"\"")?;
            let content = &content_and_rest[..terminator];
            self.offset += 3 + terminator + 3;
            return Some(TokenKind::StringValue(StringValue::BlockQuoted(
                content.into(),
            )));
        }

        if bytes.first() == Some(&b'"') && bytes.get(1) != Some(&b'"') {
            let content_and_rest = &remaining[1..];
            match memchr3(b'"', b'\n', b'\r', content_and_rest.as_bytes()) {
                Some(idx) if content_and_rest.as_bytes()[idx] == b'"' => {
                    let content = &content_and_rest[..idx];
                    self.offset += 1 + idx + 1;
                    return Some(TokenKind::StringValue(StringValue::SingleQuoted(
                        content.into(),
                    )));
                }
                // Line terminator or end of input before the closing quote.
                _ => return None,
            }
        }

        None
    }
}
