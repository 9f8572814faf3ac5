use crate::token::Token;

/// A cheap, copyable cursor over a lexed token sequence.
///
/// The cursor is a borrowed slice of tokens plus an index — it never owns or
/// copies the token buffer. Because it is `Copy`, "try a rule, and roll back
/// entirely if it fails" is expressed by value semantics:
///
/// ```
/// # use graphql_exec_parser::{tokenize, TokenCursor};
/// # let tokens = tokenize("{ id }").unwrap();
/// let mut cursor = TokenCursor::new(&tokens);
/// let start = cursor;        // O(1) snapshot
/// cursor.next();
/// cursor.next();
/// cursor = start;            // O(1) rollback
/// # assert_eq!(cursor.position(), 0);
/// ```
///
/// This is what lets the parser's grammar rules be ordinary recursive
/// functions despite needing unbounded lookahead: every rule that may fail
/// partway copies the cursor first and restores it on failure, with no
/// global backtracking stack.
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'a, 'src> {
    tokens: &'a [Token<'src>],
    position: usize,
}

impl<'a, 'src> TokenCursor<'a, 'src> {
    /// Creates a cursor at the start of `tokens`.
    pub fn new(tokens: &'a [Token<'src>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Peeks at the current token without consuming it.
    ///
    /// Returns `None` when the cursor is exhausted.
    pub fn peek(&self) -> Option<&'a Token<'src>> {
        self.tokens.get(self.position)
    }

    /// Consumes the current token and advances.
    ///
    /// Returns `None` when the cursor is exhausted.
    pub fn next(&mut self) -> Option<&'a Token<'src>> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Returns the index of the current token in the underlying buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
