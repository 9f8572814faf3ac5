use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// The payload of a string-literal token.
///
/// GraphQL has two string forms and downstream consumers care which one was
/// written, so the distinction is kept in the token rather than flattened:
///
/// - `SingleQuoted`: `"..."` — one line of content, no unescaped `"` and no
///   line terminator inside.
/// - `BlockQuoted`: `"""..."""` — the raw text between the triple-quote
///   delimiters, preserved verbatim. No de-indentation and no escape
///   processing is applied; snapshot tooling depends on getting the exact
///   source bytes back.
///
/// In both cases the content excludes the quote delimiters themselves.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StringValue<'src> {
    SingleQuoted(Cow<'src, str>),
    BlockQuoted(Cow<'src, str>),
}

impl<'src> StringValue<'src> {
    /// Returns the string content, regardless of quoting form.
    pub fn content(&self) -> &str {
        match self {
            StringValue::SingleQuoted(content) => content,
            StringValue::BlockQuoted(content) => content,
        }
    }
}
