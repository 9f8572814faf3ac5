//! Token types produced by the lexer and consumed by the parser.

mod string_value;
mod token;
mod token_kind;

pub use string_value::StringValue;
pub use token::Token;
pub use token_kind::TokenKind;
