//! A parser for GraphQL *executable* documents: operations and fragments.
//!
//! This crate turns raw GraphQL query-language source text into a
//! validated, strongly-typed syntax tree, or a single precisely-positioned
//! syntax error. It is deliberately scoped to the executable half of the
//! language — type-system (schema) documents, semantic validation against a
//! schema, and execution are all left to downstream consumers of the
//! [`ast::Document`] it produces.
//!
//! The pipeline is: text → [`tokenize`] → token sequence → [`parse`] (a
//! backtracking recursive-descent parser over a [`TokenCursor`]) →
//! [`ast::Document`], with errors resolved to 1-based line/column via
//! [`SourcePosition`]. A generic depth-first [`Traverser`] walks the
//! resulting tree on behalf of pluggable [`Visitor`] implementations.
//!
//! # Example
//!
//! ```
//! let document = graphql_exec_parser::parse("query Q { user { name } }").unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! ```
//!
//! Parsing is a pure, synchronous computation: no I/O, no shared state
//! between calls, and the produced tree borrows from (and may be shared as
//! freely as) the input text.

pub mod ast;
mod byte_span;
mod lex_error;
mod lexer;
mod parse_error;
mod parse_error_kind;
mod parser;
mod source_position;
pub mod token;
mod token_cursor;
mod traverser;
mod visitor;

pub use byte_span::ByteSpan;
pub use lex_error::LexError;
pub use lexer::tokenize;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parser::parse;
pub use source_position::SourcePosition;
pub use token_cursor::TokenCursor;
pub use traverser::Traverser;
pub use visitor::Visitor;

#[cfg(test)]
mod tests;
