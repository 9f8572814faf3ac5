use crate::ast::Argument;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A directive annotation: `@name(args)`.
///
/// Only syntactic well-formedness is checked; whether the directive exists
/// or is legal at its location is a semantic question for consumers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Directive<'src> {
    pub name: Cow<'src, str>,
    pub arguments: Vec<Argument<'src>>,
}
