use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Selection;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A field selection, optionally aliased, with arguments, directives, and
/// an optional nested selection set.
///
/// `selection_set` is `None` for a leaf field; a written selection set is
/// never empty.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field<'src> {
    pub alias: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<Vec<Selection<'src>>>,
}
