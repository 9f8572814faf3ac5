use crate::ast::Directive;
use crate::ast::Selection;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A named fragment spread: `...FragmentName @directives`.
///
/// `fragment_name` is never the literal `on` (reserved in fragment-name
/// position). The name is a weak reference to a [`FragmentDefinition`]
/// elsewhere; resolving it is the consumer's job.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentSpread<'src> {
    pub fragment_name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
}

/// An inline fragment: `... on Type @directives { ... }`.
///
/// The type condition is optional; the selection set is mandatory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Vec<Selection<'src>>,
}

/// A fragment definition: `fragment Name on Type @directives { ... }`.
///
/// Both the type condition and the selection set are mandatory here, unlike
/// on an inline fragment.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentDefinition<'src> {
    pub fragment_name: Cow<'src, str>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Vec<Selection<'src>>,
}

/// The `on TypeName` clause narrowing a fragment to a concrete or abstract
/// type.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeCondition<'src> {
    pub named_type: Cow<'src, str>,
}
