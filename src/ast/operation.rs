use crate::ast::Directive;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// An operation definition, in either of its two grammatical forms.
///
/// The shorthand form is a bare selection set (`{ id }`) with no name, type,
/// variables, or directives; it always denotes a query. The full form
/// spells out the operation type and may carry a name, variable
/// definitions, and directives.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OperationDefinition<'src> {
    SelectionSet(Vec<Selection<'src>>),
    Operation(Operation<'src>),
}

/// The full (non-shorthand) form of an operation definition.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Operation<'src> {
    pub operation_type: OperationType,
    pub name: Option<Cow<'src, str>>,
    /// `None` when no variable-definition list was written; a written list
    /// always has at least one element (the grammar rejects `()`).
    pub variable_definitions: Option<Vec<VariableDefinition<'src>>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Vec<Selection<'src>>,
}

/// The three operation types of the executable grammar.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// Returns the keyword that introduces this operation type in source
    /// text.
    pub fn name(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}
