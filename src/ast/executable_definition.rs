use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use serde::Deserialize;
use serde::Serialize;

/// A top-level definition in an executable document: an operation or a
/// fragment.
///
/// Type-system (schema) definitions are out of scope for this parser; a
/// document containing them fails with an unexpected-token error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ExecutableDefinition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}
