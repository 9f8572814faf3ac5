use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use serde::Deserialize;
use serde::Serialize;

/// A variable definition: `$var: Type = default @directives`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub type_annotation: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}
