//! The [`Visitor`] capability trait consumed by the
//! [`Traverser`](crate::Traverser).

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::ObjectField;
use crate::ast::Operation;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::StringValue;

/// A set of paired enter/exit hooks, one pair per node kind, invoked by the
/// [`Traverser`](crate::Traverser) during its depth-first walk.
///
/// Every hook defaults to a no-op `Ok(())`, so implementations override
/// only the node kinds they care about. A hook signals failure by returning
/// `Err`; traversal stops immediately and the error propagates to the
/// caller of `traverse` — no further hooks fire after that point.
///
/// The `Error` associated type is entirely the implementation's own; the
/// traverser never constructs or inspects it.
#[allow(unused_variables)]
pub trait Visitor<'src> {
    /// The error type produced by this visitor's hooks.
    type Error;

    fn enter_document(&mut self, document: &Document<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_document(&mut self, document: &Document<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_executable_definitions(
        &mut self,
        definitions: &[ExecutableDefinition<'src>],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_executable_definitions(
        &mut self,
        definitions: &[ExecutableDefinition<'src>],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_operation_definition(
        &mut self,
        definition: &OperationDefinition<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_operation_definition(
        &mut self,
        definition: &OperationDefinition<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_operation(&mut self, operation: &Operation<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_operation(&mut self, operation: &Operation<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_fragment_definition(
        &mut self,
        definition: &FragmentDefinition<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_fragment_definition(
        &mut self,
        definition: &FragmentDefinition<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_selection_set(&mut self, selections: &[Selection<'src>]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_selection_set(&mut self, selections: &[Selection<'src>]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_field(&mut self, field: &Field<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_field(&mut self, field: &Field<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_fragment_spread(&mut self, spread: &FragmentSpread<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_fragment_spread(&mut self, spread: &FragmentSpread<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_inline_fragment(
        &mut self,
        fragment: &InlineFragment<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_inline_fragment(&mut self, fragment: &InlineFragment<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_argument(&mut self, argument: &Argument<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_argument(&mut self, argument: &Argument<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_directive(&mut self, directive: &Directive<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_directive(&mut self, directive: &Directive<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_variable_definition(
        &mut self,
        definition: &VariableDefinition<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_variable_definition(
        &mut self,
        definition: &VariableDefinition<'src>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_variable(&mut self, variable: &Variable<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_variable(&mut self, variable: &Variable<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_named_type(&mut self, name: &str) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_named_type(&mut self, name: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called with the element type wrapped by the list.
    fn enter_list_type(&mut self, element: &TypeAnnotation<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_list_type(&mut self, element: &TypeAnnotation<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called with the type wrapped by the non-null.
    fn enter_non_null_type(&mut self, inner: &TypeAnnotation<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_non_null_type(&mut self, inner: &TypeAnnotation<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_int_value(&mut self, text: &str) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_int_value(&mut self, text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_float_value(&mut self, text: &str) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_float_value(&mut self, text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_string_value(&mut self, value: &StringValue<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_string_value(&mut self, value: &StringValue<'src>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_boolean_value(&mut self, value: bool) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_boolean_value(&mut self, value: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_null_value(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_null_value(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_enum_value(&mut self, symbol: &str) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_enum_value(&mut self, symbol: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_list_value(&mut self, values: &[Value<'src>]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_list_value(&mut self, values: &[Value<'src>]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_object_value(&mut self, fields: &[ObjectField<'src>]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_object_value(&mut self, fields: &[ObjectField<'src>]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_object_field(&mut self, field: &ObjectField<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
    fn exit_object_field(&mut self, field: &ObjectField<'src>) -> Result<(), Self::Error> {
        Ok(())
    }
}
