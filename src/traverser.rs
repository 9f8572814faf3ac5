//! Generic depth-first traversal of a parsed [`Document`].

use crate::Visitor;
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
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;

/// Walks a [`Document`] depth-first in a fixed, grammar-congruent order,
/// invoking the paired enter/exit hooks of a [`Visitor`] for every node.
///
/// Enter hooks run before descending into a node's children; exit hooks run
/// after. The walk order for each node kind follows the grammar: variable
/// definitions, then directives, then the selection set for operations;
/// arguments, then directives, then the nested selection set for fields;
/// and so on recursively into values and type annotations.
///
/// The first hook to return `Err` aborts the walk; the `?` operator
/// threading below guarantees no hook fires after a failure.
pub struct Traverser;

impl Traverser {
    /// Traverses `document`, driving `visitor`.
    pub fn traverse<'src, V: Visitor<'src>>(
        document: &Document<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_document(document)?;
        Self::traverse_definitions(&document.definitions, visitor)?;
        visitor.exit_document(document)
    }

    fn traverse_definitions<'src, V: Visitor<'src>>(
        definitions: &[ExecutableDefinition<'src>],
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_executable_definitions(definitions)?;
        for definition in definitions {
            match definition {
                ExecutableDefinition::Operation(operation) => {
                    Self::traverse_operation_definition(operation, visitor)?;
                }
                ExecutableDefinition::Fragment(fragment) => {
                    Self::traverse_fragment_definition(fragment, visitor)?;
                }
            }
        }
        visitor.exit_executable_definitions(definitions)
    }

    fn traverse_operation_definition<'src, V: Visitor<'src>>(
        definition: &OperationDefinition<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_operation_definition(definition)?;
        match definition {
            OperationDefinition::SelectionSet(selections) => {
                Self::traverse_selection_set(selections, visitor)?;
            }
            OperationDefinition::Operation(operation) => {
                Self::traverse_operation(operation, visitor)?;
            }
        }
        visitor.exit_operation_definition(definition)
    }

    fn traverse_operation<'src, V: Visitor<'src>>(
        operation: &Operation<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_operation(operation)?;
        if let Some(definitions) = &operation.variable_definitions {
            for definition in definitions {
                Self::traverse_variable_definition(definition, visitor)?;
            }
        }
        Self::traverse_directives(&operation.directives, visitor)?;
        Self::traverse_selection_set(&operation.selection_set, visitor)?;
        visitor.exit_operation(operation)
    }

    fn traverse_fragment_definition<'src, V: Visitor<'src>>(
        definition: &FragmentDefinition<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_fragment_definition(definition)?;
        Self::traverse_type_condition(&definition.type_condition, visitor)?;
        Self::traverse_directives(&definition.directives, visitor)?;
        Self::traverse_selection_set(&definition.selection_set, visitor)?;
        visitor.exit_fragment_definition(definition)
    }

    fn traverse_type_condition<'src, V: Visitor<'src>>(
        type_condition: &TypeCondition<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_named_type(&type_condition.named_type)?;
        visitor.exit_named_type(&type_condition.named_type)
    }

    fn traverse_selection_set<'src, V: Visitor<'src>>(
        selections: &[Selection<'src>],
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_selection_set(selections)?;
        for selection in selections {
            match selection {
                Selection::Field(field) => Self::traverse_field(field, visitor)?,
                Selection::FragmentSpread(spread) => {
                    Self::traverse_fragment_spread(spread, visitor)?;
                }
                Selection::InlineFragment(fragment) => {
                    Self::traverse_inline_fragment(fragment, visitor)?;
                }
            }
        }
        visitor.exit_selection_set(selections)
    }

    fn traverse_field<'src, V: Visitor<'src>>(
        field: &Field<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_field(field)?;
        for argument in &field.arguments {
            Self::traverse_argument(argument, visitor)?;
        }
        Self::traverse_directives(&field.directives, visitor)?;
        if let Some(selections) = &field.selection_set {
            Self::traverse_selection_set(selections, visitor)?;
        }
        visitor.exit_field(field)
    }

    fn traverse_fragment_spread<'src, V: Visitor<'src>>(
        spread: &FragmentSpread<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_fragment_spread(spread)?;
        Self::traverse_directives(&spread.directives, visitor)?;
        visitor.exit_fragment_spread(spread)
    }

    fn traverse_inline_fragment<'src, V: Visitor<'src>>(
        fragment: &InlineFragment<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_inline_fragment(fragment)?;
        if let Some(type_condition) = &fragment.type_condition {
            Self::traverse_type_condition(type_condition, visitor)?;
        }
        Self::traverse_directives(&fragment.directives, visitor)?;
        Self::traverse_selection_set(&fragment.selection_set, visitor)?;
        visitor.exit_inline_fragment(fragment)
    }

    fn traverse_directives<'src, V: Visitor<'src>>(
        directives: &[Directive<'src>],
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        for directive in directives {
            visitor.enter_directive(directive)?;
            for argument in &directive.arguments {
                Self::traverse_argument(argument, visitor)?;
            }
            visitor.exit_directive(directive)?;
        }
        Ok(())
    }

    fn traverse_argument<'src, V: Visitor<'src>>(
        argument: &Argument<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_argument(argument)?;
        Self::traverse_value(&argument.value, visitor)?;
        visitor.exit_argument(argument)
    }

    fn traverse_variable_definition<'src, V: Visitor<'src>>(
        definition: &VariableDefinition<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_variable_definition(definition)?;
        Self::traverse_variable(&definition.variable, visitor)?;
        Self::traverse_type(&definition.type_annotation, visitor)?;
        if let Some(default_value) = &definition.default_value {
            Self::traverse_value(default_value, visitor)?;
        }
        Self::traverse_directives(&definition.directives, visitor)?;
        visitor.exit_variable_definition(definition)
    }

    fn traverse_variable<'src, V: Visitor<'src>>(
        variable: &Variable<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_variable(variable)?;
        visitor.exit_variable(variable)
    }

    fn traverse_type<'src, V: Visitor<'src>>(
        annotation: &TypeAnnotation<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        match annotation {
            TypeAnnotation::Named(name) => {
                visitor.enter_named_type(name)?;
                visitor.exit_named_type(name)
            }
            TypeAnnotation::List(element) => {
                visitor.enter_list_type(element)?;
                Self::traverse_type(element, visitor)?;
                visitor.exit_list_type(element)
            }
            TypeAnnotation::NonNull(inner) => {
                visitor.enter_non_null_type(inner)?;
                Self::traverse_type(inner, visitor)?;
                visitor.exit_non_null_type(inner)
            }
        }
    }

    fn traverse_value<'src, V: Visitor<'src>>(
        value: &Value<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        match value {
            Value::Variable(variable) => Self::traverse_variable(variable, visitor),
            Value::Int(text) => {
                visitor.enter_int_value(text)?;
                visitor.exit_int_value(text)
            }
            Value::Float(text) => {
                visitor.enter_float_value(text)?;
                visitor.exit_float_value(text)
            }
            Value::String(string_value) => {
                visitor.enter_string_value(string_value)?;
                visitor.exit_string_value(string_value)
            }
            Value::Boolean(boolean) => {
                visitor.enter_boolean_value(*boolean)?;
                visitor.exit_boolean_value(*boolean)
            }
            Value::Null => {
                visitor.enter_null_value()?;
                visitor.exit_null_value()
            }
            Value::Enum(symbol) => {
                visitor.enter_enum_value(symbol)?;
                visitor.exit_enum_value(symbol)
            }
            Value::List(values) => {
                visitor.enter_list_value(values)?;
                for element in values {
                    Self::traverse_value(element, visitor)?;
                }
                visitor.exit_list_value(values)
            }
            Value::Object(fields) => {
                visitor.enter_object_value(fields)?;
                for field in fields {
                    Self::traverse_object_field(field, visitor)?;
                }
                visitor.exit_object_value(fields)
            }
        }
    }

    fn traverse_object_field<'src, V: Visitor<'src>>(
        field: &ObjectField<'src>,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.enter_object_field(field)?;
        Self::traverse_value(&field.value, visitor)?;
        visitor.exit_object_field(field)
    }
}
