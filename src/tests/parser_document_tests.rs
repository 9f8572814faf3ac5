//! Tests for document-level parsing: operations, fragment definitions, and
//! whole-document structure.

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Operation;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::tests::utils::parse_document;
use crate::tests::utils::shorthand_selections;
use crate::tests::utils::single_operation;

/// A leaf field with no alias, arguments, directives, or selections.
fn leaf(name: &str) -> Selection<'_> {
    Selection::Field(Field {
        alias: None,
        name: name.into(),
        arguments: Vec::new(),
        directives: Vec::new(),
        selection_set: None,
    })
}

// =============================================================================
// Operation forms
// =============================================================================

/// Verifies that a bare selection set parses as the shorthand operation
/// form.
#[test]
fn shorthand_operation() {
    let document = parse_document("{ id name }");
    assert_eq!(
        shorthand_selections(&document),
        &[leaf("id"), leaf("name")]
    );
}

/// Verifies a named query with no variables or directives.
#[test]
fn named_query() {
    let document = parse_document("query UserName { user }");
    let operation = single_operation(&document);
    assert_eq!(operation.operation_type, OperationType::Query);
    assert_eq!(operation.name.as_deref(), Some("UserName"));
    assert_eq!(operation.variable_definitions, None);
    assert!(operation.directives.is_empty());
    assert_eq!(operation.selection_set, vec![leaf("user")]);
}

/// Verifies that the operation name is optional in the full form.
#[test]
fn anonymous_full_form_query() {
    let document = parse_document("query { id }");
    let operation = single_operation(&document);
    assert_eq!(operation.name, None);
    assert_eq!(operation.selection_set, vec![leaf("id")]);
}

/// Verifies mutation and subscription operation types.
#[test]
fn mutation_and_subscription() {
    let document = parse_document("mutation M { save } subscription S { events }");
    assert_eq!(document.definitions.len(), 2);

    let ExecutableDefinition::Operation(OperationDefinition::Operation(mutation)) =
        &document.definitions[0]
    else {
        panic!("expected an operation");
    };
    assert_eq!(mutation.operation_type, OperationType::Mutation);
    assert_eq!(mutation.name.as_deref(), Some("M"));

    let ExecutableDefinition::Operation(OperationDefinition::Operation(subscription)) =
        &document.definitions[1]
    else {
        panic!("expected an operation");
    };
    assert_eq!(subscription.operation_type, OperationType::Subscription);
}

/// Verifies that directives on an operation are kept in order.
#[test]
fn operation_directives() {
    let document = parse_document("query Q @cached @traced(level: 2) { id }");
    let operation = single_operation(&document);
    assert_eq!(
        operation.directives,
        vec![
            Directive {
                name: "cached".into(),
                arguments: Vec::new(),
            },
            Directive {
                name: "traced".into(),
                arguments: vec![Argument {
                    name: "level".into(),
                    value: Value::Int("2".into()),
                }],
            },
        ]
    );
}

// =============================================================================
// Fragment definitions
// =============================================================================

/// Verifies a minimal fragment definition.
#[test]
fn fragment_definition() {
    let document = parse_document("fragment UserFields on User { id name }");
    let ExecutableDefinition::Fragment(fragment) = &document.definitions[0] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(
        fragment,
        &FragmentDefinition {
            fragment_name: "UserFields".into(),
            type_condition: TypeCondition {
                named_type: "User".into(),
            },
            directives: Vec::new(),
            selection_set: vec![leaf("id"), leaf("name")],
        }
    );
}

/// Verifies directives between the type condition and the selection set.
#[test]
fn fragment_definition_with_directives() {
    let document = parse_document("fragment F on T @internal { id }");
    let ExecutableDefinition::Fragment(fragment) = &document.definitions[0] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.directives.len(), 1);
    assert_eq!(fragment.directives[0].name, "internal");
}

/// Verifies that a fragment may be named `onward`: the `on` reservation
/// applies to the exact word, not the prefix.
#[test]
fn fragment_named_onward() {
    let document = parse_document("fragment onward on T { id }");
    let ExecutableDefinition::Fragment(fragment) = &document.definitions[0] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.fragment_name, "onward");
}

// =============================================================================
// Document structure
// =============================================================================

/// Verifies that an empty (or all-insignificant) document parses to zero
/// definitions.
#[test]
fn empty_document() {
    assert_eq!(parse_document("").definitions.len(), 0);
    assert_eq!(parse_document("  # nothing here\n").definitions.len(), 0);
}

/// Verifies that definitions of mixed kinds keep their source order.
#[test]
fn definition_order_is_preserved() {
    let document = parse_document("{ a } fragment F on T { b } query Q { c }");
    assert_eq!(document.definitions.len(), 3);
    assert!(matches!(
        document.definitions[0],
        ExecutableDefinition::Operation(OperationDefinition::SelectionSet(_))
    ));
    assert!(matches!(
        document.definitions[1],
        ExecutableDefinition::Fragment(_)
    ));
    assert!(matches!(
        document.definitions[2],
        ExecutableDefinition::Operation(OperationDefinition::Operation(_))
    ));
}

// =============================================================================
// Full structural equality
// =============================================================================

/// Parses a realistic two-definition document and compares the entire AST
/// structurally.
#[test]
fn realistic_document_full_ast() {
    let source = r#"
        fragment CustomerSummary on Customer {
            id
            defaultAddress {
                countryCode: countryCodeV2
                formattedArea
            }
            email
        }

        query CustomerList($after: String, $imageMaxSize: Int!) {
            customers(first: 50, after: $after) {
                edges {
                    node {
                        ...CustomerSummary
                    }
                }
            }
        }
    "#;

    let expected = Document {
        definitions: vec![
            ExecutableDefinition::Fragment(FragmentDefinition {
                fragment_name: "CustomerSummary".into(),
                type_condition: TypeCondition {
                    named_type: "Customer".into(),
                },
                directives: Vec::new(),
                selection_set: vec![
                    leaf("id"),
                    Selection::Field(Field {
                        alias: None,
                        name: "defaultAddress".into(),
                        arguments: Vec::new(),
                        directives: Vec::new(),
                        selection_set: Some(vec![
                            Selection::Field(Field {
                                alias: Some("countryCode".into()),
                                name: "countryCodeV2".into(),
                                arguments: Vec::new(),
                                directives: Vec::new(),
                                selection_set: None,
                            }),
                            leaf("formattedArea"),
                        ]),
                    }),
                    leaf("email"),
                ],
            }),
            ExecutableDefinition::Operation(OperationDefinition::Operation(Operation {
                operation_type: OperationType::Query,
                name: Some("CustomerList".into()),
                variable_definitions: Some(vec![
                    VariableDefinition {
                        variable: Variable {
                            name: "after".into(),
                        },
                        type_annotation: TypeAnnotation::Named("String".into()),
                        default_value: None,
                        directives: Vec::new(),
                    },
                    VariableDefinition {
                        variable: Variable {
                            name: "imageMaxSize".into(),
                        },
                        type_annotation: TypeAnnotation::NonNull(Box::new(
                            TypeAnnotation::Named("Int".into()),
                        )),
                        default_value: None,
                        directives: Vec::new(),
                    },
                ]),
                directives: Vec::new(),
                selection_set: vec![Selection::Field(Field {
                    alias: None,
                    name: "customers".into(),
                    arguments: vec![
                        Argument {
                            name: "first".into(),
                            value: Value::Int("50".into()),
                        },
                        Argument {
                            name: "after".into(),
                            value: Value::Variable(Variable {
                                name: "after".into(),
                            }),
                        },
                    ],
                    directives: Vec::new(),
                    selection_set: Some(vec![Selection::Field(Field {
                        alias: None,
                        name: "edges".into(),
                        arguments: Vec::new(),
                        directives: Vec::new(),
                        selection_set: Some(vec![Selection::Field(Field {
                            alias: None,
                            name: "node".into(),
                            arguments: Vec::new(),
                            directives: Vec::new(),
                            selection_set: Some(vec![Selection::FragmentSpread(
                                FragmentSpread {
                                    fragment_name: "CustomerSummary".into(),
                                    directives: Vec::new(),
                                },
                            )]),
                        })]),
                    })]),
                })],
            })),
        ],
    };

    assert_eq!(parse_document(source), expected);
}
