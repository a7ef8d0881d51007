//! Expression and condition parsing over normalized nodes.

use block_compiler::compile::{parse_condition, parse_expr, parse_expr_or};
use block_compiler::normalize::{CounterKind, LogicOp, Node, PredicateColor};
use block_compiler::program::{ArithOp, ComparisonOp, Condition, Expr};
use serde_json::json;

fn number(value: i64) -> Node {
    Node::Number { value }
}

fn variable(name: &str) -> Node {
    Node::Variable { name: name.into() }
}

fn boxed(node: Node) -> Option<Box<Node>> {
    Some(Box::new(node))
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn expr_literal_serializes_as_bare_number() {
    let expr = parse_expr(Some(&number(5)));
    assert_eq!(expr, Expr::Number(5));
    assert_eq!(serde_json::to_value(&expr).unwrap(), json!(5));
}

#[test]
fn expr_variable_serializes_as_template_token() {
    let expr = parse_expr(Some(&variable("j")));
    assert_eq!(expr, Expr::Variable("{{j}}".into()));
    assert_eq!(serde_json::to_value(&expr).unwrap(), json!("{{j}}"));
}

#[test]
fn expr_arithmetic_tree() {
    let node = Node::Arithmetic {
        op: ArithOp::Multiply,
        left: boxed(number(3)),
        right: boxed(variable("i")),
    };
    let expr = parse_expr(Some(&node));
    assert_eq!(
        serde_json::to_value(&expr).unwrap(),
        json!({"type": "arithmetic", "op": "*", "left": 3, "right": "{{i}}"})
    );
}

#[test]
fn expr_arithmetic_missing_operand_folds_to_zero() {
    let node = Node::Arithmetic {
        op: ArithOp::Add,
        left: boxed(number(1)),
        right: None,
    };
    assert_eq!(
        serde_json::to_value(parse_expr(Some(&node))).unwrap(),
        json!({"type": "arithmetic", "op": "+", "left": 1, "right": 0})
    );
}

#[test]
fn expr_empty_and_unsuitable_operands_fold_to_zero() {
    assert_eq!(parse_expr(None), Expr::Number(0));
    assert_eq!(
        parse_expr(Some(&Node::Boolean { value: true })),
        Expr::Number(0)
    );
    assert_eq!(
        parse_expr(Some(&Node::Unknown {
            block_type: "teleport".into()
        })),
        Expr::Number(0)
    );
}

#[test]
fn expr_or_default_applies_only_when_empty() {
    assert_eq!(parse_expr_or(None, 1), Expr::Number(1));
    assert_eq!(parse_expr_or(Some(&number(4)), 1), Expr::Number(4));
    // A filled but unsuitable socket still folds to 0, not the default.
    assert_eq!(
        parse_expr_or(Some(&Node::Boolean { value: true }), 1),
        Expr::Number(0)
    );
}

// =============================================================================
// Conditions
// =============================================================================

#[test]
fn condition_boolean_literal() {
    let cond = parse_condition(Some(&Node::Boolean { value: false }));
    assert_eq!(cond, Some(Condition::Boolean { value: false }));
    assert_eq!(
        serde_json::to_value(&cond).unwrap(),
        json!({"type": "boolean", "value": false})
    );
}

#[test]
fn logic_compare_of_variable_and_literal() {
    let node = Node::LogicCompare {
        op: ComparisonOp::Lt,
        left: boxed(variable("i")),
        right: boxed(number(10)),
    };
    assert_eq!(
        serde_json::to_value(parse_condition(Some(&node))).unwrap(),
        json!({
            "type": "variableComparison",
            "variable": "{{i}}",
            "operator": "<",
            "value": 10
        })
    );
}

#[test]
fn logic_compare_with_counter_becomes_predicate() {
    let node = Node::LogicCompare {
        op: ComparisonOp::Gte,
        left: boxed(Node::Counter {
            kind: CounterKind::Warehouse,
        }),
        right: boxed(number(2)),
    };
    assert_eq!(
        serde_json::to_value(parse_condition(Some(&node))).unwrap(),
        json!({
            "type": "condition",
            "functionName": "checkWarehouse",
            "operator": ">=",
            "value": 2,
            "check": true
        })
    );
}

#[test]
fn comparison_with_literal_field() {
    let node = Node::Comparison {
        op: ComparisonOp::Neq,
        left: boxed(Node::Counter {
            kind: CounterKind::Pin,
        }),
        value: 3,
    };
    assert_eq!(
        parse_condition(Some(&node)),
        Some(Condition::Predicate {
            function_name: "checkPin".into(),
            operator: Some(ComparisonOp::Neq),
            value: Some(Expr::Number(3)),
            check: true,
        })
    );
}

#[test]
fn color_predicates_use_camel_case_names() {
    for (color, name) in [
        (PredicateColor::Green, "isGreen"),
        (PredicateColor::Red, "isRed"),
        (PredicateColor::Yellow, "isYellow"),
    ] {
        let cond = parse_condition(Some(&Node::ColorPredicate { color }));
        assert_eq!(cond, Some(Condition::predicate(name, true)));
    }
    // Bare predicates serialize without operator or value keys.
    let value =
        serde_json::to_value(Condition::predicate("isGreen", true)).expect("Should serialize");
    assert_eq!(
        value,
        json!({"type": "condition", "functionName": "isGreen", "check": true})
    );
}

#[test]
fn bare_counter_is_a_truthy_predicate() {
    let cond = parse_condition(Some(&Node::Counter {
        kind: CounterKind::Warehouse,
    }));
    assert_eq!(cond, Some(Condition::predicate("checkWarehouse", true)));
}

#[test]
fn boolean_equals_folds_predicate_and_literal() {
    let node = Node::BooleanEquals {
        left: boxed(Node::ColorPredicate {
            color: PredicateColor::Red,
        }),
        right: boxed(Node::Boolean { value: false }),
    };
    assert_eq!(
        parse_condition(Some(&node)),
        Some(Condition::predicate("isRed", false))
    );

    // The predicate may sit on either side.
    let node = Node::BooleanEquals {
        left: boxed(Node::Boolean { value: true }),
        right: boxed(Node::ColorPredicate {
            color: PredicateColor::Yellow,
        }),
    };
    assert_eq!(
        parse_condition(Some(&node)),
        Some(Condition::predicate("isYellow", true))
    );
}

#[test]
fn boolean_equals_without_predicate_is_an_equality() {
    let node = Node::BooleanEquals {
        left: boxed(variable("i")),
        right: boxed(number(4)),
    };
    assert_eq!(
        parse_condition(Some(&node)),
        Some(Condition::VariableComparison {
            variable: Expr::Variable("{{i}}".into()),
            operator: ComparisonOp::Eq,
            value: Expr::Number(4),
        })
    );
}

#[test]
fn condition_wrapper_delegates_to_inner() {
    let node = Node::ConditionWrapper {
        inner: boxed(Node::Boolean { value: true }),
    };
    assert_eq!(
        parse_condition(Some(&node)),
        Some(Condition::Boolean { value: true })
    );

    let empty = Node::ConditionWrapper { inner: None };
    assert_eq!(parse_condition(Some(&empty)), None);
}

#[test]
fn logic_operation_combines_both_sides() {
    let node = Node::LogicOperation {
        op: LogicOp::Or,
        left: boxed(Node::ColorPredicate {
            color: PredicateColor::Green,
        }),
        right: boxed(Node::Boolean { value: false }),
    };
    assert_eq!(
        serde_json::to_value(parse_condition(Some(&node))).unwrap(),
        json!({
            "type": "or",
            "conditions": [
                {"type": "condition", "functionName": "isGreen", "check": true},
                {"type": "boolean", "value": false}
            ]
        })
    );
}

#[test]
fn logic_operation_with_unparsable_side_yields_nothing() {
    let node = Node::LogicOperation {
        op: LogicOp::And,
        left: boxed(Node::Boolean { value: true }),
        right: None,
    };
    assert_eq!(parse_condition(Some(&node)), None);

    let node = Node::LogicOperation {
        op: LogicOp::And,
        left: boxed(Node::Boolean { value: true }),
        right: boxed(Node::Unknown {
            block_type: "teleport".into(),
        }),
    };
    assert_eq!(parse_condition(Some(&node)), None);
}

#[test]
fn unrecognized_node_is_not_a_condition() {
    assert_eq!(parse_condition(None), None);
    assert_eq!(parse_condition(Some(&number(1))), None);
    assert_eq!(
        parse_condition(Some(&Node::Unknown {
            block_type: "teleport".into()
        })),
        None
    );
}
