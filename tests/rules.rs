//! Tests for the visibility rule engine and condition semantics.
mod common;
use common::*;
use docform::prelude::*;
use docform::rules::{ConditionTrace, visible_fields};

fn condition(operator: Operator, value: Option<Value>) -> RuleCondition {
    RuleCondition::new("a", operator, value)
}

#[test]
fn test_equals_is_loose() {
    let c = condition(Operator::Equals, Some(Value::from(5)));
    assert!(check_condition(&c, &values(&[("a", Value::from("5"))])));
    assert!(check_condition(&c, &values(&[("a", Value::from(" 5 "))])));
    assert!(!check_condition(&c, &values(&[("a", Value::from("five"))])));

    let truthy = condition(Operator::Equals, Some(Value::from(1)));
    assert!(check_condition(&truthy, &values(&[("a", Value::Bool(true))])));
}

#[test]
fn test_not_equals_negates_loose_equality() {
    let c = condition(Operator::NotEquals, Some(Value::from("X")));
    assert!(!check_condition(&c, &values(&[("a", Value::from("X"))])));
    assert!(check_condition(&c, &values(&[("a", Value::from("Y"))])));
    // undefined != "X"
    assert!(check_condition(&c, &ValueMap::new()));
}

#[test]
fn test_null_only_equals_null_or_missing() {
    let c = condition(Operator::Equals, None);
    assert!(check_condition(&c, &ValueMap::new()));
    assert!(check_condition(&c, &values(&[("a", Value::Null)])));
    assert!(!check_condition(&c, &values(&[("a", Value::from(0))])));
    assert!(!check_condition(&c, &values(&[("a", Value::from(""))])));
}

#[test]
fn test_contains_stringifies_both_sides() {
    let c = condition(Operator::Contains, Some(Value::from(23)));
    assert!(check_condition(&c, &values(&[("a", Value::from(1234))])));
    assert!(check_condition(&c, &values(&[("a", Value::from("x23y"))])));
    assert!(!check_condition(&c, &values(&[("a", Value::from("2 3"))])));

    let list = condition(Operator::Contains, Some(Value::from("b,c")));
    let tags = Value::List(vec![Value::from("a"), Value::from("b"), Value::from("c")]);
    assert!(check_condition(&list, &values(&[("a", tags)])));
}

#[test]
fn test_is_empty_semantics() {
    let c = condition(Operator::IsEmpty, None);
    assert!(check_condition(&c, &values(&[("a", Value::from(""))])));
    assert!(check_condition(&c, &values(&[("a", Value::Null)])));
    assert!(check_condition(&c, &ValueMap::new()));
    assert!(!check_condition(&c, &values(&[("a", Value::from(0))])));
    assert!(!check_condition(&c, &values(&[("a", Value::Bool(false))])));

    let not_empty = condition(Operator::IsNotEmpty, None);
    assert!(check_condition(&not_empty, &values(&[("a", Value::from(0))])));
    assert!(!check_condition(&not_empty, &values(&[("a", Value::from(""))])));
}

#[test]
fn test_numeric_comparisons_coerce_and_reject_nan() {
    let gt = condition(Operator::GreaterThan, Some(Value::from("10")));
    assert!(check_condition(&gt, &values(&[("a", Value::from(11))])));
    assert!(check_condition(&gt, &values(&[("a", Value::from("10.5"))])));
    assert!(!check_condition(&gt, &values(&[("a", Value::from(10))])));
    assert!(!check_condition(&gt, &values(&[("a", Value::from("abc"))])));
    assert!(!check_condition(&gt, &ValueMap::new()));

    let lt = condition(Operator::LessThan, Some(Value::from(1)));
    // null reads as 0
    assert!(check_condition(&lt, &values(&[("a", Value::Null)])));
    // undefined reads as NaN
    assert!(!check_condition(&lt, &ValueMap::new()));
    assert!(!check_condition(&lt, &values(&[("a", Value::from("abc"))])));
}

#[test]
fn test_unknown_operator_never_matches() {
    let c: RuleCondition =
        serde_json::from_str(r#"{ "fieldId": "a", "operator": "STARTS_WITH", "value": "x" }"#)
            .unwrap();
    assert_eq!(c.operator, Operator::Unknown);
    assert!(!check_condition(&c, &values(&[("a", Value::from("xyz"))])));
}

#[test]
fn test_visibility_scenario_hides_on_match() {
    let rules = vec![RuleDefinition::hide_when(
        "r1",
        "b",
        MatchType::And,
        vec![RuleCondition::new("a", Operator::Equals, Some(Value::from("X")))],
    )];

    let hidden = evaluate_visibility(&rules, &values(&[("a", Value::from("X"))]));
    assert_eq!(hidden.len(), 1);
    assert!(hidden.contains("b"));

    let hidden = evaluate_visibility(&rules, &values(&[("a", Value::from("Y"))]));
    assert!(hidden.is_empty());
}

#[test]
fn test_match_types_combine_conditions() {
    let conditions = vec![
        RuleCondition::new("a", Operator::Equals, Some(Value::from(1))),
        RuleCondition::new("b", Operator::Equals, Some(Value::from(2))),
    ];
    let and_rule = RuleDefinition::hide_when("and", "t-and", MatchType::And, conditions.clone());
    let or_rule = RuleDefinition::hide_when("or", "t-or", MatchType::Or, conditions);
    let rules = vec![and_rule, or_rule];

    let hidden = evaluate_visibility(&rules, &values(&[("a", Value::from(1))]));
    assert!(!hidden.contains("t-and"));
    assert!(hidden.contains("t-or"));

    let hidden = evaluate_visibility(
        &rules,
        &values(&[("a", Value::from(1)), ("b", Value::from("2"))]),
    );
    assert!(hidden.contains("t-and"));
    assert!(hidden.contains("t-or"));
}

#[test]
fn test_empty_condition_lists() {
    let rules = vec![
        RuleDefinition::hide_when("and", "always-hidden", MatchType::And, vec![]),
        RuleDefinition::hide_when("or", "never-hidden", MatchType::Or, vec![]),
    ];
    let hidden = evaluate_visibility(&rules, &ValueMap::new());
    assert!(hidden.contains("always-hidden"));
    assert!(!hidden.contains("never-hidden"));
}

#[test]
fn test_non_visibility_rules_are_ignored() {
    let mut rule = RuleDefinition::hide_when("r", "b", MatchType::And, vec![]);
    rule.rule_type = RuleType::Computed;
    assert!(evaluate_visibility(&[rule.clone()], &ValueMap::new()).is_empty());
    rule.rule_type = RuleType::Validation;
    assert!(evaluate_visibility(&[rule], &ValueMap::new()).is_empty());
}

#[test]
fn test_evaluation_is_pure() {
    let form = create_order_form();
    let values = values(&[("customerType", Value::from("retail")), ("amount", Value::from(3))]);
    let first = evaluate_visibility(&form.rules, &values);
    let second = evaluate_visibility(&form.rules, &values);
    assert_eq!(first, second);
    assert!(first.contains("discount"));
    assert!(first.contains("notes"));
}

#[test]
fn test_visible_fields_filters_hidden() {
    let form = create_order_form();
    let hidden = evaluate_visibility(&form.rules, &values(&[("customerType", Value::from("retail"))]));
    let visible: Vec<_> = visible_fields(&form, &hidden).iter().map(|f| f.id.as_str()).collect();
    assert!(!visible.contains(&"discount"));
    assert!(!visible.contains(&"notes"));
    assert!(visible.contains(&"amount"));
}

#[test]
fn test_explain_short_circuits_like_evaluation() {
    let form = create_order_form();
    let traces = explain_visibility(&form.rules, &values(&[("amount", Value::from(""))]));
    assert_eq!(traces.len(), 2);

    let notes = &traces[1];
    assert!(notes.matched);
    assert_eq!(notes.conditions[0].outcome(), Some(true));
    assert_eq!(notes.conditions[1], ConditionTrace::NotEvaluated);
    assert_eq!(
        TraceFormatter::format_rule(notes),
        "$amount (was \"\") IS_EMPTY"
    );

    let discount = &traces[0];
    assert!(!discount.matched);
    assert_eq!(
        TraceFormatter::format_rule(discount),
        "$customerType (was undefined) EQUALS retail"
    );
}

#[test]
fn test_explain_agrees_with_evaluate() {
    let form = create_order_form();
    for vals in [
        create_valid_order_values(),
        values(&[("customerType", Value::from("retail")), ("amount", Value::from(50))]),
        ValueMap::new(),
    ] {
        let hidden = evaluate_visibility(&form.rules, &vals);
        for trace in explain_visibility(&form.rules, &vals) {
            assert_eq!(trace.matched, hidden.contains(&trace.target_field_id));
        }
    }
}

fn parse_condition(json: &str) -> RuleCondition {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_explicit_null_operand_is_kept() {
    let with_null = parse_condition(r#"{ "fieldId": "a", "operator": "EQUALS", "value": null }"#);
    assert_eq!(with_null.value, Some(Value::Null));

    let absent = parse_condition(r#"{ "fieldId": "a", "operator": "IS_EMPTY" }"#);
    assert_eq!(absent.value, None);
}

#[test]
fn test_null_operand_compares_as_zero() {
    let gt = parse_condition(r#"{ "fieldId": "a", "operator": "GREATER_THAN", "value": null }"#);
    assert!(check_condition(&gt, &values(&[("a", Value::from(5))])));
    assert!(!check_condition(&gt, &values(&[("a", Value::from(-1))])));

    let lt = parse_condition(r#"{ "fieldId": "a", "operator": "LESS_THAN", "value": null }"#);
    assert!(check_condition(&lt, &values(&[("a", Value::from(-1))])));
    assert!(!check_condition(&lt, &values(&[("a", Value::from(0))])));
}

#[test]
fn test_null_operand_contains_as_text() {
    let c = parse_condition(r#"{ "fieldId": "a", "operator": "CONTAINS", "value": null }"#);
    assert!(check_condition(&c, &values(&[("a", Value::from("nullable"))])));
    assert!(!check_condition(&c, &values(&[("a", Value::from("empty"))])));
}

#[test]
fn test_contains_uses_exponent_form_for_large_numbers() {
    let c = condition(Operator::Contains, Some(Value::from("e+21")));
    assert!(check_condition(&c, &values(&[("a", Value::from(1e21))])));
}
