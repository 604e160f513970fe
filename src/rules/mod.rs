//! Visibility rule evaluation.
//!
//! A matching VISIBILITY rule hides its target field. Rules of other types are
//! carried by the schema but not evaluated here.

use crate::schema::{Effect, FieldDefinition, FormDefinition, MatchType, RuleDefinition, RuleType};
use crate::value::ValueMap;
use ahash::AHashSet;

mod condition;
mod formatter;
mod trace;

pub use condition::check_condition;
pub use formatter::TraceFormatter;
pub use trace::{ConditionTrace, RuleTrace};

/// Ids of the fields that must not be rendered (or required).
pub type HiddenSet = AHashSet<String>;

/// Evaluates every visibility rule against `values` and returns the ids of
/// hidden fields.
///
/// Pure: the same rules and values always produce the same set. Rules that
/// reference unknown fields simply read undefined values.
pub fn evaluate_visibility(rules: &[RuleDefinition], values: &ValueMap) -> HiddenSet {
    let mut hidden = HiddenSet::new();
    for rule in rules.iter().filter(|r| r.rule_type == RuleType::Visibility) {
        let matched = rule_matches(rule, values);
        tracing::trace!(rule = %rule.id, target = %rule.target_field_id, matched, "visibility rule");
        if matched {
            match rule.effect {
                Effect::Hide => {
                    hidden.insert(rule.target_field_id.clone());
                }
            }
        }
    }
    hidden
}

/// Convenience wrapper over [`evaluate_visibility`] for a whole form.
pub fn evaluate_form_visibility(form: &FormDefinition, values: &ValueMap) -> HiddenSet {
    evaluate_visibility(&form.rules, values)
}

/// Combines a rule's conditions per its match type. An empty AND rule matches,
/// an empty OR rule does not.
pub fn rule_matches(rule: &RuleDefinition, values: &ValueMap) -> bool {
    match rule.match_type {
        MatchType::And => rule.conditions.iter().all(|c| check_condition(c, values)),
        MatchType::Or => rule.conditions.iter().any(|c| check_condition(c, values)),
    }
}

/// The form's fields that are not hidden, in declaration order.
pub fn visible_fields<'a>(form: &'a FormDefinition, hidden: &HiddenSet) -> Vec<&'a FieldDefinition> {
    form.fields
        .iter()
        .filter(|f| !hidden.contains(&f.id))
        .collect()
}

/// Evaluates every visibility rule and records why it did or did not match.
pub fn explain_visibility(rules: &[RuleDefinition], values: &ValueMap) -> Vec<RuleTrace> {
    rules
        .iter()
        .filter(|r| r.rule_type == RuleType::Visibility)
        .map(|rule| trace_rule(rule, values))
        .collect()
}

fn trace_rule(rule: &RuleDefinition, values: &ValueMap) -> RuleTrace {
    let mut conditions = Vec::with_capacity(rule.conditions.len());
    let mut decided: Option<bool> = None;

    for condition in &rule.conditions {
        if decided.is_some() {
            conditions.push(ConditionTrace::NotEvaluated);
            continue;
        }
        let outcome = check_condition(condition, values);
        conditions.push(ConditionTrace::Evaluated {
            field_id: condition.field_id.clone(),
            operator: condition.operator,
            actual: values.get(&condition.field_id).cloned(),
            expected: condition.value.clone(),
            outcome,
        });
        match (rule.match_type, outcome) {
            (MatchType::And, false) => decided = Some(false),
            (MatchType::Or, true) => decided = Some(true),
            _ => {}
        }
    }

    let matched = decided.unwrap_or(match rule.match_type {
        MatchType::And => true,
        MatchType::Or => false,
    });

    RuleTrace {
        rule_id: rule.id.clone(),
        target_field_id: rule.target_field_id.clone(),
        match_type: rule.match_type,
        conditions,
        matched,
    }
}
