use crate::schema::{Operator, RuleCondition};
use crate::value::{ValueMap, is_empty_value, loose_eq, to_display_string, to_number};

/// Evaluates one condition against the current values.
///
/// A missing value reads as undefined; numeric comparisons involving `NaN`
/// are false and unknown operators never match.
pub fn check_condition(condition: &RuleCondition, values: &ValueMap) -> bool {
    let actual = values.get(&condition.field_id);
    let expected = condition.value.as_ref();

    match condition.operator {
        Operator::Equals => loose_eq(actual, expected),
        Operator::NotEquals => !loose_eq(actual, expected),
        Operator::Contains => to_display_string(actual).contains(&to_display_string(expected)),
        Operator::GreaterThan => to_number(actual) > to_number(expected),
        Operator::LessThan => to_number(actual) < to_number(expected),
        Operator::IsEmpty => is_empty_value(actual),
        Operator::IsNotEmpty => !is_empty_value(actual),
        Operator::Unknown => false,
    }
}
