use super::{ConditionTrace, RuleTrace};
use crate::schema::{MatchType, Operator};
use crate::value::{Value, format_number};
use itertools::Itertools;

/// Formats rule traces into human-readable explanations.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Explains a rule, e.g. `$kind (was cash) EQUALS cash AND $amount (was 12) GREATER_THAN 10`.
    ///
    /// Conditions skipped by short-circuiting are left out. A rule without
    /// conditions is rendered as `always` (AND) or `never` (OR).
    pub fn format_rule(trace: &RuleTrace) -> String {
        if trace.conditions.is_empty() {
            return match trace.match_type {
                MatchType::And => "always".to_string(),
                MatchType::Or => "never".to_string(),
            };
        }
        let joiner = match trace.match_type {
            MatchType::And => " AND ",
            MatchType::Or => " OR ",
        };
        trace
            .conditions
            .iter()
            .filter_map(Self::format_condition)
            .join(joiner)
    }

    fn format_condition(trace: &ConditionTrace) -> Option<String> {
        match trace {
            ConditionTrace::Evaluated {
                field_id,
                operator,
                actual,
                expected,
                ..
            } => {
                let left = format!("${} (was {})", field_id, Self::format_value(actual.as_ref()));
                Some(match operator {
                    Operator::IsEmpty | Operator::IsNotEmpty => format!("{} {}", left, operator),
                    _ => format!(
                        "{} {} {}",
                        left,
                        operator,
                        Self::format_value(expected.as_ref())
                    ),
                })
            }
            ConditionTrace::NotEvaluated => None,
        }
    }

    fn format_value(value: Option<&Value>) -> String {
        match value {
            None => "undefined".to_string(),
            Some(Value::Number(n)) => format_number(*n),
            Some(Value::Text(s)) if s.is_empty() => "\"\"".to_string(),
            Some(Value::List(items)) => format!(
                "[{}]",
                items.iter().map(|v| Self::format_value(Some(v))).join(", ")
            ),
            Some(v) => v.to_string(),
        }
    }
}
