use crate::schema::{MatchType, Operator};
use crate::value::Value;

/// Record of how one condition was evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionTrace {
    Evaluated {
        field_id: String,
        operator: Operator,
        /// `None` when the value map had no entry.
        actual: Option<Value>,
        expected: Option<Value>,
        outcome: bool,
    },
    /// Skipped because an earlier condition already decided the rule.
    NotEvaluated,
}

impl ConditionTrace {
    pub fn outcome(&self) -> Option<bool> {
        match self {
            ConditionTrace::Evaluated { outcome, .. } => Some(*outcome),
            ConditionTrace::NotEvaluated => None,
        }
    }
}

/// Record of one visibility rule evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTrace {
    pub rule_id: String,
    pub target_field_id: String,
    pub match_type: MatchType,
    pub conditions: Vec<ConditionTrace>,
    /// Whether the rule matched, i.e. whether the target is hidden by it.
    pub matched: bool,
}
