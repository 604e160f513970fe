use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// What kind of rule this is. Only `Visibility` rules are evaluated today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    Visibility,
    Validation,
    Computed,
}

/// Comparison applied by a single condition.
///
/// Operators this engine does not know deserialize to `Unknown`, and a
/// condition using it never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Equals => "EQUALS",
            Operator::NotEquals => "NOT_EQUALS",
            Operator::Contains => "CONTAINS",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::LessThan => "LESS_THAN",
            Operator::IsEmpty => "IS_EMPTY",
            Operator::IsNotEmpty => "IS_NOT_EMPTY",
            Operator::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// How the conditions of one rule combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    #[default]
    And,
    Or,
}

/// What happens to the target field when a visibility rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Effect {
    #[default]
    Hide,
}

/// A single `value-of(field_id) <operator> value` test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    /// Key read from the value map.
    pub field_id: String,
    pub operator: Operator,
    /// `None` when the operand is absent; an explicit JSON `null` is
    /// `Some(Value::Null)`, which coerces to `0` and `"null"`.
    #[serde(
        default,
        deserialize_with = "present_operand",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

fn present_operand<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RuleCondition {
    pub fn new(field_id: &str, operator: Operator, value: Option<Value>) -> Self {
        Self {
            field_id: field_id.to_string(),
            operator,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub target_field_id: String,
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub effect: Effect,
}

impl RuleDefinition {
    /// A visibility rule hiding `target_field_id` when its conditions match.
    pub fn hide_when(
        id: &str,
        target_field_id: &str,
        match_type: MatchType,
        conditions: Vec<RuleCondition>,
    ) -> Self {
        Self {
            id: id.to_string(),
            rule_type: RuleType::Visibility,
            target_field_id: target_field_id.to_string(),
            conditions,
            match_type,
            effect: Effect::Hide,
        }
    }
}
