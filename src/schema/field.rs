use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Declared input type of a field. Drives coercion and type-specific checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
    Checkbox,
    Textarea,
    Relation,
}

/// Layout hint for how much of a row a field wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldWidth {
    #[default]
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1/3")]
    Third,
    #[serde(rename = "1/4")]
    Quarter,
}

impl FieldWidth {
    /// Number of columns (out of 12) this width occupies.
    pub fn col_span(self) -> u8 {
        match self {
            FieldWidth::Full => 12,
            FieldWidth::Half => 6,
            FieldWidth::Third => 4,
            FieldWidth::Quarter => 3,
        }
    }
}

/// One entry of a SELECT field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

/// A single data-entry field.
///
/// `id` is the stable identity referenced by sections and rules; `name` is the
/// key under which the field's value lives in the value map and under which
/// validation errors are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub width: FieldWidth,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Regular expression source tested against the stringified value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl FieldDefinition {
    /// A bare field with no validation hints; `id` doubles as `name`.
    pub fn new(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            label: label.to_string(),
            field_type,
            width: FieldWidth::Full,
            required: false,
            min: None,
            max: None,
            pattern: None,
            options: None,
            relation_target: None,
            default_value: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn with_width(mut self, width: FieldWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_relation(mut self, target: &str) -> Self {
        self.relation_target = Some(target.to_string());
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}
