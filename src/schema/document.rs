use super::{FieldDefinition, RuleDefinition, SectionDefinition, TableDefinition};
use crate::error::SchemaError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A flat, single-page form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub module: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

fn default_version() -> u32 {
    1
}

/// A reference problem found in a definition. These never stop evaluation,
/// the engines simply skip whatever does not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    DanglingSectionField { section: String, field_id: String },
    DuplicateSectionField { section: String, field_id: String },
    DanglingRuleTarget { rule: String, field_id: String },
    DanglingConditionField { rule: String, field_id: String },
    DuplicateFieldId(String),
    DuplicateFieldName(String),
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::DanglingSectionField { section, field_id } => {
                write!(f, "section '{}' references unknown field '{}'", section, field_id)
            }
            SchemaIssue::DuplicateSectionField { section, field_id } => {
                write!(f, "section '{}' lists field '{}' more than once", section, field_id)
            }
            SchemaIssue::DanglingRuleTarget { rule, field_id } => {
                write!(f, "rule '{}' targets unknown field '{}'", rule, field_id)
            }
            SchemaIssue::DanglingConditionField { rule, field_id } => {
                write!(f, "rule '{}' reads unknown field '{}'", rule, field_id)
            }
            SchemaIssue::DuplicateFieldId(id) => write!(f, "field id '{}' is not unique", id),
            SchemaIssue::DuplicateFieldName(name) => {
                write!(f, "field name '{}' is not unique", name)
            }
        }
    }
}

impl FormDefinition {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            module: String::new(),
            version: default_version(),
            fields: Vec::new(),
            sections: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::JsonParseError(e.to_string()))
    }

    pub fn field_by_id(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Resolves a section's `field_ids` in order, dropping ids that do not
    /// resolve and repeated ids.
    pub fn section_fields<'a>(&'a self, section: &SectionDefinition) -> Vec<&'a FieldDefinition> {
        let mut seen = AHashSet::new();
        section
            .field_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| {
                let field = self.field_by_id(id);
                if field.is_none() {
                    tracing::debug!(section = %section.id, field_id = %id, "skipping unresolved section field");
                }
                field
            })
            .collect()
    }

    /// Lists every reference that does not resolve, in declaration order.
    pub fn reference_issues(&self) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();

        let mut ids = AHashSet::new();
        let mut names = AHashSet::new();
        for field in &self.fields {
            if !ids.insert(field.id.as_str()) {
                issues.push(SchemaIssue::DuplicateFieldId(field.id.clone()));
            }
            if !names.insert(field.name.as_str()) {
                issues.push(SchemaIssue::DuplicateFieldName(field.name.clone()));
            }
        }

        for section in &self.sections {
            let mut listed = AHashSet::new();
            for field_id in &section.field_ids {
                if !listed.insert(field_id.as_str()) {
                    issues.push(SchemaIssue::DuplicateSectionField {
                        section: section.id.clone(),
                        field_id: field_id.clone(),
                    });
                } else if !ids.contains(field_id.as_str()) {
                    issues.push(SchemaIssue::DanglingSectionField {
                        section: section.id.clone(),
                        field_id: field_id.clone(),
                    });
                }
            }
        }

        for rule in &self.rules {
            if !ids.contains(rule.target_field_id.as_str()) {
                issues.push(SchemaIssue::DanglingRuleTarget {
                    rule: rule.id.clone(),
                    field_id: rule.target_field_id.clone(),
                });
            }
            for condition in &rule.conditions {
                let key = condition.field_id.as_str();
                if !ids.contains(key) && !names.contains(key) {
                    issues.push(SchemaIssue::DanglingConditionField {
                        rule: rule.id.clone(),
                        field_id: condition.field_id.clone(),
                    });
                }
            }
        }

        issues
    }
}

/// A header + line items document such as an invoice or journal voucher.
///
/// The header and each row of `lines` are validated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherTypeDefinition {
    pub id: String,
    pub name: String,
    pub header: FormDefinition,
    pub lines: TableDefinition,
    #[serde(default)]
    pub summary_fields: Vec<FieldDefinition>,
}

impl VoucherTypeDefinition {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::JsonParseError(e.to_string()))
    }
}
