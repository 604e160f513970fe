use super::FieldDefinition;
use serde::{Deserialize, Serialize};

/// A repeating group of rows, e.g. the line items of a voucher.
///
/// Every column is a full field definition so each one carries its own type
/// and validation hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub id: String,
    /// Value-map key holding the array of rows.
    pub name: String,
    pub columns: Vec<FieldDefinition>,
    #[serde(default = "default_add_label")]
    pub add_label: String,
    #[serde(default = "default_remove_label")]
    pub remove_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
}

fn default_add_label() -> String {
    "Add row".to_string()
}

fn default_remove_label() -> String {
    "Remove".to_string()
}

impl TableDefinition {
    pub fn new(id: &str, name: &str, columns: Vec<FieldDefinition>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            columns,
            add_label: default_add_label(),
            remove_label: default_remove_label(),
            min_rows: None,
            max_rows: None,
        }
    }

    pub fn with_row_limits(mut self, min_rows: Option<usize>, max_rows: Option<usize>) -> Self {
        self.min_rows = min_rows;
        self.max_rows = max_rows;
        self
    }

    pub fn column_by_id(&self, id: &str) -> Option<&FieldDefinition> {
        self.columns.iter().find(|c| c.id == id)
    }
}
