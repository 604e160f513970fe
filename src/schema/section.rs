use serde::{Deserialize, Serialize};

/// An ordered grouping of fields inside a document.
///
/// `field_ids` point into the owning document's field list. Ids that do not
/// resolve are skipped when the section is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub field_ids: Vec<String>,
}

impl SectionDefinition {
    pub fn new(id: &str, field_ids: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: None,
            field_ids: field_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}
