use crate::error::CanonicalError;
use crate::layout::ModeSnapshot;
use serde::{Deserialize, Serialize};

/// The only document version this crate reads and writes.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLayout {
    #[serde(default)]
    pub classic: ModeSnapshot,
    #[serde(default)]
    pub windows: ModeSnapshot,
}

/// The persisted shape of a voucher type, as handed to and received from
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalVoucherType {
    pub schema_version: u32,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub requires_approval: bool,
    #[serde(default)]
    pub enabled_actions: Vec<String>,
    #[serde(default)]
    pub layout: CanonicalLayout,
}

impl CanonicalVoucherType {
    pub fn from_json(json: &str) -> Result<Self, CanonicalError> {
        serde_json::from_str(json).map_err(|e| CanonicalError::JsonParseError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, CanonicalError> {
        serde_json::to_string_pretty(self).map_err(|e| CanonicalError::JsonParseError(e.to_string()))
    }
}
