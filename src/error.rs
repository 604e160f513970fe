use crate::layout::SectionType;
use thiserror::Error;

/// Errors raised while loading or preparing a form or voucher schema.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse schema JSON: {0}")]
    JsonParseError(String),

    #[error("Field '{field}' has an invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        field: String,
        pattern: String,
        message: String,
    },
}

/// Errors that can occur when applying an edit command to a layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Field '{field_id}' was not found in section {section}")]
    FieldNotFound {
        section: SectionType,
        field_id: String,
    },

    #[error("Section {0} is not part of this layout")]
    SectionNotFound(SectionType),
}

/// Errors that can occur when converting between the wizard config and the
/// canonical document.
#[derive(Error, Debug, Clone)]
pub enum CanonicalError {
    #[error("Unsupported schema version {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("Failed to parse canonical JSON: {0}")]
    JsonParseError(String),

    #[error("Action '{0}' is listed more than once")]
    DuplicateAction(String),
}
