use crate::schema::FieldType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the layout grid in columns.
pub const GRID_COLUMNS: u8 = 12;

/// One of the two layout presentations maintained in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Stacked single column.
    Classic,
    /// Dense multi-column grid.
    Windows,
}

impl UiMode {
    pub const ALL: [UiMode; 2] = [UiMode::Classic, UiMode::Windows];
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiMode::Classic => write!(f, "classic"),
            UiMode::Windows => write!(f, "windows"),
        }
    }
}

/// The fixed sections of a voucher layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    Header,
    Body,
    Extra,
    Actions,
}

impl SectionType {
    /// All sections in their default rendering order.
    pub const ALL: [SectionType; 4] = [
        SectionType::Header,
        SectionType::Body,
        SectionType::Extra,
        SectionType::Actions,
    ];
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionType::Header => "HEADER",
            SectionType::Body => "BODY",
            SectionType::Extra => "EXTRA",
            SectionType::Actions => "ACTIONS",
        };
        write!(f, "{}", s)
    }
}

/// Grid placement of one field (or action) inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldLayout {
    pub field_id: String,
    pub row: u32,
    /// 0 to 11.
    pub col: u8,
    /// 1 to 12, with `col + col_span <= 12`.
    pub col_span: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_override: Option<FieldType>,
}

impl FieldLayout {
    pub fn new(field_id: &str, row: u32, col: u8, col_span: u8) -> Self {
        Self {
            field_id: field_id.to_string(),
            row,
            col,
            col_span,
            row_span: None,
            label_override: None,
            type_override: None,
        }
    }

    /// A field occupying a whole row.
    pub fn full_row(field_id: &str, row: u32) -> Self {
        Self::new(field_id, row, 0, GRID_COLUMNS)
    }

    /// Column just past this field's right edge.
    pub fn end_col(&self) -> u8 {
        self.col.saturating_add(self.col_span)
    }

    /// Pulls `col` and `col_span` back inside the grid. Returns whether
    /// anything changed.
    pub fn clamp_to_grid(&mut self) -> bool {
        let before = (self.col, self.col_span);
        self.col = self.col.min(GRID_COLUMNS - 1);
        self.col_span = self.col_span.clamp(1, GRID_COLUMNS - self.col);
        before != (self.col, self.col_span)
    }
}
