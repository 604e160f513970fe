use super::{FieldLayout, GRID_COLUMNS, ModeLayout, SectionType, UiMode, VoucherLayoutConfig};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Read-only identifiers every voucher header shows first.
pub const DEFAULT_SYSTEM_FIELDS: [&str; 4] = ["voucherNumber", "status", "createdBy", "createdAt"];

/// A field picked in the designer, with the section it should land in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelection {
    pub field_id: String,
    pub section: SectionType,
}

impl FieldSelection {
    pub fn new(field_id: &str, section: SectionType) -> Self {
        Self {
            field_id: field_id.to_string(),
            section,
        }
    }
}

/// Everything auto-placement needs from the designer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementInput {
    /// Selected fields in selection order.
    #[serde(default)]
    pub selected: Vec<FieldSelection>,
    /// Ids of the enabled actions, in display order.
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Computes grid placements for both UI modes from a field selection.
///
/// ```
/// use docform::layout::{AutoPlacer, FieldSelection, PlacementInput, SectionType};
///
/// let input = PlacementInput {
///     selected: vec![FieldSelection::new("customer", SectionType::Header)],
///     actions: vec!["save".to_string()],
/// };
/// let layout = AutoPlacer::builder().system_fields(Vec::<String>::new()).build().place(&input);
/// assert_eq!(layout.windows.fields(SectionType::Header)[0].col_span, 4);
/// assert_eq!(layout.classic.fields(SectionType::Header)[0].col_span, 12);
/// ```
#[derive(Debug, Clone)]
pub struct AutoPlacer {
    system_fields: Vec<String>,
    system_span: u8,
    header_span: u8,
    max_actions_per_row: usize,
}

pub struct AutoPlacerBuilder {
    system_fields: Vec<String>,
    system_span: u8,
    header_span: u8,
    max_actions_per_row: usize,
}

impl Default for AutoPlacerBuilder {
    fn default() -> Self {
        Self {
            system_fields: DEFAULT_SYSTEM_FIELDS.iter().map(|s| s.to_string()).collect(),
            system_span: 3,
            header_span: 4,
            max_actions_per_row: 4,
        }
    }
}

impl AutoPlacerBuilder {
    pub fn system_fields<S: Into<String>>(mut self, fields: Vec<S>) -> Self {
        self.system_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Span of each system field in windows mode.
    pub fn system_span(mut self, span: u8) -> Self {
        self.system_span = span;
        self
    }

    /// Span of each header field in windows mode.
    pub fn header_span(mut self, span: u8) -> Self {
        self.header_span = span;
        self
    }

    pub fn max_actions_per_row(mut self, count: usize) -> Self {
        self.max_actions_per_row = count;
        self
    }

    pub fn build(self) -> AutoPlacer {
        AutoPlacer {
            system_fields: self.system_fields,
            system_span: self.system_span.clamp(1, GRID_COLUMNS),
            header_span: self.header_span.clamp(1, GRID_COLUMNS),
            max_actions_per_row: self.max_actions_per_row.clamp(1, GRID_COLUMNS as usize),
        }
    }
}

impl Default for AutoPlacer {
    fn default() -> Self {
        AutoPlacerBuilder::default().build()
    }
}

impl AutoPlacer {
    pub fn builder() -> AutoPlacerBuilder {
        AutoPlacerBuilder::default()
    }

    /// Recomputes both UI modes from scratch.
    pub fn place(&self, input: &PlacementInput) -> VoucherLayoutConfig {
        VoucherLayoutConfig {
            classic: self.place_mode(UiMode::Classic, input),
            windows: self.place_mode(UiMode::Windows, input),
        }
    }

    pub fn place_mode(&self, mode: UiMode, input: &PlacementInput) -> ModeLayout {
        let mut layout = ModeLayout::new();
        let mut placed: AHashSet<&str> = AHashSet::new();

        let header_row = self.place_system_fields(mode, &mut layout, &mut placed);

        let mut header = Vec::new();
        let mut body = Vec::new();
        let mut extra = Vec::new();
        for selection in &input.selected {
            if !placed.insert(selection.field_id.as_str()) {
                tracing::debug!(field_id = %selection.field_id, "skipping duplicate selection");
                continue;
            }
            match selection.section {
                SectionType::Header => header.push(selection.field_id.as_str()),
                SectionType::Body => body.push(selection.field_id.as_str()),
                SectionType::Extra => extra.push(selection.field_id.as_str()),
                SectionType::Actions => {
                    tracing::debug!(field_id = %selection.field_id, "field hinted ACTIONS placed in EXTRA");
                    extra.push(selection.field_id.as_str());
                }
            }
        }

        self.place_header_fields(mode, &mut layout, header_row, &header);
        stack_rows(&mut layout, SectionType::Body, &body);
        stack_rows(&mut layout, SectionType::Extra, &extra);
        self.place_actions(mode, &mut layout, &input.actions);

        layout
    }

    /// Places the system fields at the top of HEADER and returns the first
    /// free row below them.
    fn place_system_fields<'a>(
        &'a self,
        mode: UiMode,
        layout: &mut ModeLayout,
        placed: &mut AHashSet<&'a str>,
    ) -> u32 {
        match mode {
            UiMode::Windows => {
                let per_row = (GRID_COLUMNS / self.system_span) as usize;
                let mut rows = 0;
                for (i, field_id) in self.system_fields.iter().enumerate() {
                    placed.insert(field_id.as_str());
                    let row = (i / per_row) as u32;
                    let col = (i % per_row) as u8 * self.system_span;
                    layout.push_field(
                        SectionType::Header,
                        FieldLayout::new(field_id, row, col, self.system_span),
                    );
                    rows = row + 1;
                }
                rows
            }
            UiMode::Classic => {
                for (row, field_id) in self.system_fields.iter().enumerate() {
                    placed.insert(field_id.as_str());
                    layout.push_field(SectionType::Header, FieldLayout::full_row(field_id, row as u32));
                }
                self.system_fields.len() as u32
            }
        }
    }

    fn place_header_fields(&self, mode: UiMode, layout: &mut ModeLayout, start_row: u32, fields: &[&str]) {
        match mode {
            UiMode::Windows => {
                let span = self.header_span;
                let mut row = start_row;
                let mut col: u8 = 0;
                for field_id in fields {
                    if col + span > GRID_COLUMNS {
                        row += 1;
                        col = 0;
                    }
                    layout.push_field(SectionType::Header, FieldLayout::new(field_id, row, col, span));
                    col += span;
                }
            }
            UiMode::Classic => {
                for (i, field_id) in fields.iter().enumerate() {
                    layout.push_field(
                        SectionType::Header,
                        FieldLayout::full_row(field_id, start_row + i as u32),
                    );
                }
            }
        }
    }

    fn place_actions(&self, mode: UiMode, layout: &mut ModeLayout, actions: &[String]) {
        if actions.is_empty() {
            return;
        }
        match mode {
            UiMode::Windows => {
                let per_row = self.max_actions_per_row.min(actions.len());
                let span = GRID_COLUMNS / per_row as u8;
                for (i, action) in actions.iter().enumerate() {
                    let row = (i / per_row) as u32;
                    let col = (i % per_row) as u8 * span;
                    layout.push_field(SectionType::Actions, FieldLayout::new(action, row, col, span));
                }
            }
            UiMode::Classic => {
                let ids: Vec<&str> = actions.iter().map(String::as_str).collect();
                stack_rows(layout, SectionType::Actions, &ids);
            }
        }
    }
}

/// One full-width row per field, starting at row 0.
fn stack_rows(layout: &mut ModeLayout, section: SectionType, fields: &[&str]) {
    for (row, field_id) in fields.iter().enumerate() {
        layout.push_field(section, FieldLayout::full_row(field_id, row as u32));
    }
}

/// Runs auto-placement with the default options.
pub fn run_auto_placement(input: &PlacementInput) -> VoucherLayoutConfig {
    AutoPlacer::default().place(input)
}
