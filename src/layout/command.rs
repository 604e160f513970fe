use super::{GRID_COLUMNS, ModeLayout, SectionType, UiMode, VoucherLayoutConfig};
use crate::error::LayoutError;
use crate::schema::FieldType;
use serde::{Deserialize, Serialize};

/// A single designer edit. Every drag, resize or property change in the
/// designer becomes one of these and goes through [`apply_command`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LayoutCommand {
    /// Moves a placement to another section (or position in the same one).
    /// Overlaps with existing placements are allowed.
    MoveField {
        field_id: String,
        from: SectionType,
        to: SectionType,
        row: u32,
        col: u8,
    },
    ResizeField {
        section: SectionType,
        field_id: String,
        col_span: u8,
    },
    /// Resize driven by dragging the field's edge by `delta_px` inside a
    /// container `container_width` pixels wide.
    DragResize {
        section: SectionType,
        field_id: String,
        start_span: u8,
        delta_px: f64,
        container_width: f64,
    },
    /// Swaps the `order` of two sections.
    ReorderSections { a: SectionType, b: SectionType },
    SetLabelOverride {
        section: SectionType,
        field_id: String,
        label: Option<String>,
    },
    SetTypeOverride {
        section: SectionType,
        field_id: String,
        field_type: Option<FieldType>,
    },
    RemoveField {
        section: SectionType,
        field_id: String,
    },
}

/// Column span after dragging an edge: the pixel delta is converted to whole
/// columns (rounded), added to `start_span` and clamped to `1..=12`.
/// A container without a usable width leaves the span unchanged.
pub fn span_from_drag(start_span: u8, delta_px: f64, container_width: f64) -> u8 {
    let column_width = container_width / GRID_COLUMNS as f64;
    if !column_width.is_finite() || column_width <= 0.0 || !delta_px.is_finite() {
        return start_span.clamp(1, GRID_COLUMNS);
    }
    let delta_cols = (delta_px / column_width).round();
    (start_span as f64 + delta_cols).clamp(1.0, GRID_COLUMNS as f64) as u8
}

/// Applies `command` to the `mode` layout of `config` in place.
pub fn apply_command(
    config: &mut VoucherLayoutConfig,
    mode: UiMode,
    command: LayoutCommand,
) -> Result<(), LayoutError> {
    let layout = config.mode_mut(mode);
    match command {
        LayoutCommand::MoveField {
            field_id,
            from,
            to,
            row,
            col,
        } => move_field(layout, &field_id, from, to, row, col),
        LayoutCommand::ResizeField {
            section,
            field_id,
            col_span,
        } => resize_field(layout, section, &field_id, col_span),
        LayoutCommand::DragResize {
            section,
            field_id,
            start_span,
            delta_px,
            container_width,
        } => {
            let col_span = span_from_drag(start_span, delta_px, container_width);
            resize_field(layout, section, &field_id, col_span)
        }
        LayoutCommand::ReorderSections { a, b } => reorder_sections(layout, a, b),
        LayoutCommand::SetLabelOverride {
            section,
            field_id,
            label,
        } => {
            let key = find_key(layout, section, &field_id)?;
            if let Some(field) = layout.get_mut(key) {
                field.label_override = label;
            }
            Ok(())
        }
        LayoutCommand::SetTypeOverride {
            section,
            field_id,
            field_type,
        } => {
            let key = find_key(layout, section, &field_id)?;
            if let Some(field) = layout.get_mut(key) {
                field.type_override = field_type;
            }
            Ok(())
        }
        LayoutCommand::RemoveField { section, field_id } => {
            let key = find_key(layout, section, &field_id)?;
            if let Some(s) = layout.section_mut(section) {
                s.keys.retain(|k| *k != key);
            }
            layout.arena_mut().remove(key);
            Ok(())
        }
    }
}

/// Functional form of [`apply_command`]: consumes a config and returns the
/// edited one.
pub fn reduce(
    mut config: VoucherLayoutConfig,
    mode: UiMode,
    command: LayoutCommand,
) -> Result<VoucherLayoutConfig, LayoutError> {
    apply_command(&mut config, mode, command)?;
    Ok(config)
}

fn find_key(
    layout: &ModeLayout,
    section: SectionType,
    field_id: &str,
) -> Result<super::LayoutKey, LayoutError> {
    if layout.section(section).is_none() {
        return Err(LayoutError::SectionNotFound(section));
    }
    layout
        .find(section, field_id)
        .ok_or_else(|| LayoutError::FieldNotFound {
            section,
            field_id: field_id.to_string(),
        })
}

fn move_field(
    layout: &mut ModeLayout,
    field_id: &str,
    from: SectionType,
    to: SectionType,
    row: u32,
    col: u8,
) -> Result<(), LayoutError> {
    if layout.section(to).is_none() {
        return Err(LayoutError::SectionNotFound(to));
    }
    let key = find_key(layout, from, field_id)?;

    if let Some(source) = layout.section_mut(from) {
        source.keys.retain(|k| *k != key);
    }
    if let Some(field) = layout.get_mut(key) {
        field.row = row;
        field.col = col;
        if field.clamp_to_grid() {
            tracing::warn!(field_id, col, span = field.col_span, "moved field clamped to grid");
        }
    }
    if let Some(target) = layout.section_mut(to) {
        target.keys.push(key);
    }
    Ok(())
}

fn resize_field(
    layout: &mut ModeLayout,
    section: SectionType,
    field_id: &str,
    col_span: u8,
) -> Result<(), LayoutError> {
    let key = find_key(layout, section, field_id)?;
    if let Some(field) = layout.get_mut(key) {
        field.col_span = col_span.clamp(1, GRID_COLUMNS);
        if field.clamp_to_grid() {
            tracing::warn!(field_id, col = field.col, span = field.col_span, "resized field clamped to grid");
        }
    }
    Ok(())
}

fn reorder_sections(layout: &mut ModeLayout, a: SectionType, b: SectionType) -> Result<(), LayoutError> {
    let order_a = layout.section(a).ok_or(LayoutError::SectionNotFound(a))?.order;
    let order_b = layout.section(b).ok_or(LayoutError::SectionNotFound(b))?.order;
    if let Some(s) = layout.section_mut(a) {
        s.order = order_b;
    }
    if let Some(s) = layout.section_mut(b) {
        s.order = order_a;
    }
    Ok(())
}
