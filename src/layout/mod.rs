//! Grid layout engine for the voucher designer.
//!
//! Every voucher keeps two independent layouts, one per [`UiMode`], each made
//! of four [`SectionType`]s on a 12-column grid. [`AutoPlacer`] computes a
//! fresh layout from a field selection; [`apply_command`] performs the
//! designer's incremental edits afterwards.

mod arena;
mod command;
mod config;
mod placement;
mod types;

pub use arena::{LayoutArena, LayoutKey};
pub use command::{LayoutCommand, apply_command, reduce, span_from_drag};
pub use config::{ModeLayout, ModeSnapshot, SectionLayout, SectionSnapshot, VoucherLayoutConfig};
pub use placement::{
    AutoPlacer, AutoPlacerBuilder, DEFAULT_SYSTEM_FIELDS, FieldSelection, PlacementInput,
    run_auto_placement,
};
pub use types::{FieldLayout, GRID_COLUMNS, SectionType, UiMode};
