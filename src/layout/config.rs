use super::{FieldLayout, GRID_COLUMNS, LayoutArena, LayoutKey, SectionType, UiMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A section of one UI mode: its rendering position plus the keys of the
/// placements it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub order: u32,
    pub keys: Vec<LayoutKey>,
}

/// Serialized shape of a section: placements inlined in section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub order: u32,
    #[serde(default)]
    pub fields: Vec<FieldLayout>,
}

/// Serialized shape of a whole UI mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSnapshot {
    #[serde(default)]
    pub sections: BTreeMap<SectionType, SectionSnapshot>,
}

/// The layout of one UI mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ModeSnapshot", into = "ModeSnapshot")]
pub struct ModeLayout {
    arena: LayoutArena,
    sections: BTreeMap<SectionType, SectionLayout>,
}

impl Default for ModeLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeLayout {
    /// All four sections, empty, in their default order.
    pub fn new() -> Self {
        let sections = SectionType::ALL
            .iter()
            .enumerate()
            .map(|(order, section)| {
                (
                    *section,
                    SectionLayout {
                        order: order as u32,
                        keys: Vec::new(),
                    },
                )
            })
            .collect();
        Self {
            arena: LayoutArena::new(),
            sections,
        }
    }

    pub fn arena(&self) -> &LayoutArena {
        &self.arena
    }

    pub fn section(&self, section: SectionType) -> Option<&SectionLayout> {
        self.sections.get(&section)
    }

    pub(crate) fn section_mut(&mut self, section: SectionType) -> Option<&mut SectionLayout> {
        self.sections.get_mut(&section)
    }

    /// Appends a placement to `section`, creating the section at the end of
    /// the order if it does not exist yet.
    pub fn push_field(&mut self, section: SectionType, layout: FieldLayout) -> LayoutKey {
        let key = self.arena.insert(layout);
        let next_order = self.sections.values().map(|s| s.order + 1).max().unwrap_or(0);
        self.sections
            .entry(section)
            .or_insert_with(|| SectionLayout {
                order: next_order,
                keys: Vec::new(),
            })
            .keys
            .push(key);
        key
    }

    /// Finds the first placement of `field_id` in `section`.
    pub fn find(&self, section: SectionType, field_id: &str) -> Option<LayoutKey> {
        self.sections.get(&section)?.keys.iter().copied().find(|key| {
            self.arena
                .get(*key)
                .is_some_and(|layout| layout.field_id == field_id)
        })
    }

    pub fn get(&self, key: LayoutKey) -> Option<&FieldLayout> {
        self.arena.get(key)
    }

    pub fn get_mut(&mut self, key: LayoutKey) -> Option<&mut FieldLayout> {
        self.arena.get_mut(key)
    }

    pub(crate) fn arena_mut(&mut self) -> &mut LayoutArena {
        &mut self.arena
    }

    /// Placements of `section` in insertion order.
    pub fn fields(&self, section: SectionType) -> Vec<&FieldLayout> {
        self.sections
            .get(&section)
            .map(|s| s.keys.iter().filter_map(|k| self.arena.get(*k)).collect())
            .unwrap_or_default()
    }

    /// Section types sorted by their `order`.
    pub fn sections_in_order(&self) -> Vec<SectionType> {
        let mut sections: Vec<_> = self.sections.iter().map(|(t, s)| (s.order, *t)).collect();
        sections.sort();
        sections.into_iter().map(|(_, t)| t).collect()
    }

    /// Total column span used per row of `section`.
    pub fn row_widths(&self, section: SectionType) -> BTreeMap<u32, u32> {
        let mut widths = BTreeMap::new();
        for layout in self.fields(section) {
            *widths.entry(layout.row).or_insert(0) += layout.col_span as u32;
        }
        widths
    }

    /// Rows whose placements add up to more than the grid width.
    pub fn overflowing_rows(&self) -> Vec<(SectionType, u32)> {
        self.sections
            .keys()
            .flat_map(|section| {
                self.row_widths(*section)
                    .into_iter()
                    .filter(|(_, width)| *width > GRID_COLUMNS as u32)
                    .map(move |(row, _)| (*section, row))
            })
            .collect()
    }

    pub fn to_snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            sections: self
                .sections
                .iter()
                .map(|(section, layout)| {
                    (
                        *section,
                        SectionSnapshot {
                            order: layout.order,
                            fields: self.fields(*section).into_iter().cloned().collect(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl From<ModeSnapshot> for ModeLayout {
    fn from(snapshot: ModeSnapshot) -> Self {
        let mut arena = LayoutArena::new();
        let sections = snapshot
            .sections
            .into_iter()
            .map(|(section, s)| {
                let keys = s.fields.into_iter().map(|f| arena.insert(f)).collect();
                (
                    section,
                    SectionLayout {
                        order: s.order,
                        keys,
                    },
                )
            })
            .collect();
        Self { arena, sections }
    }
}

impl From<ModeLayout> for ModeSnapshot {
    fn from(layout: ModeLayout) -> Self {
        layout.to_snapshot()
    }
}

/// Both UI modes of a voucher layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherLayoutConfig {
    pub classic: ModeLayout,
    pub windows: ModeLayout,
}

impl VoucherLayoutConfig {
    pub fn mode(&self, mode: UiMode) -> &ModeLayout {
        match mode {
            UiMode::Classic => &self.classic,
            UiMode::Windows => &self.windows,
        }
    }

    pub fn mode_mut(&mut self, mode: UiMode) -> &mut ModeLayout {
        match mode {
            UiMode::Classic => &mut self.classic,
            UiMode::Windows => &mut self.windows,
        }
    }
}
