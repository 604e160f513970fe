use super::FieldLayout;

/// Stable handle of a [`FieldLayout`] record inside a [`LayoutArena`].
///
/// Keys are never reused, so a key held after its record was removed simply
/// resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutKey(u32);

impl LayoutKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owns every field placement of one UI mode. Sections refer to records by
/// key, so edits replace a record in place instead of rebuilding the nested
/// section structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutArena {
    slots: Vec<Option<FieldLayout>>,
    len: usize,
}

impl LayoutArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, layout: FieldLayout) -> LayoutKey {
        let key = LayoutKey(self.slots.len() as u32);
        self.slots.push(Some(layout));
        self.len += 1;
        key
    }

    pub fn get(&self, key: LayoutKey) -> Option<&FieldLayout> {
        self.slots.get(key.index()).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, key: LayoutKey) -> Option<&mut FieldLayout> {
        self.slots.get_mut(key.index()).and_then(|slot| slot.as_mut())
    }

    /// Swaps in a new record, returning the old one.
    pub fn replace(&mut self, key: LayoutKey, layout: FieldLayout) -> Option<FieldLayout> {
        self.slots
            .get_mut(key.index())
            .and_then(|slot| slot.as_mut())
            .map(|current| std::mem::replace(current, layout))
    }

    pub fn remove(&mut self, key: LayoutKey) -> Option<FieldLayout> {
        let removed = self.slots.get_mut(key.index()).and_then(|slot| slot.take());
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayoutKey, &FieldLayout)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|l| (LayoutKey(i as u32), l)))
    }
}
