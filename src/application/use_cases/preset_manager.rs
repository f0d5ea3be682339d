// ============================================================
// PRESET MANAGER USE CASE
// ============================================================
// Track the active preset slot and move value sets between the
// adjustment fields and the persisted book

use crate::domain::error::{AppError, Result};
use crate::domain::preset::{PresetBook, PresetName, PresetSet};
use crate::infrastructure::store::{JsonStore, PRESETS_DOC};
use std::collections::BTreeMap;
use tracing::info;

/// Holds the five stored value sets and which slot, if any, is active.
/// At most one slot is active; activation only happens through `apply`.
pub struct PresetManager {
    book: PresetBook,
    active: Option<PresetName>,
}

impl PresetManager {
    /// Load the book from the store. An absent or damaged presets document
    /// yields five empty slots.
    pub fn load(store: &JsonStore) -> Self {
        let book = store
            .load_or(PRESETS_DOC, PresetBook::default())
            .normalize();
        Self { book, active: None }
    }

    pub fn active(&self) -> Option<PresetName> {
        self.active
    }

    /// Stored set for a slot without activating it.
    pub fn stored(&self, name: PresetName) -> &PresetSet {
        self.book.get(name)
    }

    /// Activate a slot and hand back its stored set for the caller to load
    /// into the adjustment fields. A never-saved slot yields an empty set;
    /// the caller clears every field first, so applying always replaces.
    pub fn apply(&mut self, name: PresetName) -> &PresetSet {
        self.active = Some(name);
        info!(preset = %name, "Applied preset");
        self.book.get(name)
    }

    /// Capture the current adjustment values into the active slot and
    /// persist the book. Values are trimmed; blank fields are not stored.
    /// The in-memory book keeps the new set even if the write fails.
    pub fn save(
        &mut self,
        store: &JsonStore,
        adjustments: &BTreeMap<String, String>,
    ) -> Result<()> {
        let name = self.active.ok_or_else(|| {
            AppError::NoActivePreset("Select a Q button before saving.".to_string())
        })?;

        let set: PresetSet = adjustments
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(field, value)| (field.clone(), value.trim().to_string()))
            .collect();

        self.book.set(name, set);
        store.save(PRESETS_DOC, &self.book)?;
        info!(preset = %name, "Saved preset");
        Ok(())
    }

    /// Deactivate. Callers own clearing the displayed values.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
