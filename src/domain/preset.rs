// ============================================================
// ADJUSTMENT PRESETS
// ============================================================
// The five named preset slots and their stored value sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five fixed preset slots. The set is closed: users pick a slot,
/// they never create new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PresetName {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
}

impl PresetName {
    /// All slots in display order (button row order).
    pub const ALL: [PresetName; 5] = [
        PresetName::Q1,
        PresetName::Q2,
        PresetName::Q3,
        PresetName::Q4,
        PresetName::Q5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Q1 => "Q1",
            PresetName::Q2 => "Q2",
            PresetName::Q3 => "Q3",
            PresetName::Q4 => "Q4",
            PresetName::Q5 => "Q5",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "Q1" => Ok(PresetName::Q1),
            "Q2" => Ok(PresetName::Q2),
            "Q3" => Ok(PresetName::Q3),
            "Q4" => Ok(PresetName::Q4),
            "Q5" => Ok(PresetName::Q5),
            _ => Err(format!("Unknown preset name: {}", s)),
        }
    }
}

/// Stored adjustment values for one preset: adjustment-field name to the
/// value as the user entered it. No numeric interpretation happens here.
pub type PresetSet = BTreeMap<String, String>;

/// The persisted presets document: one value set per slot.
/// Serializes as `{"Q1": {...}, ..., "Q5": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetBook {
    sets: BTreeMap<PresetName, PresetSet>,
}

impl Default for PresetBook {
    fn default() -> Self {
        let mut sets = BTreeMap::new();
        for name in PresetName::ALL {
            sets.insert(name, PresetSet::new());
        }
        Self { sets }
    }
}

impl PresetBook {
    /// Guarantee every slot has an entry. A hand-edited or older document may
    /// be missing keys; reads must still find an (empty) set.
    pub fn normalize(mut self) -> Self {
        for name in PresetName::ALL {
            self.sets.entry(name).or_default();
        }
        self
    }

    /// Stored set for a slot. Empty set if the slot was never saved.
    pub fn get(&self, name: PresetName) -> &PresetSet {
        static EMPTY: once_cell::sync::Lazy<PresetSet> = once_cell::sync::Lazy::new(PresetSet::new);
        self.sets.get(&name).unwrap_or(&EMPTY)
    }

    /// Replace a slot's stored set.
    pub fn set(&mut self, name: PresetName, set: PresetSet) {
        self.sets.insert(name, set);
    }
}
