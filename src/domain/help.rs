// ============================================================
// HELP CONTENT
// ============================================================
// User-editable help sections with built-in fallback text

use crate::domain::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed help section keys, in display order.
pub const HELP_SECTIONS: [&str; 3] = ["general", "subject", "files"];

/// Editable help text keyed by section. Persisted as a flat object; unknown
/// keys in an edited file are preserved on round trip but never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HelpContent {
    sections: BTreeMap<String, String>,
}

impl Default for HelpContent {
    fn default() -> Self {
        let mut sections = BTreeMap::new();
        sections.insert(
            "general".to_string(),
            "This tool collects subject data and dollar adjustments, keeps five \
             reusable adjustment sets (Q1-Q5), and binds your CSV export columns \
             to the fields used downstream.\n\n\
             Workflow:\n\
             1) Enter the case number and subject address.\n\
             2) Fill in adjustments, or load a saved set with a Q button. \
             Save Preset stores your edits back to the active set.\n\
             3) Choose the market export CSV and/or the lot sales CSV.\n\
             4) Open the header mapper to bind each field to a CSV column. \
             Type to narrow the column list; sample values preview beside each pick.\n\n\
             Everything is stored next to the app in presets.json, headers_map.json, \
             custom_fields.json, and help_content.json."
                .to_string(),
        );
        sections.insert(
            "subject".to_string(),
            "The left column holds subject counts and sizes; the right column \
             holds the dollar amount applied per unit of each one. Amounts are \
             reformatted to $x,xxx.00 when an entry is committed."
                .to_string(),
        );
        sections.insert(
            "files".to_string(),
            "Pick your CSV exports first, then open the header mapper. The \
             sample preview shows the first values of a column so you can \
             confirm you bound the right one."
                .to_string(),
        );
        Self { sections }
    }
}

impl HelpContent {
    pub fn section(&self, key: &str) -> Result<&str> {
        self.sections
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown help section: {}", key)))
    }

    pub fn set_section(&mut self, key: &str, text: impl Into<String>) -> Result<()> {
        if !HELP_SECTIONS.contains(&key) {
            return Err(AppError::ValidationError(format!(
                "Unknown help section: {}",
                key
            )));
        }
        self.sections.insert(key.to_string(), text.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let help = HelpContent::default();
        for key in HELP_SECTIONS {
            assert!(!help.section(key).unwrap().is_empty());
        }
    }

    #[test]
    fn test_set_section_rejects_unknown_key() {
        let mut help = HelpContent::default();
        assert!(help.set_section("colors", "anything").is_err());
    }

    #[test]
    fn test_round_trips_edited_text() {
        let mut help = HelpContent::default();
        help.set_section("files", "Pick the market CSV first.").unwrap();
        let json = serde_json::to_string_pretty(&help).unwrap();
        let reloaded: HelpContent = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, help);
        assert_eq!(reloaded.section("files").unwrap(), "Pick the market CSV first.");
    }
}
