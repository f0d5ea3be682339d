// ============================================================
// LOGICAL FIELDS
// ============================================================
// Built-in subject/adjustment field catalogs, user-defined custom
// fields, and the field-to-CSV-header mapping

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in subject data fields, in display order.
pub const SUBJECT_FIELDS: [&str; 9] = [
    "GLA (sf)",
    "Basement (sf)",
    "Garage Bays",
    "Lot/Acres",
    "Basement (Beds)",
    "Bathrooms",
    "Basement (Family)",
    "Basement (Other)",
    "Total Fireplaces",
];

/// Built-in adjustment amount fields, in display order.
pub const ADJUSTMENT_FIELDS: [&str; 8] = [
    "GLA $/sf",
    "Basement $/sf",
    "Garage $/bay",
    "Bedrooms $ each",
    "Bathrooms $ each",
    "Family Rooms $ each",
    "Other Rooms $ each",
    "Fireplaces $ each",
];

/// Binding from a logical field name to a CSV column header.
/// An empty header string means "unmapped".
pub type HeaderMapping = BTreeMap<String, String>;

/// A user-defined field beyond the built-in catalog. Persisted as an ordered
/// list; list order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,

    /// Bound CSV column header, empty when unmapped.
    pub header: String,

    /// Label for the matching adjustment entry. Absent means derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_label: Option<String>,
}

impl CustomField {
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            adj_label: None,
        }
    }

    /// Label of the adjustment entry paired with this field.
    pub fn adjustment_label(&self) -> String {
        match &self.adj_label {
            Some(label) => label.clone(),
            None => format!("{} $ each", self.name),
        }
    }
}

/// Built-in fields offered as binding rows in the mapping editor, in row
/// order. Custom fields are edited on their own rows, not here.
pub fn base_mapping_fields() -> Vec<String> {
    SUBJECT_FIELDS
        .iter()
        .chain(ADJUSTMENT_FIELDS.iter())
        .map(|f| f.to_string())
        .collect()
}
