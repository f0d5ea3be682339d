// ============================================================
// HEADER MAPPER USE CASE
// ============================================================
// Bind logical fields to CSV columns and manage custom fields,
// committing both documents together

use crate::domain::error::Result;
use crate::domain::fields::{CustomField, HeaderMapping};
use crate::infrastructure::store::{JsonStore, CUSTOM_FIELDS_DOC, HEADERS_MAP_DOC};
use std::collections::BTreeMap;
use tracing::info;

/// One editable custom-field row while the mapper is open. Plain strings,
/// never widget handles; nothing transient is ever persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFieldRow {
    pub name: String,
    pub header: String,
}

/// The live field-to-header bindings and custom field list, plus the rows
/// being edited while the mapper dialog is open.
pub struct HeaderMapper {
    mapping: HeaderMapping,
    custom_fields: Vec<CustomField>,
    draft_rows: Vec<CustomFieldRow>,
}

impl HeaderMapper {
    pub fn load(store: &JsonStore) -> Self {
        Self {
            mapping: store.load_or(HEADERS_MAP_DOC, HeaderMapping::new()),
            custom_fields: store.load_or(CUSTOM_FIELDS_DOC, Vec::new()),
            draft_rows: Vec::new(),
        }
    }

    pub fn mapping(&self) -> &HeaderMapping {
        &self.mapping
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }

    /// Current binding for a logical field, empty when unmapped.
    pub fn binding(&self, field: &str) -> &str {
        self.mapping.get(field).map(String::as_str).unwrap_or("")
    }

    /// Seed the editable rows from the persisted custom fields.
    pub fn open_editor(&mut self) -> &[CustomFieldRow] {
        self.draft_rows = self
            .custom_fields
            .iter()
            .map(|field| CustomFieldRow {
                name: field.name.clone(),
                header: field.header.clone(),
            })
            .collect();
        &self.draft_rows
    }

    pub fn draft_rows(&self) -> &[CustomFieldRow] {
        &self.draft_rows
    }

    pub fn draft_rows_mut(&mut self) -> &mut [CustomFieldRow] {
        &mut self.draft_rows
    }

    /// Append one blank row to the editable list.
    pub fn add_custom_field(&mut self) {
        self.draft_rows.push(CustomFieldRow::default());
    }

    /// Drop the most recently added row. No-op when the list is empty.
    pub fn remove_custom_field(&mut self) {
        self.draft_rows.pop();
    }

    /// Persist the edited bindings and custom rows, then make them live.
    /// Headers are trimmed and stored verbatim, empty meaning unmapped.
    /// A custom row survives only if its trimmed name is non-empty. The live
    /// state changes only after both documents are written, so a failed save
    /// leaves the previous mapping and custom fields in place.
    pub fn commit(
        &mut self,
        store: &JsonStore,
        bindings: &BTreeMap<String, String>,
        rows: &[CustomFieldRow],
    ) -> Result<()> {
        let mapping: HeaderMapping = bindings
            .iter()
            .map(|(field, header)| (field.clone(), header.trim().to_string()))
            .collect();

        let custom_fields: Vec<CustomField> = rows
            .iter()
            .filter(|row| !row.name.trim().is_empty())
            .map(|row| CustomField::new(row.name.trim(), row.header.trim()))
            .collect();

        store.save(HEADERS_MAP_DOC, &mapping)?;
        store.save(CUSTOM_FIELDS_DOC, &custom_fields)?;

        self.mapping = mapping;
        self.custom_fields = custom_fields;
        self.draft_rows.clear();
        info!(
            bindings = self.mapping.len(),
            custom_fields = self.custom_fields.len(),
            "Committed header mappings"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use std::fs;

    fn temp_store() -> JsonStore {
        let root = std::env::temp_dir().join(format!("compkit-mapper-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        JsonStore::new(root)
    }

    fn bindings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn row(name: &str, header: &str) -> CustomFieldRow {
        CustomFieldRow {
            name: name.to_string(),
            header: header.to_string(),
        }
    }

    #[test]
    fn test_commit_trims_and_keeps_empty_bindings() {
        let store = temp_store();
        let mut mapper = HeaderMapper::load(&store);
        mapper
            .commit(
                &store,
                &bindings(&[("GLA (sf)", "  Above Grade SF "), ("Bathrooms", "   ")]),
                &[],
            )
            .unwrap();

        assert_eq!(mapper.binding("GLA (sf)"), "Above Grade SF");
        assert_eq!(mapper.binding("Bathrooms"), "");
        assert!(mapper.mapping().contains_key("Bathrooms"));
    }

    #[test]
    fn test_commit_drops_blank_named_rows_keeps_unbound_ones() {
        let store = temp_store();
        let mut mapper = HeaderMapper::load(&store);
        mapper
            .commit(
                &store,
                &bindings(&[]),
                &[row("", "Sale Price"), row("Pool", "")],
            )
            .unwrap();

        assert_eq!(mapper.custom_fields().len(), 1);
        assert_eq!(mapper.custom_fields()[0].name, "Pool");
        assert_eq!(mapper.custom_fields()[0].header, "");
    }

    #[test]
    fn test_commit_round_trips_through_store() {
        let store = temp_store();
        let mut mapper = HeaderMapper::load(&store);
        mapper
            .commit(
                &store,
                &bindings(&[("GLA (sf)", "Above Grade SF")]),
                &[row("Pool", "Pool YN"), row("Deck", "Deck SF")],
            )
            .unwrap();

        let reloaded = HeaderMapper::load(&store);
        assert_eq!(reloaded.binding("GLA (sf)"), "Above Grade SF");
        assert_eq!(reloaded.custom_fields().len(), 2);
        assert_eq!(reloaded.custom_fields()[0].name, "Pool");
        assert_eq!(reloaded.custom_fields()[1].name, "Deck");
    }

    #[test]
    fn test_add_and_remove_custom_field_rows() {
        let store = temp_store();
        let mut mapper = HeaderMapper::load(&store);
        mapper.open_editor();
        mapper.add_custom_field();
        mapper.add_custom_field();
        assert_eq!(mapper.draft_rows().len(), 2);

        mapper.remove_custom_field();
        assert_eq!(mapper.draft_rows().len(), 1);
        mapper.remove_custom_field();
        mapper.remove_custom_field(); // already empty, stays a no-op
        assert!(mapper.draft_rows().is_empty());
    }

    #[test]
    fn test_open_editor_seeds_rows_from_persisted_fields() {
        let store = temp_store();
        let mut mapper = HeaderMapper::load(&store);
        mapper
            .commit(&store, &bindings(&[]), &[row("Pool", "Pool YN")])
            .unwrap();

        let rows = mapper.open_editor().to_vec();
        assert_eq!(rows, vec![row("Pool", "Pool YN")]);
    }

    #[test]
    fn test_failed_commit_retains_prior_state() {
        let store = temp_store();
        let mut mapper = HeaderMapper::load(&store);
        mapper
            .commit(&store, &bindings(&[("GLA (sf)", "Old Header")]), &[])
            .unwrap();

        let broken = JsonStore::new(
            std::env::temp_dir().join(format!("compkit-mapper-{}/nope", uuid::Uuid::new_v4())),
        );
        let result = mapper.commit(
            &broken,
            &bindings(&[("GLA (sf)", "New Header")]),
            &[row("Pool", "")],
        );
        assert!(matches!(result, Err(AppError::IoError(_))));
        assert_eq!(mapper.binding("GLA (sf)"), "Old Header");
        assert!(mapper.custom_fields().is_empty());
    }
}
