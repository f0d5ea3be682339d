// ============================================================
// APP SESSION
// ============================================================
// The context object the UI shell drives. Owns the store, the
// loaded documents, the header cache, and the live field values.

use crate::application::use_cases::header_mapper::{CustomFieldRow, HeaderMapper};
use crate::application::use_cases::preset_manager::PresetManager;
use crate::domain::csv::HeaderCache;
use crate::domain::currency::format_currency;
use crate::domain::error::{AppError, Result};
use crate::domain::fields::{
    base_mapping_fields, CustomField, HeaderMapping, ADJUSTMENT_FIELDS, SUBJECT_FIELDS,
};
use crate::domain::help::HelpContent;
use crate::domain::preset::PresetName;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::csv::HeaderReader;
use crate::infrastructure::storage::resolve_data_dir;
use crate::infrastructure::store::{JsonStore, HELP_CONTENT_DOC};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use uuid::Uuid;

/// Case identification entered at the top of the form.
#[derive(Debug, Clone, Default)]
pub struct SubjectInfo {
    pub case_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// One user's working state, from launch to close. Every operation runs to
/// completion on the calling thread; the shell dispatches one at a time.
pub struct AppSession {
    id: String,
    created_at: DateTime<Utc>,
    store: JsonStore,
    reader: HeaderReader,
    presets: PresetManager,
    mapper: HeaderMapper,
    help: HelpContent,
    header_cache: HeaderCache,
    market_csv: Option<PathBuf>,
    lot_csv: Option<PathBuf>,
    subject: SubjectInfo,
    subject_values: BTreeMap<String, String>,
    adjustment_values: BTreeMap<String, String>,
}

impl AppSession {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let data_dir = resolve_data_dir(config)?;
        Ok(Self::with_data_dir(data_dir))
    }

    /// Open a session over an existing data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let store = JsonStore::new(data_dir);
        let presets = PresetManager::load(&store);
        let mapper = HeaderMapper::load(&store);
        let help = store.load_or(HELP_CONTENT_DOC, HelpContent::default());
        let id = Uuid::new_v4().to_string();
        info!(session_id = %id, data_dir = %store.root().display(), "Session opened");

        Self {
            id,
            created_at: Utc::now(),
            store,
            reader: HeaderReader::new(),
            presets,
            mapper,
            help,
            header_cache: HeaderCache::default(),
            market_csv: None,
            lot_csv: None,
            subject: SubjectInfo::default(),
            subject_values: BTreeMap::new(),
            adjustment_values: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn header_cache(&self) -> &HeaderCache {
        &self.header_cache
    }

    pub fn market_csv(&self) -> Option<&Path> {
        self.market_csv.as_deref()
    }

    pub fn lot_csv(&self) -> Option<&Path> {
        self.lot_csv.as_deref()
    }

    pub fn subject(&self) -> &SubjectInfo {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut SubjectInfo {
        &mut self.subject
    }

    pub fn subject_values(&self) -> &BTreeMap<String, String> {
        &self.subject_values
    }

    pub fn adjustment_values(&self) -> &BTreeMap<String, String> {
        &self.adjustment_values
    }

    pub fn active_preset(&self) -> Option<PresetName> {
        self.presets.active()
    }

    // ---- file selection -------------------------------------------------

    pub fn pick_market_csv(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.market_csv = Some(path.clone());
        self.cache_headers(&path)
    }

    pub fn pick_lot_csv(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.lot_csv = Some(path.clone());
        self.cache_headers(&path)
    }

    /// Rebuild the header cache from a file. On failure the previous cache
    /// stays in place so existing mappings remain editable.
    fn cache_headers(&mut self, path: &Path) -> Result<()> {
        match self.reader.read_headers(path) {
            Ok(cache) => {
                info!(path = %path.display(), headers = cache.headers().len(), "Cached CSV headers");
                self.header_cache = cache;
                Ok(())
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "Failed to cache CSV headers");
                Err(err)
            }
        }
    }

    // ---- presets --------------------------------------------------------

    /// Load a preset into the adjustment fields. Replacing, never additive:
    /// fields absent from the stored set end up cleared.
    pub fn apply_preset(&mut self, name: PresetName) {
        let set = self.presets.apply(name).clone();
        self.adjustment_values.clear();
        self.adjustment_values.extend(set);
    }

    pub fn save_preset(&mut self) -> Result<()> {
        self.presets.save(&self.store, &self.adjustment_values)
    }

    pub fn clear_adjustments(&mut self) {
        self.adjustment_values.clear();
        self.presets.clear();
    }

    /// Reset the whole form: subject info, both value columns, file picks,
    /// and the active preset. The header cache is kept; reselecting a file
    /// refreshes it anyway.
    pub fn clear_all(&mut self) {
        self.subject = SubjectInfo::default();
        self.subject_values.clear();
        self.adjustment_values.clear();
        self.market_csv = None;
        self.lot_csv = None;
        self.presets.clear();
    }

    // ---- field values ---------------------------------------------------

    /// Store one adjustment entry, normalized to $x,xxx.00 the way the form
    /// reformats an entry when focus leaves it. Blank input clears the field.
    pub fn commit_adjustment_entry(&mut self, field: &str, raw: &str) {
        let formatted = format_currency(raw);
        if formatted.is_empty() {
            self.adjustment_values.remove(field);
        } else {
            self.adjustment_values.insert(field.to_string(), formatted);
        }
    }

    pub fn set_subject_value(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.subject_values.remove(field);
        } else {
            self.subject_values.insert(field.to_string(), value.to_string());
        }
    }

    /// Subject column rows: the built-in catalog plus named custom fields.
    pub fn subject_fields(&self) -> Vec<String> {
        SUBJECT_FIELDS
            .iter()
            .map(|f| f.to_string())
            .chain(
                self.mapper
                    .custom_fields()
                    .iter()
                    .map(|c| c.name.clone()),
            )
            .collect()
    }

    /// Adjustment column rows: the built-in catalog plus each custom
    /// field's derived adjustment label.
    pub fn adjustment_fields(&self) -> Vec<String> {
        ADJUSTMENT_FIELDS
            .iter()
            .map(|f| f.to_string())
            .chain(
                self.mapper
                    .custom_fields()
                    .iter()
                    .map(CustomField::adjustment_label),
            )
            .collect()
    }

    // ---- header mapping -------------------------------------------------

    pub fn filter_headers(&self, typed: &str) -> Vec<String> {
        self.header_cache.filter(typed)
    }

    pub fn preview_samples(&self, header: &str) -> String {
        self.header_cache.preview(header)
    }

    pub fn header_mapping(&self) -> &HeaderMapping {
        self.mapper.mapping()
    }

    /// Current binding for one logical field, empty when unmapped.
    pub fn header_binding(&self, field: &str) -> &str {
        self.mapper.binding(field)
    }

    /// Built-in fields shown as binding rows in the mapping editor.
    pub fn mapping_fields(&self) -> Vec<String> {
        base_mapping_fields()
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        self.mapper.custom_fields()
    }

    /// Open the mapping editor. Refused until a CSV has been read, since
    /// there would be no columns to offer.
    pub fn open_header_editor(&mut self) -> Result<Vec<CustomFieldRow>> {
        if self.header_cache.is_empty() {
            return Err(AppError::ValidationError(
                "Select at least one CSV so its headers can be read.".to_string(),
            ));
        }
        Ok(self.mapper.open_editor().to_vec())
    }

    pub fn add_custom_field(&mut self) {
        self.mapper.add_custom_field();
    }

    pub fn remove_custom_field(&mut self) {
        self.mapper.remove_custom_field();
    }

    pub fn commit_header_mappings(
        &mut self,
        bindings: &BTreeMap<String, String>,
        rows: &[CustomFieldRow],
    ) -> Result<()> {
        self.mapper.commit(&self.store, bindings, rows)
    }

    // ---- help -----------------------------------------------------------

    pub fn help(&self) -> &HelpContent {
        &self.help
    }

    /// Update one help section and persist the document. The edited text
    /// stays live even if the write fails.
    pub fn save_help(&mut self, section: &str, text: &str) -> Result<()> {
        self.help.set_section(section, text)?;
        self.store.save(HELP_CONTENT_DOC, &self.help)
    }

    // ---- recap ----------------------------------------------------------

    /// Text recap of the current form state, shown before an analysis run.
    pub fn analysis_summary(&self) -> String {
        let file_or_none =
            |path: &Option<PathBuf>| match path {
                Some(p) => p.display().to_string(),
                None => "(none)".to_string(),
            };
        let mut lines = Vec::new();
        lines.push(format!("Case #: {}", self.subject.case_number));
        lines.push(format!(
            "Address: {}, {} {} {}",
            self.subject.address, self.subject.city, self.subject.state, self.subject.zip
        ));
        lines.push(format!("Market file: {}", file_or_none(&self.market_csv)));
        lines.push(format!("Lot file: {}", file_or_none(&self.lot_csv)));
        lines.push(format!("Adjustments: {:?}", self.adjustment_values));
        lines.join("\n")
    }
}
