// ============================================================
// JSON DOCUMENT STORE
// ============================================================
// Named JSON documents on disk: tolerant loads, best-effort saves

use crate::domain::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Document name for the five preset value sets.
pub const PRESETS_DOC: &str = "presets";

/// Document name for the logical-field-to-CSV-header bindings.
pub const HEADERS_MAP_DOC: &str = "headers_map";

/// Document name for the ordered custom field list.
pub const CUSTOM_FIELDS_DOC: &str = "custom_fields";

/// Document name for the editable help sections.
pub const HELP_CONTENT_DOC: &str = "help_content";

/// Loads and saves JSON documents by logical name under one root directory.
/// A document named `presets` lives at `<root>/presets.json`.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    /// Read a document, falling back to `default` when the file is absent,
    /// unreadable, or does not parse as `T`. Never an error: a damaged file
    /// costs the user its contents, not the session.
    pub fn load_or<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        let path = self.path_for(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(document = name, error = %err, "Unreadable document, using default");
                }
                return default;
            }
        };
        match serde_json::from_str(&text) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(document = name, error = %err, "Corrupt document, using default");
                default
            }
        }
    }

    /// Write a document so a later `load_or` returns an equal value.
    /// Failures surface to the caller and are never fatal.
    pub fn save<T: Serialize>(&self, name: &str, doc: &T) -> Result<()> {
        let path = self.path_for(name);
        let text = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Internal(format!("Failed to encode {}: {}", name, e)))?;
        fs::write(&path, text)
            .map_err(|e| AppError::IoError(format!("Failed to write {}: {}", path.display(), e)))
    }
}
