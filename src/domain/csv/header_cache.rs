// ============================================================
// HEADER CACHE
// ============================================================
// Column names and sample values from the most recently read CSV

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data rows sampled per column when a CSV is read.
pub const SAMPLE_ROWS: usize = 3;

/// Headers and per-column samples for one CSV file. Rebuilt on every file
/// selection, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderCache {
    /// Column names in file order.
    headers: Vec<String>,

    /// Header name to its first sample values, in row order. A missing cell
    /// is recorded as an empty string so samples stay index-aligned.
    samples: BTreeMap<String, Vec<String>>,
}

impl HeaderCache {
    pub fn new(headers: Vec<String>, samples: BTreeMap<String, Vec<String>>) -> Self {
        Self { headers, samples }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Type-ahead filter: case-insensitive substring match on the typed
    /// text. Empty input returns every header; so does input that matches
    /// nothing, so the dropdown never goes blank while headers exist.
    pub fn filter(&self, typed: &str) -> Vec<String> {
        let needle = typed.trim().to_lowercase();
        if needle.is_empty() {
            return self.headers.clone();
        }
        let matched: Vec<String> = self
            .headers
            .iter()
            .filter(|h| h.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if matched.is_empty() {
            self.headers.clone()
        } else {
            matched
        }
    }

    /// Sample values for one column, joined for display. Empty for a blank
    /// or unknown header.
    pub fn preview(&self, header: &str) -> String {
        let header = header.trim();
        if header.is_empty() {
            return String::new();
        }
        match self.samples.get(header) {
            Some(values) => values
                .iter()
                .take(SAMPLE_ROWS)
                .cloned()
                .collect::<Vec<_>>()
                .join(" | "),
            None => String::new(),
        }
    }
}
