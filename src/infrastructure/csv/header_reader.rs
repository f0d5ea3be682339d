// ============================================================
// HEADER READER
// ============================================================
// Read the header row and a handful of sample rows from a CSV,
// without scanning the rest of the file

use crate::domain::csv::{HeaderCache, SAMPLE_ROWS};
use crate::domain::error::{AppError, Result};
use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Bounded CSV header reader. Only the header row and `sample_rows` data
/// records are ever pulled from the file, so selection stays cheap on large
/// exports.
pub struct HeaderReader {
    sample_rows: usize,
}

impl Default for HeaderReader {
    fn default() -> Self {
        Self {
            sample_rows: SAMPLE_ROWS,
        }
    }
}

impl HeaderReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.sample_rows = sample_rows;
        self
    }

    /// Read column names and up to `sample_rows` values per column.
    /// Short records pad with empty strings so every column's samples stay
    /// aligned with row order.
    pub fn read_headers(&self, path: &Path) -> Result<HeaderCache> {
        let file = File::open(path)
            .map_err(|e| AppError::IoError(format!("Failed to open {}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        skip_bom(&mut reader, path)?;

        let mut csv_reader = ReaderBuilder::new()
            .flexible(true) // Allow rows with different lengths
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut samples: BTreeMap<String, Vec<String>> = headers
            .iter()
            .map(|h| (h.clone(), Vec::new()))
            .collect();

        for (index, result) in csv_reader.records().take(self.sample_rows).enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            for (column, header) in headers.iter().enumerate() {
                let value = record.get(column).unwrap_or("").to_string();
                if let Some(column_samples) = samples.get_mut(header) {
                    column_samples.push(value);
                }
            }
        }

        Ok(HeaderCache::new(headers, samples))
    }
}

/// Step over a UTF-8 byte-order-mark if the file starts with one. UTF-16
/// marks mean the file is not the UTF-8 CSV this tool reads.
fn skip_bom(reader: &mut BufReader<File>, path: &Path) -> Result<()> {
    let buffered = reader
        .fill_buf()
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
    if let Some((encoding, bom_length)) = Encoding::for_bom(buffered) {
        if encoding != UTF_8 {
            return Err(AppError::ParseError(format!(
                "{} is {} encoded, expected UTF-8",
                path.display(),
                encoding.name()
            )));
        }
        reader.consume(bom_length);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.csv", name, uuid::Uuid::new_v4()));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_reads_headers_and_three_samples() {
        let path = write_fixture(
            "compkit-plain",
            b"Sale Price,GLA,Beds\n450000,2100,3\n512000,2450,4\n389000,1800,2\n610000,3000,5\n700000,3200,5\n",
        );
        let cache = HeaderReader::new().read_headers(&path).unwrap();

        assert_eq!(cache.headers(), ["Sale Price", "GLA", "Beds"]);
        assert_eq!(cache.preview("Sale Price"), "450000 | 512000 | 389000");
        assert_eq!(cache.preview("Beds"), "3 | 4 | 2");
    }

    #[test]
    fn test_utf8_bom_is_transparent() {
        let path = write_fixture(
            "compkit-bom",
            b"\xEF\xBB\xBFSale Price,GLA\n450000,2100\n512000,2450\n389000,1800\n610000,3000\n700000,3200\n",
        );
        let cache = HeaderReader::new().read_headers(&path).unwrap();

        assert_eq!(cache.headers(), ["Sale Price", "GLA"]);
        assert_eq!(cache.preview("Sale Price"), "450000 | 512000 | 389000");
    }

    #[test]
    fn test_utf16_bom_is_rejected() {
        let path = write_fixture("compkit-utf16", b"\xFF\xFEa\x00,\x00b\x00\n\x00");
        match HeaderReader::new().read_headers(&path) {
            Err(AppError::ParseError(msg)) => assert!(msg.contains("UTF-16")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_fewer_rows_than_sample_bound() {
        let path = write_fixture("compkit-short", b"Sale Price,GLA\n450000,2100\n");
        let cache = HeaderReader::new().read_headers(&path).unwrap();
        assert_eq!(cache.preview("GLA"), "2100");
    }

    #[test]
    fn test_short_record_pads_empty_cells() {
        let path = write_fixture("compkit-ragged", b"Sale Price,GLA,Beds\n450000,2100\n");
        let cache = HeaderReader::new().read_headers(&path).unwrap();
        assert_eq!(cache.preview("Beds"), "");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("compkit-absent-{}.csv", uuid::Uuid::new_v4()));
        match HeaderReader::new().read_headers(&path) {
            Err(AppError::IoError(_)) => {}
            other => panic!("Expected IoError, got {:?}", other),
        }
    }
}
