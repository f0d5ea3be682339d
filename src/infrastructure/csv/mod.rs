// ============================================================
// CSV INFRASTRUCTURE
// ============================================================
// File reading for the header cache

mod header_reader;

pub use header_reader::HeaderReader;
