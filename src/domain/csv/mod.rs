// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Cached header/sample values and the queries the mapper UI runs
// against them. No I/O here.

mod header_cache;

pub use header_cache::{HeaderCache, SAMPLE_ROWS};
