use crate::infrastructure::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the persisted JSON documents, created on first use.
pub fn resolve_data_dir(config: &AppConfig) -> std::io::Result<PathBuf> {
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    ensure_dir(&data_dir)?;
    Ok(data_dir)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
