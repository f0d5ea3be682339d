use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-level settings. Everything has a default; a `compkit.toml` next
/// to the working directory and `COMPKIT_*` environment variables override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the JSON documents live. Defaults to the working directory.
    pub data_dir: Option<PathBuf>,

    /// Tracing env-filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("compkit.toml"))
            .merge(Env::prefixed("COMPKIT_"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        figment::Jail::expect_with(|_jail| {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.data_dir, None);
            assert_eq!(config.log_filter, "info");
            Ok(())
        });
    }

    #[test]
    fn test_toml_then_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("compkit.toml", r#"data_dir = "workups""#)?;
            jail.set_env("COMPKIT_LOG_FILTER", "debug");
            let config = AppConfig::load().unwrap();
            assert_eq!(config.data_dir, Some(PathBuf::from("workups")));
            assert_eq!(config.log_filter, "debug");
            Ok(())
        });
    }
}
