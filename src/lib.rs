pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::session::AppSession;
pub use application::use_cases::header_mapper::HeaderMapper;
pub use application::use_cases::preset_manager::PresetManager;
pub use domain::error::{AppError, Result};
pub use domain::preset::PresetName;
pub use infrastructure::config::AppConfig;

/// Install the global tracing subscriber for the embedding shell.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
