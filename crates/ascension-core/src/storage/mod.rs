mod config;
pub mod save;

pub use config::{Config, LoggingConfig, PlayerConfig, StorageConfig};
pub use save::{JsonSaveFile, MemoryStore, SaveStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/ascension[-dev]/` based on ASCENSION_ENV.
///
/// Set ASCENSION_ENV=dev to use development data directory, or
/// ASCENSION_HOME to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("ASCENSION_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ASCENSION_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("ascension-dev")
            } else {
                base_dir.join("ascension")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
