//! Storage configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{IN_MEMORY, StorageLocation};

/// Configuration values selecting where user rows are stored.
///
/// The path defaults to `:memory:`, so the store lives in memory and
/// disappears with its connection unless a file is configured.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct StorageSettings {
    /// Path to the SQLite database file.
    #[ortho_config(default = PathBuf::from(IN_MEMORY))]
    pub database_path: PathBuf,
}

impl StorageSettings {
    /// Settings for a private in-memory store.
    pub fn in_memory() -> Self {
        Self::file(IN_MEMORY)
    }

    /// Settings for a file-backed store at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
        }
    }

    /// Resolve the configured storage location.
    pub fn location(&self) -> StorageLocation {
        StorageLocation::parse(&self.database_path)
    }
}
