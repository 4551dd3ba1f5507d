//! SQLite connection setup for the persistence layer.
//!
//! A [`StorageLocation`] names where rows live; [`open_connection`] turns it
//! into a live Diesel connection with the `users` table in place.
//!
//! # Design
//!
//! - One connection per store, owned by whoever opened it
//! - In-memory stores are private to their connection
//! - Schema creation is idempotent and runs on every open

use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::info;

use super::schema::CREATE_USERS_TABLE;

/// SQLite's special filename for a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Errors that can occur while opening a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseOpenError {
    /// The storage path cannot be passed to SQLite.
    #[error("storage path is not valid UTF-8: {path}")]
    InvalidPath { path: String },

    /// SQLite refused to open the store.
    #[error("failed to open database: {message}")]
    Establish { message: String },

    /// The `users` table could not be created.
    #[error("failed to create schema: {message}")]
    Schema { message: String },
}

impl DatabaseOpenError {
    /// Create an establish error with the given message.
    pub fn establish(message: impl Into<String>) -> Self {
        Self::Establish {
            message: message.into(),
        }
    }

    /// Create a schema error with the given message.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}

/// Where a store keeps its rows.
///
/// # Example
///
/// ```
/// use user_service::outbound::persistence::StorageLocation;
///
/// assert_eq!(StorageLocation::parse(":memory:"), StorageLocation::InMemory);
/// assert_eq!(
///     StorageLocation::parse("/var/lib/users.db"),
///     StorageLocation::File("/var/lib/users.db".into()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageLocation {
    /// Private in-memory database, discarded with its connection.
    #[default]
    InMemory,
    /// File-backed database, shared by every connection opened on the path.
    File(PathBuf),
}

impl StorageLocation {
    /// Interpret a path, treating `:memory:` as the in-memory store.
    pub fn parse(raw: impl AsRef<Path>) -> Self {
        let path = raw.as_ref();
        if path.as_os_str() == IN_MEMORY {
            Self::InMemory
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Whether rows vanish when the connection closes.
    pub fn is_in_memory(&self) -> bool {
        matches!(self, Self::InMemory)
    }

    /// Connection string handed to SQLite.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseOpenError::InvalidPath`] for non-UTF-8 paths.
    pub fn database_url(&self) -> Result<&str, DatabaseOpenError> {
        match self {
            Self::InMemory => Ok(IN_MEMORY),
            Self::File(path) => path.to_str().ok_or_else(|| DatabaseOpenError::InvalidPath {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Open a connection and make sure the `users` table exists.
///
/// # Errors
///
/// Returns [`DatabaseOpenError::Establish`] if SQLite cannot open the store
/// and [`DatabaseOpenError::Schema`] if the table cannot be created.
pub fn open_connection(location: &StorageLocation) -> Result<SqliteConnection, DatabaseOpenError> {
    let url = location.database_url()?;
    let mut conn = SqliteConnection::establish(url)
        .map_err(|err| DatabaseOpenError::establish(err.to_string()))?;

    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(&mut conn)
        .map_err(|err| DatabaseOpenError::schema(err.to_string()))?;

    info!(database = url, "user store opened");
    Ok(conn)
}
