//! User records stored in SQLite and served through a status-coded CRUD
//! service.
//!
//! - [`domain`]: the user record, the storage port, and [`UserService`].
//! - [`outbound::persistence`]: the Diesel/SQLite [`Database`] adapter.
//! - [`config`]: storage location settings.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use user_service::{Database, UserService};
//!
//! let service = UserService::new(Arc::new(Database::in_memory()?));
//! let (payload, status) = service.create_user("John Doe", 30)?.into_parts();
//! assert_eq!(status.as_u16(), 201);
//! assert_eq!(payload["name"], "John Doe");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::StorageSettings;
pub use domain::{User, UserId, UserResponse, UserService};
pub use outbound::persistence::Database;
