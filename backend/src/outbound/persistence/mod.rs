//! SQLite persistence adapter using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's
//! `UserRepository` port, backed by SQLite through Diesel's synchronous
//! connection API.
//!
//! # Architecture
//!
//! - **Thin adapter**: [`Database`] only translates between Diesel rows and
//!   domain types. Existence checks belong to the user service.
//! - **Internal models**: Diesel row structs (`models.rs`) and table
//!   definitions (`schema.rs`) never leave this module.
//! - **Owned connection**: each [`Database`] opens and owns one connection;
//!   separate instances share nothing unless they point at the same file.
//! - **Strongly typed errors**: Diesel errors are mapped to
//!   `UserPersistenceError` in one place.
//!
//! # Example
//!
//! ```no_run
//! use user_service::outbound::persistence::{Database, StorageLocation};
//!
//! let db = Database::open(StorageLocation::parse("users.db"))?;
//! # Ok::<(), user_service::outbound::persistence::DatabaseOpenError>(())
//! ```

mod connection;
mod database;
mod diesel_error_mapping;
mod models;
mod schema;

pub use connection::{DatabaseOpenError, IN_MEMORY, StorageLocation, open_connection};
pub use database::Database;
pub use schema::CREATE_USERS_TABLE;
