//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! [`Database`] owns a single connection to one store. Opening it creates the
//! `users` table when absent; dropping it closes the connection.

use std::sync::{Mutex, MutexGuard};

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use tracing::{debug, warn};

use crate::config::StorageSettings;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::connection::{DatabaseOpenError, StorageLocation, open_connection};
use super::diesel_error_mapping::{map_diesel_error, map_lock_error};
use super::models::{NewUserRow, TableNameRow, UserRow, UserUpdate};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
///
/// Every call runs a single statement on the owned connection. The mutex
/// only makes the handle shareable; no ordering between callers is implied.
///
/// # Example
///
/// ```
/// use user_service::domain::ports::UserRepository;
/// use user_service::outbound::persistence::Database;
///
/// let db = Database::in_memory().expect("open store");
/// let id = db.insert_user("Alice", 25).expect("insert");
/// let user = db.get_user(id).expect("lookup").expect("row exists");
/// assert_eq!(user.name(), "Alice");
/// ```
pub struct Database {
    conn: Mutex<SqliteConnection>,
    location: StorageLocation,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Open the store at `location`, creating the `users` table if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`DatabaseOpenError`] if the store cannot be opened or the
    /// schema cannot be created.
    pub fn open(location: StorageLocation) -> Result<Self, DatabaseOpenError> {
        let conn = open_connection(&location)?;
        Ok(Self {
            conn: Mutex::new(conn),
            location,
        })
    }

    /// Open a private in-memory store.
    ///
    /// # Errors
    ///
    /// Returns a [`DatabaseOpenError`] if SQLite cannot allocate the store.
    pub fn in_memory() -> Result<Self, DatabaseOpenError> {
        Self::open(StorageLocation::InMemory)
    }

    /// Open the store named by loaded settings.
    ///
    /// # Errors
    ///
    /// Returns a [`DatabaseOpenError`] if the configured store cannot be
    /// opened.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, DatabaseOpenError> {
        Self::open(settings.location())
    }

    /// Where this store keeps its rows.
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Report whether the `users` table exists in the store.
    ///
    /// # Errors
    ///
    /// Returns a [`UserPersistenceError`] if the catalogue query fails.
    pub fn has_users_table(&self) -> Result<bool, UserPersistenceError> {
        let mut conn = self.connection()?;
        let row: Option<TableNameRow> =
            diesel::sql_query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind::<Text, _>("users")
                .get_result(&mut *conn)
                .optional()
                .map_err(map_diesel_error)?;

        Ok(row.is_some_and(|table| table.name == "users"))
    }

    fn connection(&self) -> Result<MutexGuard<'_, SqliteConnection>, UserPersistenceError> {
        self.conn.lock().map_err(map_lock_error)
    }
}

/// Convert a database row to a domain user.
///
/// Rows written through this adapter always carry a name and an age; `NULL`
/// can only come from another writer.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    match (row.name, row.age) {
        (Some(name), Some(age)) => Ok(User::new(UserId::new(row.user_id), name, age)),
        (name, age) => {
            warn!(
                user_id = row.user_id,
                name_missing = name.is_none(),
                age_missing = age.is_none(),
                "user row holds NULL fields"
            );
            Err(UserPersistenceError::query(format!(
                "user {} has missing fields",
                row.user_id
            )))
        }
    }
}

impl UserRepository for Database {
    fn insert_user(&self, name: &str, age: i64) -> Result<UserId, UserPersistenceError> {
        let mut conn = self.connection()?;
        let new_row = NewUserRow { name, age };

        let user_id: i64 = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(users::user_id)
            .get_result(&mut *conn)
            .map_err(map_diesel_error)?;

        debug!(user_id, "user row inserted");
        Ok(UserId::new(user_id))
    }

    fn get_user(&self, user_id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.connection()?;

        let row: Option<UserRow> = users::table
            .find(user_id.get())
            .select(UserRow::as_select())
            .first(&mut *conn)
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    fn update_user(
        &self,
        user_id: UserId,
        name: &str,
        age: i64,
    ) -> Result<usize, UserPersistenceError> {
        let mut conn = self.connection()?;
        let update = UserUpdate { name, age };

        let affected = diesel::update(users::table.find(user_id.get()))
            .set(&update)
            .execute(&mut *conn)
            .map_err(map_diesel_error)?;

        debug!(%user_id, affected, "user row update executed");
        Ok(affected)
    }

    fn delete_user(&self, user_id: UserId) -> Result<usize, UserPersistenceError> {
        let mut conn = self.connection()?;

        let affected = diesel::delete(users::table.find(user_id.get()))
            .execute(&mut *conn)
            .map_err(map_diesel_error)?;

        debug!(%user_id, affected, "user row delete executed");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    //! Adapter-level checks that need access to the raw connection.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn db() -> Database {
        Database::in_memory().expect("open in-memory store")
    }

    #[rstest]
    fn null_fields_surface_as_query_errors(db: Database) {
        {
            let mut conn = db.connection().expect("connection");
            diesel::sql_query("INSERT INTO users (user_id, name, age) VALUES (41, NULL, 20)")
                .execute(&mut *conn)
                .expect("raw insert");
        }

        let err = db
            .get_user(UserId::new(41))
            .expect_err("NULL name cannot become a user");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn debug_output_names_location(db: Database) {
        let rendered = format!("{db:?}");
        assert!(rendered.contains("InMemory"));
    }

    #[rstest]
    fn ids_stay_unique_after_delete(db: Database) {
        let first = db.insert_user("Alice", 25).expect("insert");
        let second = db.insert_user("Bob", 30).expect("insert");
        assert!(second > first);
        assert_eq!(db.delete_user(first).expect("delete"), 1);
        let third = db.insert_user("Carol", 35).expect("insert");
        assert_ne!(third, first);
    }
}
