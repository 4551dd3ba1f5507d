//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use diesel::sql_types::Text;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub age: i64,
}

/// Changeset struct for overwriting existing user records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub age: i64,
}

/// Single-column result of a `sqlite_master` lookup.
#[derive(Debug, QueryableByName)]
pub(crate) struct TableNameRow {
    #[diesel(sql_type = Text)]
    pub name: String,
}
