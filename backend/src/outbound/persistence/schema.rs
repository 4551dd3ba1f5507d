//! Diesel table definitions for the SQLite schema.
//!
//! The `table!` block must match [`CREATE_USERS_TABLE`] exactly. SQLite
//! stores every `INTEGER` as a 64-bit value, so integer columns map to
//! `BigInt`. `name` and `age` carry no `NOT NULL` constraint and are
//! therefore nullable here.

/// DDL run on every open. Safe to repeat against an existing store.
pub const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (user_id INTEGER PRIMARY KEY, name TEXT, age INTEGER)";

diesel::table! {
    /// User rows.
    ///
    /// `user_id` aliases SQLite's rowid, so inserts that omit it receive a
    /// fresh key.
    users (user_id) {
        /// Primary key assigned by SQLite.
        user_id -> BigInt,
        /// Name as supplied by the caller.
        name -> Nullable<Text>,
        /// Age as supplied by the caller.
        age -> Nullable<BigInt>,
    }
}
