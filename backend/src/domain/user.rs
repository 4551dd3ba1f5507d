//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned user identifier.
///
/// Identifiers are handed out by the persistence layer on insert and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw primary key value.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the underlying primary key value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// A stored user row.
///
/// ## Invariants
/// - `user_id` was assigned by storage and is unique.
///
/// Serialises as `{"user_id": 1, "name": "Alice", "age": 25}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    user_id: UserId,
    name: String,
    age: i64,
}

impl User {
    /// Build a user from its stored components.
    pub fn new(user_id: UserId, name: impl Into<String>, age: i64) -> Self {
        Self {
            user_id,
            name: name.into(),
            age,
        }
    }

    /// Storage-assigned identifier.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Name as stored.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Age as stored.
    pub fn age(&self) -> i64 {
        self.age
    }
}
