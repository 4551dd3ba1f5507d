//! Port abstraction for user persistence adapters and their errors.

use crate::domain::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established or was lost.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Single-table storage of user rows keyed by [`UserId`].
///
/// A missing row is never an error: lookups return `None` and mutations
/// report zero affected rows. Callers use the affected-row count as the
/// existence signal for updates and deletes.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Insert a new row and return the identifier storage assigned to it.
    fn insert_user(&self, name: &str, age: i64) -> Result<UserId, UserPersistenceError>;

    /// Fetch a row by identifier.
    fn get_user(&self, user_id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite both mutable fields of a row.
    ///
    /// Returns the number of rows matched, which is 0 or 1.
    fn update_user(
        &self,
        user_id: UserId,
        name: &str,
        age: i64,
    ) -> Result<usize, UserPersistenceError>;

    /// Remove a row.
    ///
    /// Returns the number of rows matched, which is 0 or 1. Deleting a
    /// missing row is a no-op.
    fn delete_user(&self, user_id: UserId) -> Result<usize, UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        UserPersistenceError::connection("pool closed"),
        "user repository connection failed: pool closed"
    )]
    #[case(
        UserPersistenceError::query("syntax error"),
        "user repository query failed: syntax error"
    )]
    fn constructors_render_messages(#[case] err: UserPersistenceError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn constructors_accept_owned_strings() {
        let err = UserPersistenceError::query(String::from("disk I/O error"));
        assert_eq!(
            err,
            UserPersistenceError::Query {
                message: "disk I/O error".to_owned()
            }
        );
    }
}
