//! Shared mapping from Diesel failures to user persistence errors.

use std::sync::PoisonError;

use tracing::debug;

use crate::domain::ports::UserPersistenceError;

/// Map Diesel errors into user repository errors.
///
/// Diagnostic detail goes to the debug log; the returned message stays
/// generic.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            UserPersistenceError::query("database value conversion error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// Map a poisoned connection lock into a connection error.
pub(crate) fn map_lock_error<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::connection("database connection lock poisoned")
}
