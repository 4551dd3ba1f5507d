//! Service response envelope.
//!
//! Every user service operation resolves to a [`UserResponse`]. The variant
//! carries the typed outcome; the mapping shape callers see is produced only
//! when the response is serialised or split with [`UserResponse::into_parts`].

use http::StatusCode;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::domain::User;

/// Message returned when a lookup, update, or delete finds no row.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message returned after a successful update.
pub const USER_UPDATED: &str = "User updated successfully";
/// Message returned after a successful delete.
pub const USER_DELETED: &str = "User deleted successfully";

/// Outcome of a user service operation.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use user_service::domain::UserResponse;
///
/// let (payload, status) = UserResponse::NotFound.into_parts();
/// assert_eq!(status.as_u16(), 404);
/// assert_eq!(payload, json!({ "error": "User not found" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResponse {
    /// A new row was stored.
    Created(User),
    /// The requested row exists.
    Found(User),
    /// The row was updated in place.
    Updated,
    /// The row was removed.
    Deleted,
    /// No row matches the requested identifier.
    NotFound,
}

impl UserResponse {
    /// Status code paired with this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Created(_) => StatusCode::CREATED,
            Self::Found(_) | Self::Updated | Self::Deleted => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Mapping payload for this outcome.
    pub fn payload(&self) -> Value {
        match self {
            Self::Created(user) | Self::Found(user) => json!(user),
            Self::Updated => json!({ "message": USER_UPDATED }),
            Self::Deleted => json!({ "message": USER_DELETED }),
            Self::NotFound => json!({ "error": USER_NOT_FOUND }),
        }
    }

    /// Split into the `(payload, status)` pair.
    pub fn into_parts(self) -> (Value, StatusCode) {
        let status = self.status();
        (self.payload(), status)
    }

    /// The user carried by `Created` and `Found` outcomes.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Created(user) | Self::Found(user) => Some(user),
            Self::Updated | Self::Deleted | Self::NotFound => None,
        }
    }

    /// Whether the operation found no matching row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl Serialize for UserResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.payload().serialize(serializer)
    }
}
