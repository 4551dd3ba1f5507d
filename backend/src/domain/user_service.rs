//! User CRUD service.
//!
//! Translates repository results into [`UserResponse`] outcomes. The
//! repository performs no existence checks of its own: lookups yield
//! `None` and mutations report affected-row counts, which this service turns
//! into not-found responses.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, ServiceResult, User, UserId, UserResponse};

/// User service implementing create, read, update, and delete.
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Repository backing this service.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }
}

impl<R> UserService<R>
where
    R: UserRepository + ?Sized,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    /// Store a new user.
    ///
    /// Always yields [`UserResponse::Created`] carrying the assigned
    /// identifier unless storage itself fails.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the repository rejects the insert.
    pub fn create_user(&self, name: &str, age: i64) -> ServiceResult<UserResponse> {
        let user_id = self
            .repository
            .insert_user(name, age)
            .map_err(Self::map_persistence_error)?;
        debug!(%user_id, "user created");
        Ok(UserResponse::Created(User::new(user_id, name, age)))
    }

    /// Fetch a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the repository lookup fails.
    pub fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .repository
            .get_user(user_id)
            .map_err(Self::map_persistence_error)?;
        Ok(user.map_or(UserResponse::NotFound, UserResponse::Found))
    }

    /// Overwrite a user's name and age.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the repository update fails.
    pub fn update_user(
        &self,
        user_id: UserId,
        name: &str,
        age: i64,
    ) -> ServiceResult<UserResponse> {
        let affected = self
            .repository
            .update_user(user_id, name, age)
            .map_err(Self::map_persistence_error)?;
        if affected == 0 {
            debug!(%user_id, "update matched no user");
            return Ok(UserResponse::NotFound);
        }
        Ok(UserResponse::Updated)
    }

    /// Remove a user.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the repository delete fails.
    pub fn delete_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let affected = self
            .repository
            .delete_user(user_id)
            .map_err(Self::map_persistence_error)?;
        if affected == 0 {
            debug!(%user_id, "delete matched no user");
            return Ok(UserResponse::NotFound);
        }
        Ok(UserResponse::Deleted)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
