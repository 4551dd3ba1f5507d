//! Domain primitives, ports, and the user service.
//!
//! Purpose: define the user record, the storage port it is persisted
//! through, and the service that turns storage results into status-coded
//! responses. Nothing here depends on a particular storage engine.
//!
//! Public surface:
//! - Error (alias to `error::Error`): storage failure surfaced by the service.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User / UserId (from `user`): stored row and its identifier.
//! - UserResponse (from `response`): tagged service outcome.
//! - UserService (from `user_service`): CRUD use cases over a repository.

pub mod error;
pub mod ports;
pub mod response;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::response::{USER_DELETED, USER_NOT_FOUND, USER_UPDATED, UserResponse};
pub use self::user::{User, UserId};
pub use self::user_service::UserService;

/// Convenient service result alias.
///
/// # Examples
/// ```
/// use user_service::domain::{ServiceResult, UserResponse};
///
/// fn lookup() -> ServiceResult<UserResponse> {
///     Ok(UserResponse::NotFound)
/// }
/// # assert!(lookup().is_ok());
/// ```
pub type ServiceResult<T> = Result<T, Error>;
