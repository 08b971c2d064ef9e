use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is attached to the request.
    ///
    /// Neither a bearer token nor a session user ID was present. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session or request")]
    UserNotInSession,

    /// The authenticated user ID no longer exists in the database.
    ///
    /// Happens when an account is deleted while a session or token for it is still
    /// alive. Results in a 401 Unauthorized response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// Username and password did not match an account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Bearer token failed verification or was of the wrong kind.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// User is authenticated but the authorization policy denied the action.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidToken` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with a credentials message
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(
                    "Authentication credentials were not provided.",
                )),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(
                    "No active account found with the given credentials",
                )),
            )
                .into_response(),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Given token not valid for any token type")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "You do not have permission to perform this action.",
                )),
            )
                .into_response(),
        }
    }
}
