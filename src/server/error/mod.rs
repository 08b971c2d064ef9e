//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so that no failure escapes a handler unconverted.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationErrors},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Session store setup error, raised while migrating the session table.
    #[error(transparent)]
    SessionStoreErr(#[from] tower_sessions_sqlx_store::sqlx::Error),

    /// Failure to sign a JSON web token.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failed.
    #[error(transparent)]
    PasswordHashErr(#[from] argon2::password_hash::Error),

    /// A blocking task (password hashing or verification) panicked or was cancelled.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),

    /// Failure to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body could not be parsed.
    ///
    /// Handlers extract the body after the auth guard, so callers without access
    /// see 401/403 before any body error. Keeps axum's own status and message.
    #[error(transparent)]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),

    /// Input failed validation.
    ///
    /// Results in 400 Bad Request with per-field messages.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The authenticated account has no passenger profile.
    ///
    /// Recoverable by completing registration. Results in 404 Not Found.
    #[error("Passenger profile not found")]
    NoPassengerProfile,

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For the `Validation` variant
/// - 404 Not Found - For `NotFound` and `NoPassengerProfile` variants
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::JsonRejection(rejection) => rejection.into_response(),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Validation failed".to_string(),
                    fields: Some(errors.into_fields()),
                }),
            )
                .into_response(),
            Self::NoPassengerProfile => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new(
                    "Passenger profile not found. Please register first.",
                )),
            )
                .into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
