//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{config::PassengerProfileMode, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the signing keys, cloned per request
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies access and refresh tokens.
    pub tokens: TokenService,

    /// Whether joining a flight may create a missing passenger profile.
    pub profile_mode: PassengerProfileMode,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        profile_mode: PassengerProfileMode,
    ) -> Self {
        Self {
            db,
            tokens,
            profile_mode,
        }
    }
}
