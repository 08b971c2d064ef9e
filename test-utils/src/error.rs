use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to prepare the session store table.
    #[error("Failed to initialize session store: {0}")]
    SessionStore(String),
}
