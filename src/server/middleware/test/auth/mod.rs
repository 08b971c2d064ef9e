use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Credentials, Permission},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
