use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{account::Account, user::User},
    service::{policy, token::TokenKind, user::UserService},
    state::AppState,
};

pub enum Permission {
    /// Staff or member of the "Flight Managers" group.
    FlightManager,
    /// Staff only.
    Staff,
}

/// Where the caller's identity comes from on this request.
///
/// A bearer token (header or bridged cookie) takes precedence over the cookie
/// session. A bearer token that fails verification rejects the request outright.
#[derive(Clone)]
pub enum Credentials {
    Anonymous,
    Bearer(i32),
    Session(Session),
}

impl FromRequestParts<AppState> for Credentials {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(token) = bearer_token(&parts.headers) {
            let claims = state.tokens.verify(token, TokenKind::Access)?;
            return Ok(Self::Bearer(claims.user_id()?));
        }

        match parts.extensions.get::<Session>() {
            Some(session) => Ok(Self::Session(session.clone())),
            None => Ok(Self::Anonymous),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    credentials: &'a Credentials,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, credentials: &'a Credentials) -> Self {
        Self { db, credentials }
    }

    /// Resolves the caller, or `None` when anonymous.
    ///
    /// The account is reloaded from the database on every call so group changes
    /// apply without logging in again.
    pub async fn current(&self) -> Result<Option<(User, Account)>, AppError> {
        let user_id = match self.credentials {
            Credentials::Anonymous => return Ok(None),
            Credentials::Bearer(user_id) => *user_id,
            Credentials::Session(session) => {
                match AuthSession::new(session).get_user_id().await? {
                    Some(user_id) => user_id,
                    None => return Ok(None),
                }
            }
        };

        match UserService::new(self.db).get_account(user_id).await? {
            Some(found) => Ok(Some(found)),
            None => Err(AuthError::UserNotInDatabase(user_id).into()),
        }
    }

    /// Requires an authenticated caller satisfying every listed permission.
    ///
    /// An empty slice only requires authentication.
    ///
    /// # Returns
    /// - `Ok((User, Account))` - Caller admitted
    /// - `Err(AuthError::UserNotInSession)` - Anonymous caller (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Credentials name a deleted user (401)
    /// - `Err(AuthError::AccessDenied)` - Policy denied the caller (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<(User, Account), AppError> {
        let current = self.current().await?;
        let account = current.as_ref().map(|(_, account)| account);

        if !policy::is_authenticated_user(account) {
            return Err(AuthError::UserNotInSession.into());
        }

        for permission in permissions {
            let (allowed, reason) = match permission {
                Permission::FlightManager => (
                    policy::is_manager_or_admin(account),
                    "User attempted a flight management action without being staff or a flight manager",
                ),
                Permission::Staff => (
                    policy::is_staff(account),
                    "User attempted a staff-only action without staff status",
                ),
            };

            if !allowed {
                let user_id = account.map(|account| account.id).unwrap_or_default();
                return Err(AuthError::AccessDenied(user_id, reason.to_string()).into());
            }
        }

        current.ok_or_else(|| AuthError::UserNotInSession.into())
    }
}
