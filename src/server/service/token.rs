//! Signed access and refresh tokens.
//!
//! Tokens are HS256 JWTs. Access tokens carry the claims clients use for display
//! (`username`, `is_flight_manager`); authorization never trusts them and always
//! reloads the account by `sub`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::account::Account,
    service::policy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID as a string.
    pub sub: String,
    pub token_type: TokenKind,
    pub username: String,
    pub is_flight_manager: bool,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("malformed subject `{}`", self.sub)))
    }
}

/// Access and refresh token issued together.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn issue_pair(&self, account: &Account) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.issue(account, TokenKind::Access)?,
            refresh: self.issue(account, TokenKind::Refresh)?,
        })
    }

    pub fn issue(&self, account: &Account, kind: TokenKind) -> Result<String, AppError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: account.id.to_string(),
            token_type: kind,
            username: account.username.clone(),
            is_flight_manager: policy::is_manager_or_admin(Some(account)),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies signature and expiry, and that the token is of the expected kind.
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.token_type != expected {
            return Err(AuthError::InvalidToken(format!(
                "expected {:?} token, got {:?}",
                expected, data.claims.token_type
            )));
        }

        Ok(data.claims)
    }
}
