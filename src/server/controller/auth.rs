use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AccessTokenDto, LoginDto, RefreshTokenDto, TokenPairDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{
            jwt_cookie::{access_token_cookie, clear_access_token_cookie},
            session::AuthSession,
        },
        service::{auth::AuthService, token::TokenKind},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Stores the user in the cookie session and sets an `access_token` cookie so
/// browser clients are authenticated for both session and token checks.
///
/// # Returns
/// - `200 OK` - Logged in, returns the current user
/// - `401 Unauthorized` - Wrong username or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service
        .authenticate(payload.username.trim(), &payload.password)
        .await?;
    let account = service.account_for(&user).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let access = state.tokens.issue(&account, TokenKind::Access)?;
    let cookie = access_token_cookie(&access, state.tokens.access_ttl().num_seconds());

    tracing::debug!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(user.into_dto(&account)),
    ))
}

/// Log out.
///
/// Deletes the session and expires the `access_token` cookie. Succeeds for
/// anonymous callers too.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, clear_access_token_cookie())],
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Obtain an access/refresh token pair.
///
/// # Returns
/// - `200 OK` - Token pair
/// - `401 Unauthorized` - Wrong username or password
#[utoipa::path(
    post,
    path = "/api/token",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPairDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn obtain_token_pair(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service
        .authenticate(payload.username.trim(), &payload.password)
        .await?;
    let account = service.account_for(&user).await?;
    let pair = state.tokens.issue_pair(&account)?;

    Ok((
        StatusCode::OK,
        Json(TokenPairDto {
            access: pair.access,
            refresh: pair.refresh,
        }),
    ))
}

/// Exchange a refresh token for a new access token.
///
/// # Returns
/// - `200 OK` - New access token
/// - `401 Unauthorized` - Refresh token invalid, expired, of the wrong kind, or
///   its user no longer exists
#[utoipa::path(
    post,
    path = "/api/token/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Access token issued", body = AccessTokenDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthService::new(&state.db)
        .refresh(&state.tokens, &payload.refresh)
        .await?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access })))
}
