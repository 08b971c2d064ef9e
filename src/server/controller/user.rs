use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{RegisterUserDto, RegisteredUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Credentials, Permission},
            jwt_cookie::access_token_cookie,
            session::AuthSession,
        },
        model::user::RegisterUserParam,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// Creates the account and its passenger profile atomically, logs the new user
/// in and returns a token pair.
///
/// # Returns
/// - `201 Created` - Account created, user logged in
/// - `400 Bad Request` - Field-level validation errors, including a taken username
/// - `500 Internal Server Error` - Database error, nothing persisted
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account registered", body = RegisteredUserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service
        .register(RegisterUserParam::from_dto(payload))
        .await?;
    let account = service.account_for(&user).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let pair = state.tokens.issue_pair(&account)?;
    let cookie = access_token_cookie(&pair.access, state.tokens.access_ttl().num_seconds());

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(RegisteredUserDto {
            user: user.into_dto(&account),
            access: pair.access,
            refresh: pair.refresh,
        }),
    ))
}

/// Get the current user.
///
/// # Access Control
/// - Authenticated users
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let (user, account) = AuthGuard::new(&state.db, &credentials)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(&account))))
}

/// Add a user to a group.
///
/// The group is created if it does not exist. Adding "Flight Managers" grants
/// flight management from the user's next request.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/groups/{group_name}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("group_name" = String, Path, description = "Group name")
    ),
    responses(
        (status = 200, description = "Membership added", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_to_group(
    State(state): State<AppState>,
    credentials: Credentials,
    Path((user_id, group_name)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Staff])
        .await?;

    let (user, account) = UserService::new(&state.db)
        .add_to_group(user_id, &group_name)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(&account))))
}

/// Remove a user from a group.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}/groups/{group_name}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("group_name" = String, Path, description = "Group name")
    ),
    responses(
        (status = 200, description = "Membership removed", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_from_group(
    State(state): State<AppState>,
    credentials: Credentials,
    Path((user_id, group_name)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::Staff])
        .await?;

    let (user, account) = UserService::new(&state.db)
        .remove_from_group(user_id, &group_name)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(&account))))
}
