use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airport::{AirportDto, CreateAirportDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::airport::CreateAirportParam,
        service::airport::AirportService,
        state::AppState,
    },
};

/// Tag for grouping airport endpoints in OpenAPI documentation
pub static AIRPORT_TAG: &str = "airport";

#[utoipa::path(
    get,
    path = "/api/airports",
    tag = AIRPORT_TAG,
    responses(
        (status = 200, description = "All airports with their cities", body = Vec<AirportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airports = AirportService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(airports.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create an airport.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    post,
    path = "/api/airports",
    tag = AIRPORT_TAG,
    request_body = CreateAirportDto,
    responses(
        (status = 201, description = "Airport created", body = AirportDto),
        (status = 400, description = "Invalid airport data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airport(
    State(state): State<AppState>,
    credentials: Credentials,
    payload: Result<Json<CreateAirportDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;
    let Json(payload) = payload?;

    let airport = AirportService::new(&state.db)
        .create(CreateAirportParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(airport.into_dto())))
}

/// Delete an airport and every flight using it.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    delete,
    path = "/api/airports/{airport_id}",
    tag = AIRPORT_TAG,
    params(("airport_id" = i32, Path, description = "Airport ID")),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_airport(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(airport_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;

    AirportService::new(&state.db).delete(airport_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
