use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{FlightDto, FlightInputDto, JoinFlightDto},
        passenger::PassengerDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::flight::FlightParam,
        service::{enrollment::EnrollmentService, flight::FlightService},
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// List all flights.
///
/// Public. Each flight includes both airports and its passenger count.
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "All flights", body = Vec<FlightDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(flights.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a flight by ID.
#[utoipa::path(
    get,
    path = "/api/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(("flight_id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db).get(flight_id).await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Create a flight.
///
/// # Access Control
/// - `FlightManager` - Staff or members of "Flight Managers"
///
/// # Returns
/// - `201 Created` - Flight created
/// - `400 Bad Request` - Field-level validation errors
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not a flight manager
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = FlightInputDto,
    responses(
        (status = 201, description = "Flight created", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    credentials: Credentials,
    payload: Result<Json<FlightInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;
    let Json(payload) = payload?;

    let flight = FlightService::new(&state.db)
        .create(FlightParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Replace a flight's fields.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    put,
    path = "/api/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(("flight_id" = i32, Path, description = "Flight ID")),
    request_body = FlightInputDto,
    responses(
        (status = 200, description = "Flight updated", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(flight_id): Path<i32>,
    payload: Result<Json<FlightInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;
    let Json(payload) = payload?;

    let flight = FlightService::new(&state.db)
        .update(flight_id, FlightParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Delete a flight and its enrollments.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    delete,
    path = "/api/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(("flight_id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;

    FlightService::new(&state.db).delete(flight_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a flight as a passenger.
///
/// Repeating the request is harmless: the response reports `already_joined`
/// and no second enrollment is written.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - `joined` or `already_joined`
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Flight not found, or the caller has no passenger profile
#[utoipa::path(
    post,
    path = "/api/flights/{flight_id}/join",
    tag = FLIGHT_TAG,
    params(("flight_id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Joined or already joined", body = JoinFlightDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Flight or passenger profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_flight(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_, account) = AuthGuard::new(&state.db, &credentials)
        .require(&[])
        .await?;

    let outcome = EnrollmentService::new(&state.db, state.profile_mode)
        .join(&account, flight_id)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// List the flights the caller has joined.
///
/// # Access Control
/// - Authenticated users
#[utoipa::path(
    get,
    path = "/api/flights/my",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Joined flights", body = Vec<FlightDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Passenger profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_flights(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let (_, account) = AuthGuard::new(&state.db, &credentials)
        .require(&[])
        .await?;

    let flights = EnrollmentService::new(&state.db, state.profile_mode)
        .my_flights(&account)
        .await?;

    Ok((
        StatusCode::OK,
        Json(flights.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the passengers enrolled on a flight.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    get,
    path = "/api/flights/{flight_id}/passengers",
    tag = FLIGHT_TAG,
    params(("flight_id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight roster", body = Vec<PassengerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn flight_passengers(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;

    let passengers = FlightService::new(&state.db).passengers(flight_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            passengers
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
