use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        passenger::{PassengerDto, UpdatePassengerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials},
        model::passenger::UpdatePassengerParam,
        service::passenger::PassengerService,
        state::AppState,
    },
};

/// Tag for grouping passenger endpoints in OpenAPI documentation
pub static PASSENGER_TAG: &str = "passenger";

/// List all passengers.
///
/// # Access Control
/// - Authenticated users
#[utoipa::path(
    get,
    path = "/api/passengers",
    tag = PASSENGER_TAG,
    responses(
        (status = 200, description = "All passengers", body = Vec<PassengerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_passengers(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let passengers = PassengerService::new(&state.db).list().await?;

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

#[utoipa::path(
    get,
    path = "/api/passengers/{passenger_id}",
    tag = PASSENGER_TAG,
    params(("passenger_id" = i32, Path, description = "Passenger ID")),
    responses(
        (status = 200, description = "Passenger details", body = PassengerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_passenger(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(passenger_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    let passenger = PassengerService::new(&state.db).get(passenger_id).await?;

    Ok((StatusCode::OK, Json(passenger.into_dto())))
}

/// Update a passenger's name and phone. The passport number is fixed.
#[utoipa::path(
    put,
    path = "/api/passengers/{passenger_id}",
    tag = PASSENGER_TAG,
    params(("passenger_id" = i32, Path, description = "Passenger ID")),
    request_body = UpdatePassengerDto,
    responses(
        (status = 200, description = "Passenger updated", body = PassengerDto),
        (status = 400, description = "Invalid passenger data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_passenger(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(passenger_id): Path<i32>,
    payload: Result<Json<UpdatePassengerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;
    let Json(payload) = payload?;

    let passenger = PassengerService::new(&state.db)
        .update(passenger_id, UpdatePassengerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(passenger.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/passengers/{passenger_id}",
    tag = PASSENGER_TAG,
    params(("passenger_id" = i32, Path, description = "Passenger ID")),
    responses(
        (status = 204, description = "Passenger deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_passenger(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(passenger_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials).require(&[]).await?;

    PassengerService::new(&state.db).delete(passenger_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
