use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        city::{CityDto, CreateCityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::city::CreateCityParam,
        service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cities = CityService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(cities.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a city.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    credentials: Credentials,
    payload: Result<Json<CreateCityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;
    let Json(payload) = payload?;

    let city = CityService::new(&state.db)
        .create(CreateCityParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

/// Delete a city.
///
/// Its airports, the flights using them, and those flights' enrollments are
/// deleted with it.
///
/// # Access Control
/// - `FlightManager`
#[utoipa::path(
    delete,
    path = "/api/cities/{city_id}",
    tag = CITY_TAG,
    params(("city_id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a flight manager", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &credentials)
        .require(&[Permission::FlightManager])
        .await?;

    CityService::new(&state.db).delete(city_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
