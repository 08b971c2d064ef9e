use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        airport::{self, AIRPORT_TAG},
        auth::{self, AUTH_TAG},
        city::{self, CITY_TAG},
        flight::{self, FLIGHT_TAG},
        passenger::{self, PASSENGER_TAG},
        user::{self, USER_TAG},
    },
    middleware::jwt_cookie::cookie_to_bearer,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Flightbook API", description = "Flight booking service"),
    tags(
        (name = AUTH_TAG, description = "Session login and JWT token endpoints"),
        (name = USER_TAG, description = "Registration, current user and group administration"),
        (name = CITY_TAG, description = "City management"),
        (name = AIRPORT_TAG, description = "Airport management"),
        (name = FLIGHT_TAG, description = "Flight management and enrollment"),
        (name = PASSENGER_TAG, description = "Passenger profiles"),
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
///
/// Requests carrying an `access_token` cookie but no `Authorization` header get
/// the cookie promoted to a bearer token before reaching any handler.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::obtain_token_pair))
        .routes(routes!(auth::refresh_token))
        .routes(routes!(user::register))
        .routes(routes!(user::get_current_user))
        .routes(routes!(user::add_user_to_group, user::remove_user_from_group))
        .routes(routes!(city::list_cities, city::create_city))
        .routes(routes!(city::delete_city))
        .routes(routes!(airport::list_airports, airport::create_airport))
        .routes(routes!(airport::delete_airport))
        .routes(routes!(flight::list_flights, flight::create_flight))
        .routes(routes!(flight::my_flights))
        .routes(routes!(
            flight::get_flight,
            flight::update_flight,
            flight::delete_flight
        ))
        .routes(routes!(flight::join_flight))
        .routes(routes!(flight::flight_passengers))
        .routes(routes!(passenger::list_passengers))
        .routes(routes!(
            passenger::get_passenger,
            passenger::update_passenger,
            passenger::delete_passenger
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn(cookie_to_bearer))
}
