use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    config::PassengerProfileMode,
    router,
    service::{
        token::{TokenKind, TokenService},
        user::UserService,
    },
    state::AppState,
};

mod flight;

fn app(db: &DatabaseConnection) -> (Router, TokenService) {
    let tokens = TokenService::new(
        "controller-test-secret",
        chrono::Duration::minutes(5),
        chrono::Duration::hours(1),
    );
    let state = AppState::new(db.clone(), tokens.clone(), PassengerProfileMode::Eager);

    (router::router().with_state(state), tokens)
}

/// Access token for a user created by a factory.
async fn bearer_for(db: &DatabaseConnection, tokens: &TokenService, user_id: i32) -> String {
    let (_, account) = UserService::new(db)
        .get_account(user_id)
        .await
        .unwrap()
        .unwrap();

    format!("Bearer {}", tokens.issue(&account, TokenKind::Access).unwrap())
}

fn json_request(method: Method, uri: &str, authorization: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}
