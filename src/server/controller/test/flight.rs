use super::*;

/// Tests that an anonymous caller with a malformed body is refused as unauthenticated.
///
/// Expected: 401 for create and update
#[tokio::test]
async fn anonymous_malformed_body_is_unauthorized() {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _) = app(db);

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/flights", None, "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(json_request(Method::PUT, "/api/flights/1", None, "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that a non-manager with a malformed body is refused as forbidden.
///
/// Expected: 403
#[tokio::test]
async fn non_manager_malformed_body_is_forbidden() {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, tokens) = app(db);

    let user = factory::user::create_user(db).await.unwrap();
    let authorization = bearer_for(db, &tokens, user.id).await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/flights",
            Some(&authorization),
            "{not json",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Tests that a manager still gets the body error once access is granted.
///
/// Expected: 4xx body rejection, not 401/403
#[tokio::test]
async fn manager_malformed_body_is_rejected() {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, tokens) = app(db);

    let manager = factory::user::UserFactory::new(db)
        .username("manager")
        .staff(true)
        .build()
        .await
        .unwrap();
    let authorization = bearer_for(db, &tokens, manager.id).await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/flights",
            Some(&authorization),
            "{not json",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
