use super::*;

/// Tests that an empty permission list admits any logged-in user.
///
/// Expected: Ok with the session user's account
#[tokio::test]
async fn grants_access_to_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_username(db, "traveller").await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let credentials = Credentials::Session(session.clone());
    let (found, account) = AuthGuard::new(db, &credentials).require(&[]).await?;

    assert_eq!(found.id, user.id);
    assert_eq!(account.username, "traveller");
    assert!(account.groups.is_empty());

    Ok(())
}

/// Tests that a verified bearer identity is admitted.
///
/// Expected: Ok with the bearer's account
#[tokio::test]
async fn grants_access_to_bearer_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let credentials = Credentials::Bearer(user.id);
    let (_, account) = AuthGuard::new(db, &credentials).require(&[]).await?;

    assert_eq!(account.id, user.id);

    Ok(())
}

/// Tests that an empty session is treated as anonymous.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let credentials = Credentials::Session(session.clone());
    let result = AuthGuard::new(db, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    let anonymous = Credentials::Anonymous;
    assert!(AuthGuard::new(db, &anonymous).current().await?.is_none());

    Ok(())
}

/// Tests that credentials naming a deleted user are rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_no_longer_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = Credentials::Bearer(404);
    let result = AuthGuard::new(db, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests that logout removes the session identity.
///
/// Expected: Err(AuthError::UserNotInSession) after logout
#[tokio::test]
async fn logout_clears_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.logout().await?;

    let credentials = Credentials::Session(session.clone());
    let result = AuthGuard::new(db, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
