use super::*;

/// Tests that a member of "Flight Managers" passes the manager check.
///
/// Expected: Ok
#[tokio::test]
async fn grants_access_to_flight_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::helpers::create_flight_manager(db).await?;

    let credentials = Credentials::Bearer(manager.id);
    let result = AuthGuard::new(db, &credentials)
        .require(&[Permission::FlightManager])
        .await;

    assert!(result.is_ok());
    let (_, account) = result.unwrap();
    assert!(account.in_group("Flight Managers"));

    Ok(())
}

/// Tests that staff pass the manager check without group membership.
///
/// Expected: Ok
#[tokio::test]
async fn grants_access_to_staff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::UserFactory::new(db).staff(true).build().await?;

    let credentials = Credentials::Bearer(staff.id);
    let result = AuthGuard::new(db, &credentials)
        .require(&[Permission::FlightManager])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an ordinary user is forbidden.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::group::create_group(db, "Crew").await?;
    factory::group::add_user_to_group(db, user.id, other.id).await?;

    let credentials = Credentials::Bearer(user.id);
    let result = AuthGuard::new(db, &credentials)
        .require(&[Permission::FlightManager])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests that anonymous callers get 401 rather than 403.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_with_unauthenticated_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = Credentials::Anonymous;
    let result = AuthGuard::new(db, &credentials)
        .require(&[Permission::FlightManager])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that removing the group revokes access on the next request.
///
/// Expected: Ok before removal, AccessDenied after
#[tokio::test]
async fn revoked_membership_applies_immediately() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::helpers::create_flight_manager(db).await?;
    let credentials = Credentials::Bearer(manager.id);
    let guard = AuthGuard::new(db, &credentials);

    assert!(guard.require(&[Permission::FlightManager]).await.is_ok());

    crate::server::service::user::UserService::new(db)
        .remove_from_group(manager.id, "Flight Managers")
        .await?;

    assert!(matches!(
        guard.require(&[Permission::FlightManager]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
