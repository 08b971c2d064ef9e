use super::*;

/// Tests the staff gate.
///
/// Expected: staff admitted; flight managers without staff status denied
#[tokio::test]
async fn staff_permission_requires_staff_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::UserFactory::new(db).staff(true).build().await?;
    let manager = factory::helpers::create_flight_manager(db).await?;

    let staff_credentials = Credentials::Bearer(staff.id);
    assert!(AuthGuard::new(db, &staff_credentials)
        .require(&[Permission::Staff])
        .await
        .is_ok());

    let manager_credentials = Credentials::Bearer(manager.id);
    assert!(matches!(
        AuthGuard::new(db, &manager_credentials)
            .require(&[Permission::Staff])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that all listed permissions must hold.
///
/// Expected: staff passes both checks
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::user::UserFactory::new(db).staff(true).build().await?;

    let credentials = Credentials::Bearer(staff.id);
    let result = AuthGuard::new(db, &credentials)
        .require(&[Permission::FlightManager, Permission::Staff])
        .await;

    assert!(result.is_ok());

    Ok(())
}
