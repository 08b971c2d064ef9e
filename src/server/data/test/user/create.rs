use super::*;

/// Tests creating a new account.
///
/// Expected: Ok with monotonic ID and the given username
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.create(param("alice")).await?;
    let second = repo.create(param("bob")).await?;

    assert_eq!(first.username, "alice");
    assert!(!first.is_staff);
    assert!(second.id > first.id);

    Ok(())
}

/// Tests that a taken username is rejected by the unique index.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("alice")).await?;
    let result = repo.create(param("alice")).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));
    assert!(repo.username_exists("alice").await?);
    assert!(!repo.username_exists("carol").await?);

    Ok(())
}
