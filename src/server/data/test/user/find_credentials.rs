use super::*;

/// Tests that credentials lookup returns the stored hash.
///
/// Expected: Ok(Some) with the user and hash
#[tokio::test]
async fn returns_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("alice")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, hash) = repo.find_credentials("alice").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(hash, "stored-hash");

    Ok(())
}

/// Tests lookup of an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_credentials("nobody").await?.is_none());
    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}
