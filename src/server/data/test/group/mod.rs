use crate::server::data::group::GroupRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that get_or_create is idempotent.
///
/// Expected: the same group row both times
#[tokio::test]
async fn get_or_create_returns_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let first = repo.get_or_create("Flight Managers").await?;
    let second = repo.get_or_create("Flight Managers").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.name, "Flight Managers");

    Ok(())
}

/// Tests adding and removing group memberships.
///
/// Expected: add reports creation once, names reflect membership, remove reports
/// whether a row existed
#[tokio::test]
async fn adds_and_removes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = GroupRepository::new(db);
    let managers = repo.get_or_create("Flight Managers").await?;
    let crew = repo.get_or_create("Crew").await?;

    assert!(repo.add_user(user.id, managers.id).await?);
    assert!(!repo.add_user(user.id, managers.id).await?);
    assert!(repo.add_user(user.id, crew.id).await?);

    assert_eq!(
        repo.names_for_user(user.id).await?,
        vec!["Crew".to_string(), "Flight Managers".to_string()]
    );

    assert!(repo.remove_user(user.id, managers.id).await?);
    assert!(!repo.remove_user(user.id, managers.id).await?);
    assert_eq!(repo.names_for_user(user.id).await?, vec!["Crew".to_string()]);

    Ok(())
}
