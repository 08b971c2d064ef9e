use crate::server::{
    data::passenger::PassengerRepository,
    model::passenger::{passport_for, CreatePassengerParam, UpdatePassengerParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a passenger carries the owning username.
///
/// Expected: Ok with username and passport
#[tokio::test]
async fn creates_passenger_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_username(db, "alice").await?;

    let repo = PassengerRepository::new(db);
    let passenger = repo
        .create(CreatePassengerParam {
            user_id: user.id,
            name: "Alice".to_string(),
            passport: passport_for(user.id),
            phone: String::new(),
        })
        .await?;

    assert_eq!(passenger.username, "alice");
    assert_eq!(passenger.passport, passport_for(user.id));
    assert_eq!(
        repo.find_by_user_id(user.id).await?.map(|p| p.id),
        Some(passenger.id)
    );

    Ok(())
}

/// Tests that get_or_create never makes a second profile.
///
/// Expected: same passenger both times, one row
#[tokio::test]
async fn get_or_create_keeps_one_profile_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let param = CreatePassengerParam {
        user_id: user.id,
        name: user.username.clone(),
        passport: passport_for(user.id),
        phone: String::new(),
    };

    let repo = PassengerRepository::new(db);
    let first = repo.get_or_create(param.clone()).await?;
    let second = repo.get_or_create(param).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::Passenger::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating name and phone leaves the passport alone.
///
/// Expected: Ok(Some) with new fields and original passport
#[tokio::test]
async fn update_keeps_passport() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, passenger) = factory::helpers::create_user_with_passenger(db).await?;

    let repo = PassengerRepository::new(db);
    let updated = repo
        .update(
            passenger.id,
            UpdatePassengerParam {
                name: "New Name".to_string(),
                phone: "+15550100".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.phone, "+15550100");
    assert_eq!(updated.passport, passenger.passport);
    assert!(repo.update(404, UpdatePassengerParam {
        name: "x".to_string(),
        phone: String::new(),
    })
    .await?
    .is_none());

    Ok(())
}

/// Tests the roster of a flight.
///
/// Expected: only enrolled passengers
#[tokio::test]
async fn get_by_flight_returns_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, _origin, _destination, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_u1, onboard) = factory::helpers::create_user_with_passenger(db).await?;
    let (_u2, _ashore) = factory::helpers::create_user_with_passenger(db).await?;
    factory::passenger::create_enrollment(db, flight.id, onboard.id).await?;

    let repo = PassengerRepository::new(db);
    let roster = repo.get_by_flight(flight.id).await?;

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, onboard.id);
    assert_eq!(repo.get_all().await?.len(), 2);
    assert!(repo.get_by_flight(404).await?.is_empty());

    Ok(())
}

/// Tests deleting an account removes its passenger profile.
///
/// Expected: no passenger rows remain
#[tokio::test]
async fn deleting_user_cascades_to_passenger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, passenger) = factory::helpers::create_user_with_passenger(db).await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let repo = PassengerRepository::new(db);
    assert!(repo.find_by_id(passenger.id).await?.is_none());
    assert_eq!(entity::prelude::Passenger::find().count(db).await?, 0);

    Ok(())
}
