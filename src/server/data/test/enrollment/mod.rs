use crate::server::data::enrollment::EnrollmentRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests that inserting the same edge twice writes one row.
///
/// Expected: true then false, one row
#[tokio::test]
async fn insert_if_absent_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, _origin, _destination, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, passenger) = factory::helpers::create_user_with_passenger(db).await?;

    let repo = EnrollmentRepository::new(db);

    assert!(repo.insert_if_absent(flight.id, passenger.id).await?);
    assert!(!repo.insert_if_absent(flight.id, passenger.id).await?);
    assert_eq!(entity::prelude::FlightPassenger::find().count(db).await?, 1);
    assert_eq!(repo.passenger_ids(flight.id).await?, vec![passenger.id]);

    Ok(())
}

/// Tests counting edges across several flights.
///
/// Expected: counts only for flights with passengers
#[tokio::test]
async fn counts_by_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, origin, destination, first) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let second = factory::flight::create_flight(db, origin.id, destination.id).await?;
    let (_u1, p1) = factory::helpers::create_user_with_passenger(db).await?;
    let (_u2, p2) = factory::helpers::create_user_with_passenger(db).await?;

    let repo = EnrollmentRepository::new(db);
    repo.insert_if_absent(first.id, p1.id).await?;
    repo.insert_if_absent(first.id, p2.id).await?;

    let counts = repo.count_by_flights(vec![first.id, second.id]).await?;

    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), None);
    assert_eq!(repo.passenger_ids(first.id).await?.len(), 2);

    Ok(())
}
