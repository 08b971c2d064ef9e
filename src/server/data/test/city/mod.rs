use crate::server::{
    data::{city::CityRepository, enrollment::EnrollmentRepository, flight::FlightRepository},
    model::city::CreateCityParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and listing cities.
///
/// Expected: cities returned ordered by name
#[tokio::test]
async fn creates_and_lists_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    repo.create(CreateCityParam {
        name: "Paris".to_string(),
    })
    .await?;
    repo.create(CreateCityParam {
        name: "Berlin".to_string(),
    })
    .await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|c| c.name).collect();

    assert_eq!(names, vec!["Berlin".to_string(), "Paris".to_string()]);
    assert!(repo.name_exists("Paris").await?);
    assert!(!repo.name_exists("Rome").await?);

    Ok(())
}

/// Tests that deleting a city removes its airports, their flights and enrollments.
///
/// Expected: no airport, flight or enrollment rows remain
#[tokio::test]
async fn delete_cascades_to_airports_flights_and_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _origin, _destination, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, passenger) = factory::helpers::create_user_with_passenger(db).await?;
    factory::passenger::create_enrollment(db, flight.id, passenger.id).await?;

    let deleted = CityRepository::new(db).delete(city.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Airport::find().count(db).await?, 0);
    assert!(!FlightRepository::new(db).exists(flight.id).await?);
    assert!(
        !EnrollmentRepository::new(db)
            .exists(flight.id, passenger.id)
            .await?
    );
    // The passenger itself survives
    assert_eq!(entity::prelude::Passenger::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a city that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_returns_false_for_missing_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CityRepository::new(db).delete(404).await?);

    Ok(())
}
