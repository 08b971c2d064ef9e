use super::*;
use crate::server::data::enrollment::EnrollmentRepository;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a flight removes its enrollment edges but not passengers.
///
/// Expected: Ok(true), no edges, passenger kept
#[tokio::test]
async fn delete_cascades_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, _origin, _destination, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, passenger) = factory::helpers::create_user_with_passenger(db).await?;
    factory::passenger::create_enrollment(db, flight.id, passenger.id).await?;

    let repo = FlightRepository::new(db);

    assert!(repo.delete(flight.id).await?);
    assert!(!repo.delete(flight.id).await?);
    assert!(
        !EnrollmentRepository::new(db)
            .exists(flight.id, passenger.id)
            .await?
    );
    assert_eq!(entity::prelude::Passenger::find().count(db).await?, 1);

    Ok(())
}
