use super::*;
use crate::server::data::enrollment::EnrollmentRepository;

/// Tests replacing a flight's fields keeps its enrollments.
///
/// Expected: Ok(Some) with new values and unchanged passenger count
#[tokio::test]
async fn updates_fields_and_keeps_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, origin, destination, flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, passenger) = factory::helpers::create_user_with_passenger(db).await?;
    factory::passenger::create_enrollment(db, flight.id, passenger.id).await?;

    let updated = FlightRepository::new(db)
        .update(
            flight.id,
            ValidFlightParam {
                name: "Renamed".to_string(),
                origin_id: destination.id,
                destination_id: origin.id,
                distance_km: 42,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.origin.id, destination.id);
    assert_eq!(updated.destination.id, origin.id);
    assert_eq!(updated.distance_km, 42);
    assert_eq!(updated.passenger_count, 1);
    assert!(
        EnrollmentRepository::new(db)
            .exists(flight.id, passenger.id)
            .await?
    );

    Ok(())
}

/// Tests updating a missing flight.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, origin, destination, _flight) =
        factory::helpers::create_flight_with_dependencies(db).await?;

    let result = FlightRepository::new(db)
        .update(
            404,
            ValidFlightParam {
                name: "Ghost".to_string(),
                origin_id: origin.id,
                destination_id: destination.id,
                distance_km: 1,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
