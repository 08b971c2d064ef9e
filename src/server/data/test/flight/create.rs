use super::*;

/// Tests creating a flight with both airports resolved.
///
/// Expected: Ok with nested airports and zero passengers
#[tokio::test]
async fn creates_flight_with_airports() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let origin = factory::airport::create_airport(db, city.id).await?;
    let destination = factory::airport::create_airport(db, city.id).await?;

    let repo = FlightRepository::new(db);
    let flight = repo
        .create(ValidFlightParam {
            name: "FB100".to_string(),
            origin_id: origin.id,
            destination_id: destination.id,
            distance_km: 1200,
        })
        .await?;

    assert_eq!(flight.name, "FB100");
    assert_eq!(flight.origin.id, origin.id);
    assert_eq!(flight.destination.id, destination.id);
    assert_eq!(flight.origin.city.id, city.id);
    assert_eq!(flight.distance_km, 1200);
    assert_eq!(flight.passenger_count, 0);

    Ok(())
}

/// Tests that a flight may start and end at the same airport.
///
/// Expected: Ok
#[tokio::test]
async fn allows_same_origin_and_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let airport = factory::airport::create_airport(db, city.id).await?;

    let flight = FlightRepository::new(db)
        .create(ValidFlightParam {
            name: "Loop".to_string(),
            origin_id: airport.id,
            destination_id: airport.id,
            distance_km: 0,
        })
        .await?;

    assert_eq!(flight.origin, flight.destination);

    Ok(())
}
