use super::*;

/// Tests that passenger counts reflect enrollment rows.
///
/// Expected: count per flight, zero for a flight nobody joined
#[tokio::test]
async fn get_all_includes_passenger_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, origin, destination, busy) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let quiet = factory::flight::create_flight(db, destination.id, origin.id).await?;

    let (_u1, p1) = factory::helpers::create_user_with_passenger(db).await?;
    let (_u2, p2) = factory::helpers::create_user_with_passenger(db).await?;
    factory::passenger::create_enrollment(db, busy.id, p1.id).await?;
    factory::passenger::create_enrollment(db, busy.id, p2.id).await?;

    let flights = FlightRepository::new(db).get_all().await?;

    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].id, busy.id);
    assert_eq!(flights[0].passenger_count, 2);
    assert_eq!(flights[1].id, quiet.id);
    assert_eq!(flights[1].passenger_count, 0);
    assert_eq!(flights[1].origin.id, destination.id);

    Ok(())
}

/// Tests listing the flights of one passenger.
///
/// Expected: only flights the passenger joined
#[tokio::test]
async fn get_by_passenger_returns_joined_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, origin, destination, joined) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    factory::flight::create_flight(db, origin.id, destination.id).await?;
    let (_user, passenger) = factory::helpers::create_user_with_passenger(db).await?;
    factory::passenger::create_enrollment(db, joined.id, passenger.id).await?;

    let flights = FlightRepository::new(db)
        .get_by_passenger(passenger.id)
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, joined.id);
    assert_eq!(flights[0].passenger_count, 1);

    Ok(())
}

/// Tests lookup of a missing flight.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_by_id_returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);

    assert!(repo.get_by_id(404).await?.is_none());
    assert!(!repo.exists(404).await?);

    Ok(())
}
