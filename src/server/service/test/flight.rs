use super::*;
use crate::server::{model::flight::FlightParam, service::flight::FlightService};

fn param(origin_id: i32, destination_id: i32, distance_km: i64) -> FlightParam {
    FlightParam {
        name: "FB200".to_string(),
        origin_id,
        destination_id,
        distance_km,
    }
}

/// Tests creating a valid flight.
///
/// Expected: Ok with stored distance
#[tokio::test]
async fn creates_valid_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let origin = factory::airport::create_airport(db, city.id).await?;
    let destination = factory::airport::create_airport(db, city.id).await?;

    let flight = FlightService::new(db)
        .create(param(origin.id, destination.id, 880))
        .await?;

    assert_eq!(flight.distance_km, 880);
    assert_eq!(flight.origin.code, origin.code);

    Ok(())
}

/// Tests field-level rejection of bad input.
///
/// Expected: Err(Validation) naming every bad field, nothing written
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let origin = factory::airport::create_airport(db, city.id).await?;

    let mut bad = param(origin.id, 9999, -1);
    bad.name = String::new();

    match FlightService::new(db).create(bad).await {
        Err(AppError::Validation(errors)) => {
            assert!(errors.field("name").is_some());
            assert!(errors.field("distance_km").is_some());
            assert!(errors.field("destination_id").is_some());
            assert!(errors.field("origin_id").is_none());
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let mut blank = param(origin.id, origin.id, 10);
    blank.name = "   ".to_string();

    match FlightService::new(db).create(blank).await {
        Err(AppError::Validation(errors)) => {
            assert_eq!(
                errors.field("name"),
                Some(&["This field may not be blank.".to_string()][..])
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(entity::prelude::Flight::find().count(db).await?, 0);

    Ok(())
}

/// Tests the distance bounds.
///
/// Expected: 0 and i32::MAX accepted, i32::MAX + 1 rejected
#[tokio::test]
async fn enforces_distance_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let airport = factory::airport::create_airport(db, city.id).await?;
    let service = FlightService::new(db);

    assert_eq!(
        service.create(param(airport.id, airport.id, 0)).await?.distance_km,
        0
    );
    assert_eq!(
        service
            .create(param(airport.id, airport.id, i32::MAX as i64))
            .await?
            .distance_km,
        i32::MAX
    );
    assert!(matches!(
        service
            .create(param(airport.id, airport.id, i32::MAX as i64 + 1))
            .await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}

/// Tests update and delete of missing flights.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn update_and_delete_missing_flight_are_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let airport = factory::airport::create_airport(db, city.id).await?;
    let service = FlightService::new(db);

    assert!(matches!(
        service.update(404, param(airport.id, airport.id, 10)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.delete(404).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.get(404).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.passengers(404).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
