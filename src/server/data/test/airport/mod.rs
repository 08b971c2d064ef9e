use crate::server::{data::airport::AirportRepository, model::airport::CreateAirportParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating an airport returns it with its city.
///
/// Expected: Ok with nested city
#[tokio::test]
async fn creates_airport_with_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city_with_name(db, "London").await?;

    let repo = AirportRepository::new(db);
    let airport = repo
        .create(CreateAirportParam {
            name: "Heathrow".to_string(),
            code: "LHR".to_string(),
            city_id: city.id,
        })
        .await?;

    assert_eq!(airport.code, "LHR");
    assert_eq!(airport.city.name, "London");
    assert!(repo.exists(airport.id).await?);
    assert!(repo.code_exists("LHR").await?);

    Ok(())
}

/// Tests batch lookup by ID.
///
/// Expected: map containing only the known airports
#[tokio::test]
async fn get_by_ids_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let a = factory::airport::create_airport(db, city.id).await?;
    let b = factory::airport::create_airport(db, city.id).await?;

    let repo = AirportRepository::new(db);
    let map = repo.get_by_ids(vec![a.id, b.id, 9999]).await?;

    assert_eq!(map.len(), 2);
    assert_eq!(map[&a.id].code, a.code);
    assert!(repo.get_by_ids(vec![]).await?.is_empty());
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
