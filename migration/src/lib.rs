pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_group_table;
mod m20260101_000003_create_user_group_table;
mod m20260102_000004_create_city_table;
mod m20260102_000005_create_airport_table;
mod m20260102_000006_create_passenger_table;
mod m20260102_000007_create_flight_table;
mod m20260102_000008_create_flight_passenger_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_group_table::Migration),
            Box::new(m20260101_000003_create_user_group_table::Migration),
            Box::new(m20260102_000004_create_city_table::Migration),
            Box::new(m20260102_000005_create_airport_table::Migration),
            Box::new(m20260102_000006_create_passenger_table::Migration),
            Box::new(m20260102_000007_create_flight_table::Migration),
            Box::new(m20260102_000008_create_flight_passenger_table::Migration),
        ]
    }
}
