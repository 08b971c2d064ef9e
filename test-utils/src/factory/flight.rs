//! Flight factory for creating test flight entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let flight = FlightFactory::new(&db, origin.id, destination.id)
///     .name("AB123")
///     .distance_km(850)
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    origin_id: i32,
    destination_id: i32,
    distance_km: i32,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - name: `"FL{id}"`
    /// - distance_km: `500`
    pub fn new(db: &'a DatabaseConnection, origin_id: i32, destination_id: i32) -> Self {
        Self {
            db,
            name: format!("FL{}", next_id()),
            origin_id,
            destination_id,
            distance_km: 500,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn distance_km(mut self, distance_km: i32) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Builds and inserts the flight entity into the database.
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            name: ActiveValue::Set(self.name),
            origin_id: ActiveValue::Set(self.origin_id),
            destination_id: ActiveValue::Set(self.destination_id),
            distance_km: ActiveValue::Set(self.distance_km),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values between two airports.
pub async fn create_flight(
    db: &DatabaseConnection,
    origin_id: i32,
    destination_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, origin_id, destination_id)
        .build()
        .await
}
