//! Airport factory for creating test airport entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    city_id: i32,
    name: String,
    code: String,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airport {id}"`
    /// - code: `"A{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - City the airport belongs to
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            city_id,
            name: format!("Airport {}", id),
            code: format!("A{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and inserts the airport entity into the database.
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            city_id: ActiveValue::Set(self.city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values in the given city.
pub async fn create_airport(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db, city_id).build().await
}
