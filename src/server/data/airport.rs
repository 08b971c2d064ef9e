use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::airport::{Airport, CreateAirportParam};

pub struct AirportRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an airport and returns it with its city.
    pub async fn create(&self, param: CreateAirportParam) -> Result<Airport, DbErr> {
        let airport = entity::airport::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            city_id: ActiveValue::Set(param.city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(airport.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Airport with id {} not found after creation",
                airport.id
            )))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Airport>, DbErr> {
        let result = entity::prelude::Airport::find_by_id(id)
            .find_also_related(entity::prelude::City)
            .one(self.db)
            .await?;

        result.map(with_city).transpose()
    }

    pub async fn get_all(&self) -> Result<Vec<Airport>, DbErr> {
        entity::prelude::Airport::find()
            .find_also_related(entity::prelude::City)
            .order_by_asc(entity::airport::Column::Code)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_city)
            .collect()
    }

    /// Loads the given airports keyed by ID. Unknown IDs are absent from the map.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Airport>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::Airport::find()
            .find_also_related(entity::prelude::City)
            .filter(entity::airport::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| with_city(row).map(|airport| (airport.id, airport)))
            .collect()
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Airport::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes an airport; flights departing from or arriving at it go with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Airport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn with_city(
    (airport, city): (entity::airport::Model, Option<entity::city::Model>),
) -> Result<Airport, DbErr> {
    let city = city.ok_or(DbErr::RecordNotFound(format!(
        "City {} for airport {} not found",
        airport.city_id, airport.id
    )))?;

    Ok(Airport::from_entity(airport, city))
}
