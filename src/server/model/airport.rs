//! Airport domain model.

use crate::{
    model::airport::{AirportDto, CreateAirportDto},
    server::model::city::City,
};

/// Airport together with the city it serves.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub city: City,
}

impl Airport {
    /// Builds the domain model from an airport row and its already-loaded city row.
    pub fn from_entity(entity: entity::airport::Model, city: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            city: City::from_entity(city),
        }
    }

    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            name: self.name,
            code: self.code,
            city: self.city.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirportParam {
    pub name: String,
    /// Upper-cased on conversion so `jfk` and `JFK` collide on the unique index.
    pub code: String,
    pub city_id: i32,
}

impl CreateAirportParam {
    pub fn from_dto(dto: CreateAirportDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_ascii_uppercase(),
            city_id: dto.city_id,
        }
    }
}
