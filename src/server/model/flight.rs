//! Flight domain models and parameters.

use crate::{
    model::flight::{FlightDto, FlightInputDto},
    server::model::airport::Airport,
};

/// Flight with both endpoints resolved and the current number of passengers.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub name: String,
    pub origin: Airport,
    pub destination: Airport,
    pub distance_km: i32,
    pub passenger_count: u64,
}

impl Flight {
    /// Builds a flight from its row, the two airports it references and its
    /// enrollment count.
    pub fn from_entity(
        entity: entity::flight::Model,
        origin: Airport,
        destination: Airport,
        passenger_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            origin,
            destination,
            distance_km: entity.distance_km,
            passenger_count,
        }
    }

    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            name: self.name,
            origin: self.origin.into_dto(),
            destination: self.destination.into_dto(),
            distance_km: self.distance_km,
            passenger_count: self.passenger_count,
        }
    }
}

/// Unvalidated input for creating or replacing a flight.
///
/// `distance_km` is kept wide so out-of-range values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone)]
pub struct FlightParam {
    pub name: String,
    pub origin_id: i32,
    pub destination_id: i32,
    pub distance_km: i64,
}

impl FlightParam {
    pub fn from_dto(dto: FlightInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            origin_id: dto.origin_id,
            destination_id: dto.destination_id,
            distance_km: dto.distance_km,
        }
    }
}

/// Flight fields after validation, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFlightParam {
    pub name: String,
    pub origin_id: i32,
    pub destination_id: i32,
    pub distance_km: i32,
}
