use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::airport::AirportDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightDto {
    pub id: i32,
    pub name: String,
    pub origin: AirportDto,
    pub destination: AirportDto,
    pub distance_km: i32,
    pub passenger_count: u64,
}

/// Request body for both creating and replacing a flight.
///
/// `distance_km` is accepted as a signed 64-bit value so that negative or oversized
/// distances reach validation and are reported per field instead of failing to parse.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightInputDto {
    pub name: String,
    pub origin_id: i32,
    pub destination_id: i32,
    pub distance_km: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JoinStatusDto {
    Joined,
    AlreadyJoined,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JoinFlightDto {
    pub status: JoinStatusDto,
    pub message: String,
}
