use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::city::CityDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirportDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub city: CityDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAirportDto {
    pub name: String,
    pub code: String,
    pub city_id: i32,
}
