use crate::model::city::{CityDto, CreateCityDto};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
}

impl City {
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCityParam {
    pub name: String,
}

impl CreateCityParam {
    pub fn from_dto(dto: CreateCityDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}
