use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::city::{City, CreateCityParam};

pub struct CityRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCityParam) -> Result<City, DbErr> {
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(City::from_entity(city))
    }

    pub async fn get_all(&self) -> Result<Vec<City>, DbErr> {
        let cities = entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?;

        Ok(cities.into_iter().map(City::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let city = entity::prelude::City::find_by_id(id).one(self.db).await?;

        Ok(city.map(City::from_entity))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::City::find()
            .filter(entity::city::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a city; its airports and their flights go with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::City::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
