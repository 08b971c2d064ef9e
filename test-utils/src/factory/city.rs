//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a city named `"City {id}"`.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    create_city_with_name(db, format!("City {}", next_id())).await
}

/// Creates a city with the given name.
pub async fn create_city_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::city::Model, DbErr> {
    entity::city::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
