//! Group factory for creating groups and memberships.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a group with the given name.
pub async fn create_group(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::group::Model, DbErr> {
    entity::group::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a user to a group.
pub async fn add_user_to_group(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::user_group::Model, DbErr> {
    entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}
