use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account row.
    ///
    /// Fails with a unique constraint violation when the username is taken.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            email: ActiveValue::Set(param.email),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            is_staff: ActiveValue::Set(param.is_staff),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds a user by username together with the stored password hash.
    pub async fn find_credentials(&self, username: &str) -> Result<Option<(User, String)>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(user.map(|user| {
            let hash = user.password_hash.clone();
            (User::from_entity(user), hash)
        }))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
