use crate::server::{
    error::{auth::AuthError, AppError},
    model::{account::Account, user::RegisterUserParam},
    service::user::UserService,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod flight;

/// Loads the policy account for a user row created by a factory.
async fn account_for(db: &DatabaseConnection, user: &entity::user::Model) -> Account {
    UserService::new(db)
        .get_account(user.id)
        .await
        .unwrap()
        .unwrap()
        .1
}

fn register_param(username: &str) -> RegisterUserParam {
    RegisterUserParam {
        username: username.to_string(),
        password: "glide-path-Orbit-77".to_string(),
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
    }
}
