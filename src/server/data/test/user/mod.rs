use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials;

fn param(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        is_staff: false,
    }
}
