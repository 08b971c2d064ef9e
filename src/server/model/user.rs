//! User domain models and parameters.
//!
//! Provides the account record used for authentication and the parameter type
//! consumed by registration.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::{model::account::Account, service::policy},
};

/// Login identity with profile fields.
///
/// The password hash never leaves the data layer; it is only compared inside
/// the authentication service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_staff: entity.is_staff,
            created_at: entity.created_at,
        }
    }

    /// "first last" trimmed, or the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();

        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Converts the user to a DTO, including the group names resolved for `account`.
    ///
    /// # Arguments
    /// - `account` - The account built from this user, used for group names and the
    ///   flight manager flag
    pub fn into_dto(self, account: &Account) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            groups: account.groups.iter().cloned().collect(),
            is_flight_manager: policy::is_manager_or_admin(Some(account)),
            is_staff: self.is_staff,
        }
    }
}

/// Parameters for creating a new account through registration.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterUserParam {
    /// Converts the registration DTO, trimming the username and defaulting absent
    /// optional fields to empty strings.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
            email: dto.email.unwrap_or_default().trim().to_string(),
            first_name: dto.first_name.unwrap_or_default().trim().to_string(),
            last_name: dto.last_name.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Fields written when inserting an account row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}
