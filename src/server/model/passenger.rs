//! Passenger domain models and parameters.

use crate::{
    model::passenger::{PassengerDto, UpdatePassengerDto},
    server::model::user::User,
};

/// Travel profile linked one-to-one with an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: i32,
    pub user_id: i32,
    /// Username of the owning account.
    pub username: String,
    pub name: String,
    pub passport: String,
    pub phone: String,
}

impl Passenger {
    pub fn from_entity(entity: entity::passenger::Model, user: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: user.username.clone(),
            name: entity.name,
            passport: entity.passport,
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> PassengerDto {
        PassengerDto {
            id: self.id,
            user: self.username,
            name: self.name,
            passport: self.passport,
            phone: self.phone,
        }
    }
}

/// Passport number assigned to the passenger created for account `user_id`.
pub fn passport_for(user_id: i32) -> String {
    format!("P-{:06}", user_id)
}

/// Fields written when creating a passenger profile.
#[derive(Debug, Clone)]
pub struct CreatePassengerParam {
    pub user_id: i32,
    pub name: String,
    pub passport: String,
    pub phone: String,
}

impl CreatePassengerParam {
    /// The profile provisioned for a new account: display name, derived passport,
    /// no phone.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.display_name(),
            passport: passport_for(user.id),
            phone: String::new(),
        }
    }
}

/// Editable passenger fields. The passport is assigned once and never updated.
#[derive(Debug, Clone)]
pub struct UpdatePassengerParam {
    pub name: String,
    pub phone: String,
}

impl UpdatePassengerParam {
    pub fn from_dto(dto: UpdatePassengerDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passport_is_zero_padded_to_six_digits() {
        assert_eq!(passport_for(1), "P-000001");
        assert_eq!(passport_for(42), "P-000042");
        assert_eq!(passport_for(123456), "P-123456");
        assert_eq!(passport_for(1234567), "P-1234567");
    }
}
