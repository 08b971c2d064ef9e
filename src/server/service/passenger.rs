use sea_orm::DatabaseConnection;

use crate::server::{
    data::passenger::PassengerRepository,
    error::{validation::ValidationErrors, AppError},
    model::passenger::{Passenger, UpdatePassengerParam},
};

const MAX_NAME_LENGTH: usize = 100;
const MAX_PHONE_LENGTH: usize = 15;

pub struct PassengerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PassengerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Passenger>, AppError> {
        Ok(PassengerRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Passenger, AppError> {
        PassengerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| passenger_not_found(id))
    }

    /// Updates name and phone. The passport number cannot be changed.
    pub async fn update(&self, id: i32, mut param: UpdatePassengerParam) -> Result<Passenger, AppError> {
        let mut errors = ValidationErrors::new();
        param.name = param.name.trim().to_string();
        param.phone = param.phone.trim().to_string();

        if param.name.is_empty() {
            errors.add("name", "This field may not be blank.");
        } else if param.name.chars().count() > MAX_NAME_LENGTH {
            errors.add(
                "name",
                format!("Ensure this field has no more than {} characters.", MAX_NAME_LENGTH),
            );
        }
        if param.phone.chars().count() > MAX_PHONE_LENGTH {
            errors.add(
                "phone",
                format!("Ensure this field has no more than {} characters.", MAX_PHONE_LENGTH),
            );
        }

        errors.into_result()?;

        PassengerRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| passenger_not_found(id))
    }

    /// Deletes a passenger profile and its enrollments. The account is kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PassengerRepository::new(self.db).delete(id).await? {
            return Err(passenger_not_found(id));
        }

        Ok(())
    }
}

fn passenger_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Passenger {} not found", id))
}
