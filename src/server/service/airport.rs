use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, city::CityRepository, is_unique_violation},
    error::{validation::ValidationErrors, AppError},
    model::airport::{Airport, CreateAirportParam},
};

const MAX_NAME_LENGTH: usize = 100;
const MAX_CODE_LENGTH: usize = 10;
const CODE_TAKEN: &str = "airport with this code already exists.";

pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Airport>, AppError> {
        Ok(AirportRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, mut param: CreateAirportParam) -> Result<Airport, AppError> {
        let repo = AirportRepository::new(self.db);
        let mut errors = ValidationErrors::new();
        param.name = param.name.trim().to_string();
        param.code = param.code.trim().to_ascii_uppercase();

        if param.name.is_empty() {
            errors.add("name", "This field may not be blank.");
        } else if param.name.chars().count() > MAX_NAME_LENGTH {
            errors.add(
                "name",
                format!("Ensure this field has no more than {} characters.", MAX_NAME_LENGTH),
            );
        }

        if param.code.is_empty() {
            errors.add("code", "This field may not be blank.");
        } else if param.code.chars().count() > MAX_CODE_LENGTH {
            errors.add(
                "code",
                format!("Ensure this field has no more than {} characters.", MAX_CODE_LENGTH),
            );
        } else if repo.code_exists(&param.code).await? {
            errors.add("code", CODE_TAKEN);
        }

        if CityRepository::new(self.db)
            .find_by_id(param.city_id)
            .await?
            .is_none()
        {
            errors.add(
                "city_id",
                format!("Invalid pk \"{}\" - object does not exist.", param.city_id),
            );
        }

        errors.into_result()?;

        repo.create(param).await.map_err(|e| {
            if is_unique_violation(&e) {
                ValidationErrors::single("code", CODE_TAKEN).into()
            } else {
                e.into()
            }
        })
    }

    /// Deletes an airport together with every flight that uses it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AirportRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Airport {} not found", id)));
        }

        tracing::info!("Deleted airport {}", id);

        Ok(())
    }
}
