use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, is_unique_violation},
    error::{validation::ValidationErrors, AppError},
    model::city::{City, CreateCityParam},
};

const MAX_NAME_LENGTH: usize = 100;
const NAME_TAKEN: &str = "city with this name already exists.";

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<City>, AppError> {
        Ok(CityRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, mut param: CreateCityParam) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);
        param.name = param.name.trim().to_string();

        if param.name.is_empty() {
            return Err(ValidationErrors::single("name", "This field may not be blank.").into());
        }
        if param.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationErrors::single(
                "name",
                format!("Ensure this field has no more than {} characters.", MAX_NAME_LENGTH),
            )
            .into());
        }
        if repo.name_exists(&param.name).await? {
            return Err(ValidationErrors::single("name", NAME_TAKEN).into());
        }

        repo.create(param).await.map_err(|e| {
            if is_unique_violation(&e) {
                ValidationErrors::single("name", NAME_TAKEN).into()
            } else {
                e.into()
            }
        })
    }

    /// Deletes a city together with its airports and their flights.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("City {} not found", id)));
        }

        tracing::info!("Deleted city {}", id);

        Ok(())
    }
}
