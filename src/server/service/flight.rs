use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, flight::FlightRepository, passenger::PassengerRepository},
    error::{validation::ValidationErrors, AppError},
    model::{
        flight::{Flight, FlightParam, ValidFlightParam},
        passenger::Passenger,
    },
};

const MAX_NAME_LENGTH: usize = 50;

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Flight>, AppError> {
        Ok(FlightRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Flight, AppError> {
        FlightRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| flight_not_found(id))
    }

    /// Creates a flight after validating its fields
    pub async fn create(&self, param: FlightParam) -> Result<Flight, AppError> {
        let valid = self.validate(param).await?;

        let flight = FlightRepository::new(self.db).create(valid).await?;

        tracing::info!("Created flight {} ({})", flight.id, flight.name);

        Ok(flight)
    }

    /// Replaces a flight's fields. Validation runs before the existence check so
    /// bad input is reported even for a missing flight.
    pub async fn update(&self, id: i32, param: FlightParam) -> Result<Flight, AppError> {
        let valid = self.validate(param).await?;

        FlightRepository::new(self.db)
            .update(id, valid)
            .await?
            .ok_or_else(|| flight_not_found(id))
    }

    /// Deletes a flight. Its enrollment edges are removed with it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FlightRepository::new(self.db).delete(id).await? {
            return Err(flight_not_found(id));
        }

        tracing::info!("Deleted flight {}", id);

        Ok(())
    }

    /// Passengers enrolled on a flight
    pub async fn passengers(&self, id: i32) -> Result<Vec<Passenger>, AppError> {
        if !FlightRepository::new(self.db).exists(id).await? {
            return Err(flight_not_found(id));
        }

        Ok(PassengerRepository::new(self.db).get_by_flight(id).await?)
    }

    async fn validate(&self, mut param: FlightParam) -> Result<ValidFlightParam, AppError> {
        let mut errors = ValidationErrors::new();
        param.name = param.name.trim().to_string();

        if param.name.is_empty() {
            errors.add("name", "This field may not be blank.");
        } else if param.name.chars().count() > MAX_NAME_LENGTH {
            errors.add(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    MAX_NAME_LENGTH
                ),
            );
        }

        let distance_km = match i32::try_from(param.distance_km) {
            Ok(distance) if distance >= 0 => distance,
            Ok(_) => {
                errors.add("distance_km", "Ensure this value is greater than or equal to 0.");
                0
            }
            Err(_) if param.distance_km < 0 => {
                errors.add("distance_km", "Ensure this value is greater than or equal to 0.");
                0
            }
            Err(_) => {
                errors.add(
                    "distance_km",
                    format!("Ensure this value is less than or equal to {}.", i32::MAX),
                );
                0
            }
        };

        let airports = AirportRepository::new(self.db);
        for (field, airport_id) in [
            ("origin_id", param.origin_id),
            ("destination_id", param.destination_id),
        ] {
            if !airports.exists(airport_id).await? {
                errors.add(
                    field,
                    format!(
                        "Invalid pk \"{}\" - object does not exist.",
                        airport_id
                    ),
                );
            }
        }

        errors.into_result()?;

        Ok(ValidFlightParam {
            name: param.name,
            origin_id: param.origin_id,
            destination_id: param.destination_id,
            distance_km,
        })
    }
}

fn flight_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Flight {} not found", id))
}
