//! Joining flights.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::PassengerProfileMode,
    data::{
        enrollment::EnrollmentRepository, flight::FlightRepository,
        passenger::PassengerRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        account::Account, enrollment::JoinOutcome, flight::Flight,
        passenger::CreatePassengerParam,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
    profile_mode: PassengerProfileMode,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, profile_mode: PassengerProfileMode) -> Self {
        Self { db, profile_mode }
    }

    /// Enrolls the caller's passenger profile on a flight.
    ///
    /// The outcome is decided by the insert itself: the `(flight_id, passenger_id)`
    /// primary key lets exactly one of any number of concurrent requests write the
    /// edge, and every other request observes `AlreadyJoined`.
    ///
    /// # Returns
    /// - `Ok(JoinOutcome::Joined)` - Edge written by this call
    /// - `Ok(JoinOutcome::AlreadyJoined)` - Edge already present, nothing changed
    /// - `Err(AppError::NotFound(_))` - No such flight
    /// - `Err(AppError::NoPassengerProfile)` - Caller has no passenger profile and
    ///   profiles are not created lazily
    pub async fn join(&self, account: &Account, flight_id: i32) -> Result<JoinOutcome, AppError> {
        let txn = self.db.begin().await?;

        if !FlightRepository::new(&txn).exists(flight_id).await? {
            return Err(AppError::NotFound(format!("Flight {} not found", flight_id)));
        }

        let passenger_repo = PassengerRepository::new(&txn);
        let passenger = match passenger_repo.find_by_user_id(account.id).await? {
            Some(passenger) => passenger,
            None if self.profile_mode == PassengerProfileMode::Lazy => {
                let Some(user) = UserRepository::new(&txn).find_by_id(account.id).await? else {
                    return Err(AuthError::UserNotInDatabase(account.id).into());
                };

                let passenger = passenger_repo
                    .get_or_create(CreatePassengerParam::for_user(&user))
                    .await?;
                tracing::info!(
                    "Created passenger {} for user {} on first join",
                    passenger.passport,
                    user.id
                );
                passenger
            }
            None => return Err(AppError::NoPassengerProfile),
        };

        let inserted = EnrollmentRepository::new(&txn)
            .insert_if_absent(flight_id, passenger.id)
            .await?;

        txn.commit().await?;

        if inserted {
            tracing::info!("Passenger {} joined flight {}", passenger.id, flight_id);
            Ok(JoinOutcome::Joined)
        } else {
            Ok(JoinOutcome::AlreadyJoined)
        }
    }

    /// Flights the caller's passenger profile is enrolled on.
    pub async fn my_flights(&self, account: &Account) -> Result<Vec<Flight>, AppError> {
        let Some(passenger) = PassengerRepository::new(self.db)
            .find_by_user_id(account.id)
            .await?
        else {
            return Err(AppError::NoPassengerProfile);
        };

        Ok(FlightRepository::new(self.db)
            .get_by_passenger(passenger.id)
            .await?)
    }
}
