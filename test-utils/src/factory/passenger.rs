//! Passenger factory for creating passenger profiles and enrollment rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a passenger profile for the given user.
///
/// Mirrors the provisioning defaults: name is the user's username and passport is
/// `P-{user_id:06}`.
pub async fn create_passenger(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<entity::passenger::Model, DbErr> {
    entity::passenger::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        name: ActiveValue::Set(user.username.clone()),
        passport: ActiveValue::Set(format!("P-{:06}", user.id)),
        phone: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Enrolls a passenger onto a flight.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    flight_id: i32,
    passenger_id: i32,
) -> Result<entity::flight_passenger::Model, DbErr> {
    entity::flight_passenger::ActiveModel {
        flight_id: ActiveValue::Set(flight_id),
        passenger_id: ActiveValue::Set(passenger_id),
    }
    .insert(db)
    .await
}
