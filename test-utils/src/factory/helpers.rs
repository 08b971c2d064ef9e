//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a flight with all of its dependencies.
///
/// This is a convenience method that creates:
/// 1. City
/// 2. Origin airport in that city
/// 3. Destination airport in that city
/// 4. Flight between the two airports
///
/// # Returns
/// - `Ok((city, origin, destination, flight))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::city::Model,
        entity::airport::Model,
        entity::airport::Model,
        entity::flight::Model,
    ),
    DbErr,
> {
    let city = crate::factory::city::create_city(db).await?;
    let origin = crate::factory::airport::create_airport(db, city.id).await?;
    let destination = crate::factory::airport::create_airport(db, city.id).await?;
    let flight = crate::factory::flight::create_flight(db, origin.id, destination.id).await?;

    Ok((city, origin, destination, flight))
}

/// Creates a user together with its passenger profile.
///
/// # Returns
/// - `Ok((user, passenger))` - The created user and passenger entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_passenger(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::passenger::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let passenger = crate::factory::passenger::create_passenger(db, &user).await?;

    Ok((user, passenger))
}

/// Creates a member of the "Flight Managers" group, creating the group if needed.
///
/// # Returns
/// - `Ok(user)` - The created manager user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_manager(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    let group = match entity::prelude::Group::find()
        .filter(entity::group::Column::Name.eq("Flight Managers"))
        .one(db)
        .await?
    {
        Some(group) => group,
        None => crate::factory::group::create_group(db, "Flight Managers").await?,
    };

    let user = crate::factory::user::create_user(db).await?;
    crate::factory::group::add_user_to_group(db, user.id, group.id).await?;

    Ok(user)
}
