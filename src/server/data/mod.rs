//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository borrows any `ConnectionTrait` implementor, so the same code runs
//! against the connection pool or inside a `DatabaseTransaction`.

pub mod airport;
pub mod city;
pub mod enrollment;
pub mod flight;
pub mod group;
pub mod passenger;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` was raised by a unique or primary key constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
