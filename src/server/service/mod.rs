//! Business logic layer.
//!
//! Services orchestrate repositories, own transaction boundaries and turn data
//! layer failures into `AppError`s. Controllers call services after the
//! authorization guard has admitted the caller.

pub mod airport;
pub mod auth;
pub mod city;
pub mod enrollment;
pub mod flight;
pub mod passenger;
pub mod password;
pub mod policy;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
