//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod account;
pub mod airport;
pub mod city;
pub mod enrollment;
pub mod flight;
pub mod passenger;
pub mod user;
