//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models are converted
//! into DTOs at the controller boundary.

pub mod airport;
pub mod api;
pub mod auth;
pub mod city;
pub mod flight;
pub mod passenger;
pub mod user;
