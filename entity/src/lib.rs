//! `SeaORM` Entity, generated from the flightbook migrations

pub mod prelude;

pub mod airport;
pub mod city;
pub mod flight;
pub mod flight_passenger;
pub mod group;
pub mod passenger;
pub mod user;
pub mod user_group;
