//! `SeaORM` Entity, generated from the flightbook migrations

pub use super::airport::Entity as Airport;
pub use super::city::Entity as City;
pub use super::flight::Entity as Flight;
pub use super::flight_passenger::Entity as FlightPassenger;
pub use super::group::Entity as Group;
pub use super::passenger::Entity as Passenger;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
