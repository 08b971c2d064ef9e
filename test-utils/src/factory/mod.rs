//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take explicit foreign keys; the `helpers`
//! module wires whole dependency chains together.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let city = factory::city::create_city(&db).await?;
//!
//!     // Create a flight with its airports and city
//!     let (city, origin, destination, flight) =
//!         factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let manager = factory::user::UserFactory::new(&db)
//!     .username("bob")
//!     .staff(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `group` - Create groups and group memberships
//! - `city` - Create city entities
//! - `airport` - Create airport entities
//! - `flight` - Create flight entities
//! - `passenger` - Create passenger entities and enrollment rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod airport;
pub mod city;
pub mod flight;
pub mod group;
pub mod helpers;
pub mod passenger;
pub mod user;

pub use airport::create_airport;
pub use city::create_city;
pub use flight::create_flight;
pub use group::{add_user_to_group, create_group};
pub use passenger::{create_enrollment, create_passenger};
pub use user::create_user;
