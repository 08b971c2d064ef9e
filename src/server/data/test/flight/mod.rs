use crate::server::{data::flight::FlightRepository, model::flight::ValidFlightParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;
