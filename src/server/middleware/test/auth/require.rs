use super::*;

mod require_authenticated;
mod require_flight_manager;
mod require_staff;
