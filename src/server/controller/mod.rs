//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into
//! parameter models, call a service and convert the result back into a DTO.

pub mod airport;
pub mod auth;
pub mod city;
pub mod flight;
pub mod passenger;
pub mod user;

#[cfg(test)]
mod test;
