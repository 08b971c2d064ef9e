//! Request authentication and session handling.

pub mod auth;
pub mod jwt_cookie;
pub mod session;

#[cfg(test)]
mod test;
