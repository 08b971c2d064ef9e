use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 5;
const DEFAULT_REFRESH_TOKEN_TTL_HOURS: i64 = 24;

/// When a passenger profile is created for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassengerProfileMode {
    /// Profile is created with the account at registration.
    #[default]
    Eager,
    /// Profile is also created on first join when missing.
    Lazy,
}

impl FromStr for PassengerProfileMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(Self::Eager),
            "lazy" => Ok(Self::Lazy),
            other => Err(ConfigError::InvalidValue {
                name: "PASSENGER_PROFILE_MODE".to_string(),
                reason: format!("expected `eager` or `lazy`, got `{}`", other),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub access_token_ttl: chrono::Duration,
    pub refresh_token_ttl: chrono::Duration,

    pub passenger_profile_mode: PassengerProfileMode,

    /// Optional staff account created on startup when it does not exist yet.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let access_minutes = optional_parsed("ACCESS_TOKEN_TTL_MINUTES")?
            .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_MINUTES);
        let refresh_hours = optional_parsed("REFRESH_TOKEN_TTL_HOURS")?
            .unwrap_or(DEFAULT_REFRESH_TOKEN_TTL_HOURS);

        let passenger_profile_mode = match optional("PASSENGER_PROFILE_MODE") {
            Some(value) => value.parse()?,
            None => PassengerProfileMode::default(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl: chrono::Duration::minutes(access_minutes),
            refresh_token_ttl: chrono::Duration::hours(refresh_hours),
            passenger_profile_mode,
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn optional_parsed(name: &str) -> Result<Option<i64>, ConfigError> {
    let Some(value) = optional(name) else {
        return Ok(None);
    };

    match value.parse::<i64>() {
        Ok(parsed) if parsed > 0 => Ok(Some(parsed)),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("expected a positive integer, got `{}`", value),
        }),
    }
}
