//! Runtime settings read from the environment (and `.env`, loaded by the binary).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/plants";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    /// Schema holding the plants table. From `PLANTS_SCHEMA`, default `public`.
    pub schema: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Create the database and plants table on startup when missing.
    pub ensure_schema: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let schema = get("PLANTS_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_valid_identifier(&schema) {
            return Err(ConfigError::InvalidSchema(schema));
        }

        Ok(Settings {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            schema,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            ensure_schema: parse_bool_or("PLANTS_ENSURE_SCHEMA", get("PLANTS_ENSURE_SCHEMA"), true)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

fn parse_bool_or(key: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(v) = value else {
        return Ok(default);
    };
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: v }),
    }
}

/// Unquoted PostgreSQL identifier: letter or underscore, then letters, digits, underscores; at most 63 bytes.
fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
