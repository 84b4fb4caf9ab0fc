// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_PATH: &str = "property_finder.sqlite3";
pub const DEFAULT_LISTINGS_SOURCE: &str = "data/listings.json";
pub const DEFAULT_CONTACT_DELAY_MS: u64 = 500;
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    /// Local path or http(s) URL of the listings JSON.
    pub listings_source: String,
    pub contact_delay: Duration,
    pub max_workers: usize,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable lookup. Unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let delay_ms: u64 = parse_var(
            &lookup,
            "CONTACT_DELAY_MS",
            &DEFAULT_CONTACT_DELAY_MS.to_string(),
        )?;
        let max_workers: usize =
            parse_var(&lookup, "MAX_WORKERS", &DEFAULT_MAX_WORKERS.to_string())?;

        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_WORKERS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            bind_addr,
            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            listings_source: lookup("LISTINGS_SOURCE")
                .unwrap_or_else(|| DEFAULT_LISTINGS_SOURCE.to_string()),
            contact_delay: Duration::from_millis(delay_ms),
            max_workers,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: raw.clone(),
        reason: e.to_string(),
    })
}
