//! config/app_config.rs
//! Server configuration read from the environment (and `.env`, loaded by `main`).

use anyhow::{Context, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/contacts.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Connection string of the contact store.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// `None` keeps actix's default (one worker per CPU).
    pub workers: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let workers = match lookup("WORKERS") {
            Some(raw) => {
                let n = raw
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("WORKERS must be a positive integer, got '{}'", raw))?;
                anyhow::ensure!(n > 0, "WORKERS must be greater than zero");
                Some(n)
            }
            None => defaults.workers,
        };

        Ok(AppConfig {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            workers,
        })
    }
}
