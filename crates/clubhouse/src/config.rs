//! Connection settings, loaded from the environment or a JSON document.

use crate::{db::PoolConfig, Result};

use clubhouse_core::err;
use serde::Deserialize;

use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

const DEFAULT_TRANSACTION_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the data lives, e.g. `sqlite::memory:` or `sqlite:///var/lib/clubhouse.db`
    pub database_url: String,

    pub pool: PoolSettings,

    pub transaction_timeout_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolSettings {
    /// Defaults to twice the number of logical cores
    pub max_size: Option<usize>,

    /// How long to wait for a free connection before failing
    pub wait_timeout_ms: Option<u64>,
}

impl Config {
    /// Reads `CLUBHOUSE_DATABASE_URL`, `CLUBHOUSE_POOL_MAX_SIZE`,
    /// `CLUBHOUSE_POOL_WAIT_TIMEOUT_MS` and `CLUBHOUSE_TRANSACTION_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(url) = lookup("CLUBHOUSE_DATABASE_URL") {
            config.database_url = url;
        }

        if let Some(max_size) = parse(&lookup, "CLUBHOUSE_POOL_MAX_SIZE")? {
            config.pool.max_size = Some(max_size);
        }

        if let Some(wait) = parse(&lookup, "CLUBHOUSE_POOL_WAIT_TIMEOUT_MS")? {
            config.pool.wait_timeout_ms = Some(wait);
        }

        if let Some(timeout) = parse(&lookup, "CLUBHOUSE_TRANSACTION_TIMEOUT_MS")? {
            config.transaction_timeout_ms = timeout;
        }

        Ok(config)
    }

    pub fn pool_config(&self) -> PoolConfig {
        let mut config = PoolConfig::new();

        if let Some(max_size) = self.pool.max_size {
            config.max_size = max_size;
        }

        config.timeouts.wait = self.pool.wait_timeout_ms.map(Duration::from_millis);
        config
    }

    pub fn transaction_timeout(&self) -> Duration {
        Duration::from_millis(self.transaction_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            pool: PoolSettings::default(),
            transaction_timeout_ms: DEFAULT_TRANSACTION_TIMEOUT_MS,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| err!("invalid value for {key}: {e}; value={raw:?}"))
}
