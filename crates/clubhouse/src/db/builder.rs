use super::{Connect, Db, Pool, PoolConfig, Shared};
use crate::{schema, Result};

use clubhouse_core::driver::Driver;

use std::{sync::Arc, time::Duration};

const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
pub struct Builder {
    pool: PoolConfig,

    /// Upper bound on a single `Db::transaction` call
    transaction_timeout: Option<Duration>,
}

impl Builder {
    pub fn pool(&mut self, config: PoolConfig) -> &mut Self {
        self.pool = config;
        self
    }

    pub fn transaction_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.transaction_timeout = Some(timeout);
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let schema = schema::schema()?;
        let pool = Pool::new(Box::new(driver), &self.pool).await?;

        Ok(Db::new(Shared {
            pool,
            schema: Arc::new(schema),
            transaction_timeout: self
                .transaction_timeout
                .unwrap_or(DEFAULT_TRANSACTION_TIMEOUT),
        }))
    }
}
