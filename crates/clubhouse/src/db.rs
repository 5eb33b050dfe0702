mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod pool;
pub use pool::{Pool, PoolConfig, PoolConnection, Timeouts};

mod transaction;

use crate::{Config, Model, Result};

use clubhouse_core::{
    driver::{
        operation::{Delete, Insert, Operation, Query, Shift, Transaction as TransactionOp, Update},
        Response,
    },
    Error, Schema,
};

use std::{sync::Arc, time::Duration};

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) pool: Pool,
    pub(crate) schema: Arc<Schema>,
    pub(crate) transaction_timeout: Duration,
}

/// A database handle. Each instance owns (or will lazily acquire) a dedicated
/// connection from the pool. Cloning produces a new handle that will acquire its
/// own connection on first use.
pub struct Db {
    shared: Arc<Shared>,
    conn: Option<PoolConnection>,

    /// Open transactions and savepoints on `conn`
    depth: u32,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects using `config` and creates any missing tables.
    pub async fn connect(config: &Config) -> Result<Db> {
        let mut db = Db::builder()
            .pool(config.pool_config())
            .transaction_timeout(config.transaction_timeout())
            .connect(&config.database_url)
            .await?;

        db.push_schema().await?;
        Ok(db)
    }

    pub(crate) fn new(shared: Shared) -> Db {
        Db {
            shared: Arc::new(shared),
            conn: None,
            depth: 0,
        }
    }

    /// Lazily acquire a connection from the pool.
    async fn connection(&mut self) -> Result<&mut PoolConnection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => self.shared.pool.get().await?,
        };
        Ok(self.conn.insert(conn))
    }

    /// Execute a raw operation on this handle's connection.
    pub async fn exec(&mut self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        let transaction = match &op {
            Operation::Transaction(op) => Some(*op),
            _ => None,
        };

        let schema = self.shared.schema.clone();
        let conn = self.connection().await?;
        let res = conn.exec(&schema, op).await;

        // The driver closes the innermost level even when COMMIT or ROLLBACK fails
        match transaction {
            Some(TransactionOp::Start) if res.is_ok() => self.depth += 1,
            Some(TransactionOp::Commit | TransactionOp::Rollback) => {
                self.depth = self.depth.saturating_sub(1)
            }
            _ => {}
        }

        res
    }

    /// Execute a query, returning all matching records
    pub async fn all<M: Model>(&mut self, query: Query) -> Result<Vec<M>> {
        self.exec(query)
            .await?
            .into_values()?
            .into_iter()
            .map(M::load)
            .collect()
    }

    pub async fn first<M: Model>(&mut self, query: Query) -> Result<Option<M>> {
        let records = self.exec(query.limit(1)).await?.into_values()?;
        records.into_iter().next().map(M::load).transpose()
    }

    pub async fn get<M: Model>(&mut self, query: Query) -> Result<M> {
        let table = query.table;
        match self.first(query).await? {
            Some(record) => Ok(record),
            None => Err(Error::record_not_found(format!(
                "table={table}; query returned no results"
            ))),
        }
    }

    /// Returns `true` if at least one row matches.
    pub async fn exists(&mut self, query: Query) -> Result<bool> {
        let records = self.exec(query.limit(1)).await?.into_values()?;
        Ok(!records.is_empty())
    }

    /// Inserts one row and loads it back as `M`.
    pub async fn insert<M: Model>(&mut self, insert: Insert) -> Result<M> {
        let mut records = self.exec(insert).await?.into_values()?.into_iter();
        match (records.next(), records.next()) {
            (Some(record), None) => M::load(record),
            (None, _) => Err(Error::record_not_found(format!(
                "table={}; insert returned no row",
                M::TABLE
            ))),
            (Some(_), Some(_)) => Err(Error::too_many_records(format!(
                "table={}; insert returned more than one row",
                M::TABLE
            ))),
        }
    }

    /// Returns the number of updated rows.
    pub async fn update(&mut self, update: Update) -> Result<u64> {
        self.exec(update).await?.into_count()
    }

    /// Returns the number of deleted rows.
    pub async fn delete(&mut self, delete: Delete) -> Result<u64> {
        self.exec(delete).await?.into_count()
    }

    /// Returns the number of moved rows.
    pub async fn shift(&mut self, shift: Shift) -> Result<u64> {
        self.exec(shift).await?.into_count()
    }

    /// Creates tables and indices defined in the schema on the database.
    pub async fn push_schema(&mut self) -> Result<()> {
        let schema = self.shared.schema.clone();
        let conn = self.connection().await?;
        conn.push_schema(&schema).await
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }
}

impl Clone for Db {
    fn clone(&self) -> Self {
        Db {
            shared: self.shared.clone(),
            conn: None,
            depth: 0,
        }
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("schema", &self.shared.schema)
            .field("connected", &self.conn.is_some())
            .field("depth", &self.depth)
            .finish()
    }
}
