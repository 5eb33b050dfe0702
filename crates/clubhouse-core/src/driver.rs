mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

pub mod transaction;

use crate::{async_trait, schema::Schema, Result};

use std::{borrow::Cow, fmt::Debug, sync::Arc};

/// Opens connections to a storage backend.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL this driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;

    /// Upper bound on simultaneously open connections, if the backend needs one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single connection to the storage backend.
///
/// Implementations must enforce every unique index and foreign key declared
/// in the schema, reporting violations as `Error::unique_violation` and
/// `Error::referential_integrity`.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a storage operation
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response>;

    /// Creates tables and indices defined in the schema, skipping the ones
    /// that already exist.
    async fn push_schema(&mut self, schema: &Schema) -> Result<()>;
}
