use clubhouse_core::{
    async_trait,
    driver::{Connection, Driver, Operation, Response},
    Result, Schema,
};

use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Answers the next few queries against a table with no rows, the way a
/// request sees the table just before a concurrent request commits its
/// insert. Everything else reaches the wrapped driver unchanged.
#[derive(Debug)]
pub struct StaleReadDriver {
    inner: Box<dyn Driver>,
    reads: StaleReads,
}

/// Shared control handle for a [`StaleReadDriver`].
#[derive(Debug, Clone, Default)]
pub struct StaleReads {
    pending: Arc<Mutex<HashMap<&'static str, usize>>>,
}

impl StaleReadDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            reads: StaleReads::default(),
        }
    }

    pub fn handle(&self) -> StaleReads {
        self.reads.clone()
    }
}

impl StaleReads {
    /// Hide every row of `table` from its next `count` queries.
    pub fn hide_next(&self, table: &'static str, count: usize) {
        *self.pending.lock().unwrap().entry(table).or_default() += count;
    }

    /// Hidden queries not yet consumed.
    pub fn remaining(&self, table: &'static str) -> usize {
        self.pending.lock().unwrap().get(table).copied().unwrap_or(0)
    }

    fn take(&self, table: &'static str) -> bool {
        let mut pending = self.pending.lock().unwrap();
        match pending.get_mut(table) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl Driver for StaleReadDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(StaleReadConnection {
            inner: self.inner.connect().await?,
            reads: self.reads.clone(),
        }))
    }

    fn max_connections(&self) -> Option<usize> {
        self.inner.max_connections()
    }
}

#[derive(Debug)]
struct StaleReadConnection {
    inner: Box<dyn Connection>,
    reads: StaleReads,
}

#[async_trait]
impl Connection for StaleReadConnection {
    async fn exec(&mut self, schema: &Arc<Schema>, operation: Operation) -> Result<Response> {
        if let Operation::Query(query) = &operation {
            if self.reads.take(query.table) {
                return Ok(Response::values(vec![]));
            }
        }

        self.inner.exec(schema, operation).await
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        self.inner.push_schema(schema).await
    }
}
