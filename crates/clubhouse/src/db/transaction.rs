use std::time::Duration;

use clubhouse_core::{driver::operation::Transaction as TransactionOp, Error};
use tokio::time::timeout;

use crate::{Db, Result};

impl Db {
    /// Runs `f` inside a transaction on this handle's connection.
    ///
    /// Commits when `f` returns `Ok` and rolls back otherwise. Calling
    /// `transaction` from inside `f` nests through savepoints.
    pub async fn transaction<O>(&mut self, f: impl AsyncFnOnce(&mut Db) -> Result<O>) -> Result<O> {
        let duration = self.shared.transaction_timeout;
        self.transaction_with_timeout(duration, f).await
    }

    pub async fn transaction_with_timeout<O>(
        &mut self,
        duration: Duration,
        f: impl AsyncFnOnce(&mut Db) -> Result<O>,
    ) -> Result<O> {
        self.exec(TransactionOp::Start).await?;
        let level = self.depth;

        let outcome = timeout(duration, f(&mut *self)).await;

        // A timeout drops `f` together with any nested transaction it had
        // open, so everything from `level` up is rolled back.
        let Ok(res) = outcome else {
            self.unwind(level).await?;
            return Err(Error::transaction_timed_out(duration));
        };

        match res {
            Ok(res) => {
                // Savepoints `f` opened and abandoned without finishing
                self.unwind(level + 1).await?;
                self.exec(TransactionOp::Commit).await?;
                Ok(res)
            }
            Err(err) => {
                if let Err(rollback) = self.unwind(level).await {
                    tracing::warn!(%err, %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Rolls back every transaction level at or above `level`.
    async fn unwind(&mut self, level: u32) -> Result<()> {
        while self.depth >= level && self.depth > 0 {
            self.exec(TransactionOp::Rollback).await?;
        }
        Ok(())
    }
}
