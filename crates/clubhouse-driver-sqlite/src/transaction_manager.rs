use clubhouse_core::driver::transaction::NestingTracker;
use std::borrow::Cow;

/// SQL generator for SQLite transactions.
///
/// The outermost transaction is opened with `BEGIN IMMEDIATE` so that a
/// read-then-write sequence (get-or-create) holds the write lock from its
/// first read. Nested transactions become savepoints.
#[derive(Debug)]
pub(crate) struct TransactionManager {
    inner: NestingTracker,
}

impl TransactionManager {
    pub fn new() -> Self {
        Self {
            inner: NestingTracker::new(),
        }
    }

    pub fn depth(&self) -> u32 {
        self.inner.depth()
    }

    /// Returns `BEGIN IMMEDIATE` or `SAVEPOINT sp_N`.
    pub fn start(&mut self) -> Cow<'static, str> {
        if self.inner.depth() == 0 {
            self.inner.begin();
            Cow::Borrowed("BEGIN IMMEDIATE")
        } else {
            self.inner.savepoint()
        }
    }

    pub fn commit(&mut self) -> clubhouse_core::Result<Cow<'static, str>> {
        self.inner
            .commit()
            .ok_or_else(|| clubhouse_core::err!("commit without an open transaction"))
    }

    pub fn rollback(&mut self) -> clubhouse_core::Result<Cow<'static, str>> {
        self.inner
            .rollback()
            .ok_or_else(|| clubhouse_core::err!("rollback without an open transaction"))
    }
}
