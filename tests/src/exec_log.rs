use crate::logging_driver::DriverOp;

use clubhouse::{
    driver::{Operation, Response},
    Result,
};

use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Number of inserts into `table`, including rejected ones.
    pub fn inserts_into(&self, table: &str) -> usize {
        self.count(|op| matches!(op, Operation::Insert(insert) if insert.table == table))
    }

    pub fn has_shift(&self) -> bool {
        self.count(|op| matches!(op, Operation::Shift(_))) > 0
    }

    /// Operations the storage layer rejected with a unique violation.
    pub fn unique_violations(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| matches!(&op.response, Err(err) if err.is_unique_violation()))
            .count()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&mut self) -> Option<(Operation, Result<Response>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }

    /// All logged operations, oldest first
    pub fn operations(&self) -> Vec<Operation> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.operation.clone())
            .collect()
    }
}
