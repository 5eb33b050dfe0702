use super::Operation;
use crate::stmt::{Filter, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: &'static str,

    /// Rows to update
    pub filter: Filter,

    /// Column/value assignments
    pub assignments: Vec<(&'static str, Value)>,
}

impl Update {
    pub fn new(table: &'static str, filter: Filter) -> Self {
        Self {
            table,
            filter,
            assignments: vec![],
        }
    }

    pub fn set(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
