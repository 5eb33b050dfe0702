use super::Operation;
use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: &'static str,

    /// Column/value pairs. Columns left out take their default (the primary
    /// key is always left out and assigned by the storage layer).
    pub values: Vec<(&'static str, Value)>,
}

impl Insert {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            values: vec![],
        }
    }

    pub fn value(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.values.push((column, value.into()));
        self
    }
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
