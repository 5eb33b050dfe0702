use super::Operation;
use crate::stmt::Filter;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub table: &'static str,

    /// Rows to delete
    pub filter: Filter,
}

impl Delete {
    pub fn new(table: &'static str, filter: Filter) -> Self {
        Self { table, filter }
    }
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
