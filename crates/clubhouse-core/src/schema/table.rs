use super::{Column, ForeignKey, Index};
use crate::Result;

/// A database table
#[derive(Debug, Clone)]
pub struct Table {
    /// Name of the table
    pub name: &'static str,

    /// The table's columns, in storage order. Rows returned by drivers use
    /// the same order.
    pub columns: Vec<Column>,

    pub indices: Vec<Index>,

    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            columns: vec![],
            indices: vec![],
            foreign_keys: vec![],
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: Index) -> Self {
        self.indices.push(index);
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn primary_key_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.primary_key)
    }

    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }

    /// Finds a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub(super) fn resolve(&self, name: &str) -> Result<&Column> {
        self.column_by_name(name)
            .ok_or_else(|| err!("column `{}.{}` does not exist", self.name, name))
    }
}
