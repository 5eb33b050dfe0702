use super::Operation;
use crate::stmt::{Filter, OrderBy, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Table to read from
    pub table: &'static str,

    /// Rows must match every condition
    pub filter: Filter,

    pub order_by: Option<OrderBy>,

    pub limit: Option<u64>,
}

impl Query {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filter: Filter::new(),
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter_eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.filter = self.filter.eq(column, value);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
