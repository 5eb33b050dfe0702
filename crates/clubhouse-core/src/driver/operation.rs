mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod query;
pub use query::Query;

mod shift;
pub use shift::Shift;

mod transaction;
pub use transaction::Transaction;

mod update;
pub use update::Update;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create a new record, returning the stored row.
    Insert(Insert),

    /// Read rows matching a filter.
    Query(Query),

    /// Assign new values to every row matching a filter.
    Update(Update),

    /// Delete every row matching a filter.
    Delete(Delete),

    /// Move a range of rows along an integer column.
    Shift(Shift),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),
}

impl Operation {
    /// The table the operation targets, if any.
    pub fn table(&self) -> Option<&'static str> {
        match self {
            Operation::Insert(op) => Some(op.table),
            Operation::Query(op) => Some(op.table),
            Operation::Update(op) => Some(op.table),
            Operation::Delete(op) => Some(op.table),
            Operation::Shift(op) => Some(op.table),
            Operation::Transaction(_) => None,
        }
    }
}
