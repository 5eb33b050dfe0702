use super::Operation;
use crate::stmt::Filter;

/// `column = column + by` for every row matching `scope` with
/// `column >= from`, applied as one logical update.
///
/// The operation must never leave two rows of the same scope sharing a
/// value, not even transiently, because `column` is usually covered by a
/// unique index together with the scope columns. Backends that check unique
/// indexes row by row apply the rows furthest along the direction of travel
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub table: &'static str,

    /// Restricts the shift to one group of rows (e.g. one club)
    pub scope: Filter,

    /// The integer column being shifted
    pub column: &'static str,

    /// First value (inclusive) to move
    pub from: i64,

    /// Distance to move each row by
    pub by: i64,
}

impl Shift {
    pub fn up(table: &'static str, scope: Filter, column: &'static str, from: i64) -> Self {
        Self {
            table,
            scope,
            column,
            from,
            by: 1,
        }
    }
}

impl From<Shift> for Operation {
    fn from(value: Shift) -> Self {
        Self::Shift(value)
    }
}
