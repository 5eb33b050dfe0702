use crate::Result;

use clubhouse_core::{schema::Table, Error};

/// Rejects an empty `value` or one longer than the column allows.
pub(crate) fn required_text(table: &Table, column: &'static str, value: &str) -> Result<()> {
    let len = value.chars().count();
    let max = max_len(table, column);

    if len == 0 {
        return Err(Error::validation_length(column, len, Some(1), max));
    }

    check_max(column, len, max)
}

/// Like [`required_text`], but the empty string is allowed.
pub(crate) fn text(table: &Table, column: &'static str, value: &str) -> Result<()> {
    check_max(column, value.chars().count(), max_len(table, column))
}

pub(crate) fn range(field: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::validation_range(field, value, min, max))
    }
}

fn max_len(table: &Table, column: &str) -> Option<usize> {
    table.column_by_name(column).and_then(|column| column.max_len)
}

fn check_max(column: &'static str, len: usize, max: Option<usize>) -> Result<()> {
    match max {
        Some(max) if len > max => Err(Error::validation_length(column, len, None, Some(max))),
        _ => Ok(()),
    }
}
