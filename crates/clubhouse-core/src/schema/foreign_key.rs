/// A single-column foreign key pointing at another table's `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub target: &'static str,
    pub target_column: &'static str,
    pub on_delete: OnDelete,
}

/// What happens to referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Reject the delete while any row still references the target.
    Protect,

    /// Delete referencing rows along with the target.
    Cascade,
}

impl ForeignKey {
    pub fn new(column: &'static str, target: &'static str, on_delete: OnDelete) -> Self {
        Self {
            column,
            target,
            target_column: "id",
            on_delete,
        }
    }
}

impl OnDelete {
    /// `Protect` renders as `NO ACTION`: SQLite reports a `RESTRICT` hit as a
    /// trigger failure, while `NO ACTION` surfaces as a foreign key failure.
    pub fn as_sql(self) -> &'static str {
        match self {
            OnDelete::Protect => "NO ACTION",
            OnDelete::Cascade => "CASCADE",
        }
    }
}
