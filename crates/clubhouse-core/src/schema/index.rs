#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name, unique within the database.
    pub name: &'static str,

    /// Indexed columns, in key order.
    pub columns: Vec<&'static str>,

    /// When true, the storage layer rejects a second row with the same key.
    pub unique: bool,
}

impl Index {
    pub fn new<const N: usize>(name: &'static str, columns: [&'static str; N]) -> Self {
        Self {
            name,
            columns: columns.to_vec(),
            unique: false,
        }
    }

    pub fn unique<const N: usize>(name: &'static str, columns: [&'static str; N]) -> Self {
        Self {
            unique: true,
            ..Self::new(name, columns)
        }
    }
}
