#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: &'static str,

    /// The column storage type
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is the auto-incrementing primary key
    pub primary_key: bool,

    /// Upper bound on string length, enforced by the application before writes.
    pub max_len: Option<usize>,
}

/// Column storage types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Bool,
    I32,
    I64,
    String,
    Bytes,
}

impl Column {
    pub fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            primary_key: false,
            max_len: None,
        }
    }

    /// The `id` column every table uses as its primary key.
    pub fn id() -> Self {
        Self {
            primary_key: true,
            ..Self::new("id", Type::I64)
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}
