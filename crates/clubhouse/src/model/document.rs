use super::{Club, Id, Model};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::{Value, ValueRecord},
};

use std::path::Path;

/// Directory component of every stored document path.
pub const DOCUMENT_DIR: &str = "club_data";

/// A file uploaded for a club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: Id<Document>,
    pub club_id: Id<Club>,
    pub file_type: DocumentType,

    /// Storage path, `club_data/<file name>`
    pub path: String,
    pub payload: Vec<u8>,
}

/// Numeric tag saying what a [`Document`] is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentType(pub i32);

impl DocumentType {
    /// The blank membership-request form members download and sign.
    pub const MEMBERSHIP_REQUEST_FORM: DocumentType = DocumentType(1);
}

impl From<DocumentType> for Value {
    fn from(value: DocumentType) -> Self {
        Value::I32(value.0)
    }
}

impl Document {
    /// The base name of the stored file.
    pub fn filename(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Model for Document {
    const TABLE: &'static str = "document";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("club_id", Type::I64))
            .column(Column::new("file_type", Type::I32))
            .column(Column::new("path", Type::String).max_len(100))
            .column(Column::new("payload", Type::Bytes))
            .index(Index::new("document_club_type", ["club_id", "file_type"]))
            .foreign_key(ForeignKey::new("club_id", Club::TABLE, OnDelete::Cascade))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(Document {
            id: Id::load(row.take(0)?)?,
            club_id: Id::load(row.take(1)?)?,
            file_type: DocumentType(row.take(2)?.to_i32()?),
            path: row.take(3)?.into_string()?,
            payload: row.take(4)?.into_bytes()?,
        })
    }
}
