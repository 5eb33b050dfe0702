mod address;
pub use address::Address;

mod club;
pub use club::Club;

mod document;
pub use document::{Document, DocumentType, DOCUMENT_DIR};

mod form_field;
pub use form_field::{FieldType, FormField};

mod id;
pub use id::Id;

mod membership;
pub use membership::Membership;

mod membership_data;
pub use membership_data::MembershipData;

mod place;
pub use place::Place;

mod user;
pub use user::User;

use crate::Result;

use clubhouse_core::{
    driver::operation::{Insert, Query},
    schema::Table,
    stmt::ValueRecord,
};

pub trait Model: Sized {
    /// Name of the table rows of this model are stored in
    const TABLE: &'static str;

    /// Table definition, columns in the order `load` reads them.
    fn table() -> Table;

    /// Load an instance of the model, populating fields using the given row.
    fn load(row: ValueRecord) -> Result<Self>;

    fn query() -> Query {
        Query::new(Self::TABLE)
    }

    fn insert() -> Insert {
        Insert::new(Self::TABLE)
    }
}
