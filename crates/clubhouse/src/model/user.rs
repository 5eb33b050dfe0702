use super::{Address, Id, Model};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::ValueRecord,
};

/// A person who can join clubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id<User>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address_id: Id<Address>,
}

impl Model for User {
    const TABLE: &'static str = "user";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("email", Type::String).max_len(254))
            .column(Column::new("first_name", Type::String).max_len(30))
            .column(Column::new("last_name", Type::String).max_len(150))
            .column(Column::new("address_id", Type::I64))
            .index(Index::unique("user_email", ["email"]))
            .index(Index::new("user_address", ["address_id"]))
            .foreign_key(ForeignKey::new(
                "address_id",
                Address::TABLE,
                OnDelete::Protect,
            ))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(User {
            id: Id::load(row.take(0)?)?,
            email: row.take(1)?.into_string()?,
            first_name: row.take(2)?.into_string()?,
            last_name: row.take(3)?.into_string()?,
            address_id: Id::load(row.take(4)?)?,
        })
    }
}
