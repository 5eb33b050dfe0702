use super::{Id, Model, Place};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::ValueRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Id<Address>,
    pub street_address: String,
    pub house_number: String,
    pub place_id: Id<Place>,
}

impl Model for Address {
    const TABLE: &'static str = "address";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("street_address", Type::String).max_len(20))
            .column(Column::new("house_number", Type::String).max_len(5))
            .column(Column::new("place_id", Type::I64))
            // Lookup only: `AddressRegistry::create` may store the same tuple twice
            .index(Index::new(
                "address_place_street_house",
                ["place_id", "street_address", "house_number"],
            ))
            .foreign_key(ForeignKey::new("place_id", Place::TABLE, OnDelete::Protect))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(Address {
            id: Id::load(row.take(0)?)?,
            street_address: row.take(1)?.into_string()?,
            house_number: row.take(2)?.into_string()?,
            place_id: Id::load(row.take(3)?)?,
        })
    }
}
