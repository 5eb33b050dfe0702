use super::{Address, Id, Model};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::ValueRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: Id<Club>,
    pub clubname: String,
    pub year_of_foundation: String,
    pub address_id: Id<Address>,
}

impl Model for Club {
    const TABLE: &'static str = "club";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("clubname", Type::String).max_len(30))
            .column(Column::new("year_of_foundation", Type::String).max_len(4))
            .column(Column::new("address_id", Type::I64))
            .index(Index::new("club_address", ["address_id"]))
            .foreign_key(ForeignKey::new(
                "address_id",
                Address::TABLE,
                OnDelete::Protect,
            ))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(Club {
            id: Id::load(row.take(0)?)?,
            clubname: row.take(1)?.into_string()?,
            year_of_foundation: row.take(2)?.into_string()?,
            address_id: Id::load(row.take(3)?)?,
        })
    }
}
