use super::{Id, Model};
use crate::Result;

use clubhouse_core::{
    schema::{Column, Index, Table, Type},
    stmt::ValueRecord,
};

/// A postal location shared by every address in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: Id<Place>,
    pub postcode: i32,
    pub village: String,
}

impl Model for Place {
    const TABLE: &'static str = "place";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("postcode", Type::I32))
            .column(Column::new("village", Type::String).max_len(20))
            .index(Index::unique(
                "place_postcode_village",
                ["postcode", "village"],
            ))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(Place {
            id: Id::load(row.take(0)?)?,
            postcode: row.take(1)?.to_i32()?,
            village: row.take(2)?.into_string()?,
        })
    }
}
