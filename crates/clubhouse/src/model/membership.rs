use super::{Club, Id, Model, User};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::ValueRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub id: Id<Membership>,
    pub club_id: Id<Club>,
    pub user_id: Id<User>,
}

impl Model for Membership {
    const TABLE: &'static str = "membership";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("club_id", Type::I64))
            .column(Column::new("user_id", Type::I64))
            .index(Index::unique("membership_club_user", ["club_id", "user_id"]))
            .index(Index::new("membership_user", ["user_id"]))
            .foreign_key(ForeignKey::new("club_id", Club::TABLE, OnDelete::Cascade))
            .foreign_key(ForeignKey::new("user_id", User::TABLE, OnDelete::Cascade))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(Membership {
            id: Id::load(row.take(0)?)?,
            club_id: Id::load(row.take(1)?)?,
            user_id: Id::load(row.take(2)?)?,
        })
    }
}
