use super::{Id, Membership, Model};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::ValueRecord,
};

/// Custom form content submitted with a membership request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipData {
    pub id: Id<MembershipData>,
    pub membership_id: Id<Membership>,

    /// Serialized `serde_json::Value`
    pub json: String,
}

impl MembershipData {
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.json)?)
    }
}

impl Model for MembershipData {
    const TABLE: &'static str = "membership_data";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("membership_id", Type::I64))
            .column(Column::new("json", Type::String))
            .index(Index::unique(
                "membership_data_membership",
                ["membership_id"],
            ))
            .foreign_key(ForeignKey::new(
                "membership_id",
                Membership::TABLE,
                OnDelete::Protect,
            ))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(MembershipData {
            id: Id::load(row.take(0)?)?,
            membership_id: Id::load(row.take(1)?)?,
            json: row.take(2)?.into_string()?,
        })
    }
}
