use crate::{
    model::{Address, Club, Document, FormField, Membership, MembershipData, Place, User},
    Model, Result,
};

use clubhouse_core::Schema;

/// Every table, ordered so foreign keys point backwards.
pub fn schema() -> Result<Schema> {
    Schema::new(vec![
        Place::table(),
        Address::table(),
        Club::table(),
        User::table(),
        FormField::table(),
        Document::table(),
        Membership::table(),
        MembershipData::table(),
    ])
}
