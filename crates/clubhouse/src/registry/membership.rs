use super::{get_or_insert, Created};
use crate::{
    model::{Club, Id, Membership, MembershipData, User},
    Db, Model, Result,
};

use clubhouse_core::stmt::OrderBy;

/// Which users belong to which clubs, and what they submitted when asking
/// to join.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipRegistry;

impl MembershipRegistry {
    pub async fn add_member(
        &self,
        db: &mut Db,
        club: Id<Club>,
        user: Id<User>,
    ) -> Result<Created<Membership>> {
        get_or_insert::<Membership>(db, vec![("club_id", club.into()), ("user_id", user.into())])
            .await
    }

    pub async fn is_member(&self, db: &mut Db, club: Id<Club>, user: Id<User>) -> Result<bool> {
        db.exists(
            Membership::query()
                .filter_eq("club_id", club)
                .filter_eq("user_id", user),
        )
        .await
    }

    pub async fn members(&self, db: &mut Db, club: Id<Club>) -> Result<Vec<Membership>> {
        db.all(
            Membership::query()
                .filter_eq("club_id", club)
                .order_by(OrderBy::asc("id")),
        )
        .await
    }

    /// Saves the custom form content submitted with a membership request.
    ///
    /// Saving the same content twice returns the stored row. A membership
    /// holds one saved content row; different content for a membership that
    /// already has some fails with a unique violation.
    pub async fn save_request_data(
        &self,
        db: &mut Db,
        membership: &Membership,
        json: &serde_json::Value,
    ) -> Result<Created<MembershipData>> {
        let json = serde_json::to_string(json)?;

        get_or_insert::<MembershipData>(
            db,
            vec![
                ("membership_id", membership.id.into()),
                ("json", json.into()),
            ],
        )
        .await
    }

    pub async fn request_data(
        &self,
        db: &mut Db,
        membership: &Membership,
    ) -> Result<Option<MembershipData>> {
        db.first(MembershipData::query().filter_eq("membership_id", membership.id))
            .await
    }
}
