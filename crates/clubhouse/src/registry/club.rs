use super::{get_or_insert, AddressRegistry, Created, PostalAddress};
use crate::{
    model::{Club, Id},
    validate, Db, Model, Result,
};

use clubhouse_core::{
    driver::operation::{Delete, Update},
    stmt::Filter,
    Error,
};

/// Clubs and the single address each of them owns.
///
/// Address cleanup on this path stops at the address: the place it lay in
/// is kept.
#[derive(Debug, Clone, Default)]
pub struct ClubRegistry {
    addresses: AddressRegistry,
}

impl ClubRegistry {
    pub fn new(addresses: AddressRegistry) -> Self {
        Self { addresses }
    }

    pub fn addresses(&self) -> &AddressRegistry {
        &self.addresses
    }

    /// Registers a new club at `address`, reusing a matching address row.
    pub async fn create(
        &self,
        db: &mut Db,
        clubname: &str,
        year_of_foundation: &str,
        address: &PostalAddress<'_>,
    ) -> Result<Club> {
        self.validate(db, clubname, year_of_foundation)?;

        db.transaction(async |db: &mut Db| {
            let address = self.addresses.get_or_create(db, address).await?.entity;

            let club: Club = db
                .insert(
                    Club::insert()
                        .value("clubname", clubname)
                        .value("year_of_foundation", year_of_foundation)
                        .value("address_id", address.id),
                )
                .await?;

            tracing::debug!(club.id = %club.id, clubname, "created club");
            Ok(club)
        })
        .await
    }

    /// Returns the club with this name, founding year and address, creating
    /// it when none exists.
    pub async fn get_or_create(
        &self,
        db: &mut Db,
        clubname: &str,
        year_of_foundation: &str,
        address: &PostalAddress<'_>,
    ) -> Result<Created<Club>> {
        self.validate(db, clubname, year_of_foundation)?;

        db.transaction(async |db: &mut Db| {
            let address = self.addresses.get_or_create(db, address).await?.entity;

            get_or_insert::<Club>(
                db,
                vec![
                    ("clubname", clubname.into()),
                    ("year_of_foundation", year_of_foundation.into()),
                    ("address_id", address.id.into()),
                ],
            )
            .await
        })
        .await
    }

    /// Overwrites the club's name, founding year and address.
    ///
    /// The reassignment is committed before the previous address is
    /// considered for deletion.
    pub async fn edit(
        &self,
        db: &mut Db,
        club: &Club,
        clubname: &str,
        year_of_foundation: &str,
        address: &PostalAddress<'_>,
    ) -> Result<Club> {
        self.validate(db, clubname, year_of_foundation)?;

        let (edited, previous) = db
            .transaction(async |db: &mut Db| {
                // The stored row, not the caller's copy, names the address
                // being left behind
                let stored = self.get(db, club.id).await?;
                let previous = self.addresses.get(db, stored.address_id).await?;

                let address = self.addresses.get_or_create(db, address).await?.entity;

                let updated = db
                    .update(
                        Update::new(Club::TABLE, Filter::new().eq("id", club.id))
                            .set("clubname", clubname)
                            .set("year_of_foundation", year_of_foundation)
                            .set("address_id", address.id),
                    )
                    .await?;

                if updated == 0 {
                    return Err(not_found(club.id));
                }

                Ok((self.get(db, club.id).await?, previous))
            })
            .await?;

        if edited.address_id != previous.id {
            self.addresses.delete_if_unused(db, &previous).await?;
        }

        Ok(edited)
    }

    /// Deletes the club with its form fields, documents and memberships,
    /// then its address if nothing else refers to it.
    pub async fn delete(&self, db: &mut Db, club: &Club) -> Result<()> {
        let address = db
            .transaction(async |db: &mut Db| {
                let stored = self.get(db, club.id).await?;
                let address = self.addresses.get(db, stored.address_id).await?;

                let deleted = db
                    .delete(Delete::new(Club::TABLE, Filter::new().eq("id", club.id)))
                    .await?;

                if deleted == 0 {
                    return Err(not_found(club.id));
                }

                Ok(address)
            })
            .await?;

        tracing::info!(club.id = %club.id, "deleted club");
        self.addresses.delete_if_unused(db, &address).await?;
        Ok(())
    }

    pub async fn get(&self, db: &mut Db, id: Id<Club>) -> Result<Club> {
        db.get(Club::query().filter_eq("id", id)).await
    }

    fn validate(&self, db: &Db, clubname: &str, year_of_foundation: &str) -> Result<()> {
        let table = db.schema().table(Club::TABLE)?;
        validate::required_text(table, "clubname", clubname)?;
        validate::required_text(table, "year_of_foundation", year_of_foundation)
    }
}

fn not_found(id: Id<Club>) -> Error {
    Error::record_not_found(format!("table=club key={{id: {id}}}"))
}
