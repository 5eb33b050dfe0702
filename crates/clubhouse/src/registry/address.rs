use super::{get_or_insert, Created, PlaceRegistry};
use crate::{
    model::{Address, Club, Id, User},
    validate, Db, Model, Result,
};

use clubhouse_core::{driver::operation::Delete, stmt::Filter};

/// The street address fields callers submit when registering a club or a
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalAddress<'a> {
    pub street_address: &'a str,
    pub house_number: &'a str,
    pub postcode: i32,
    pub village: &'a str,
}

impl<'a> PostalAddress<'a> {
    pub fn new(street_address: &'a str, house_number: &'a str, postcode: i32, village: &'a str) -> Self {
        Self {
            street_address,
            house_number,
            postcode,
            village,
        }
    }
}

/// Deduplicates street addresses and deletes the ones nothing refers to.
#[derive(Debug, Clone, Default)]
pub struct AddressRegistry {
    places: PlaceRegistry,
}

impl AddressRegistry {
    pub fn new(places: PlaceRegistry) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &PlaceRegistry {
        &self.places
    }

    /// Returns the address matching street and house number in the place,
    /// creating the place and the address as needed.
    ///
    /// The address table has no unique key, so the lookup and insert share a
    /// transaction. Outer transactions take SQLite's write lock up front,
    /// which serializes concurrent callers.
    pub async fn get_or_create(
        &self,
        db: &mut Db,
        address: &PostalAddress<'_>,
    ) -> Result<Created<Address>> {
        self.validate(db, address)?;

        db.transaction(async |db: &mut Db| {
            let place = self
                .places
                .get_or_create(db, address.postcode, address.village)
                .await?
                .entity;

            get_or_insert::<Address>(
                db,
                vec![
                    ("street_address", address.street_address.into()),
                    ("house_number", address.house_number.into()),
                    ("place_id", place.id.into()),
                ],
            )
            .await
        })
        .await
    }

    /// Always stores a new address row, even when an identical one exists.
    pub async fn create(&self, db: &mut Db, address: &PostalAddress<'_>) -> Result<Address> {
        self.validate(db, address)?;

        db.transaction(async |db: &mut Db| {
            let place = self
                .places
                .get_or_create(db, address.postcode, address.village)
                .await?
                .entity;

            let created: Address = db
                .insert(
                    Address::insert()
                        .value("street_address", address.street_address)
                        .value("house_number", address.house_number)
                        .value("place_id", place.id),
                )
                .await?;

            tracing::debug!(address.id = %created.id, "created address");
            Ok(created)
        })
        .await
    }

    pub async fn get(&self, db: &mut Db, id: Id<Address>) -> Result<Address> {
        db.get(Address::query().filter_eq("id", id)).await
    }

    /// Returns `true` while any club or user refers to the address.
    pub async fn is_used(&self, db: &mut Db, address: &Address) -> Result<bool> {
        if db
            .exists(Club::query().filter_eq("address_id", address.id))
            .await?
        {
            return Ok(true);
        }

        db.exists(User::query().filter_eq("address_id", address.id))
            .await
    }

    /// Deletes the address. Fails with a referential integrity error while a
    /// club or user refers to it.
    pub async fn delete(&self, db: &mut Db, address: &Address) -> Result<()> {
        let deleted = db
            .delete(Delete::new(
                Address::TABLE,
                Filter::new().eq("id", address.id),
            ))
            .await?;

        if deleted == 0 {
            return Err(clubhouse_core::Error::record_not_found(format!(
                "table=address key={{id: {}}}",
                address.id
            )));
        }

        Ok(())
    }

    /// Deletes the address if nothing refers to it any more.
    ///
    /// Returns `true` if the row was deleted. A concurrent request may attach
    /// a club or user between the check and the delete; the storage layer
    /// then rejects the delete and the address is kept.
    pub async fn delete_if_unused(&self, db: &mut Db, address: &Address) -> Result<bool> {
        if self.is_used(db, address).await? {
            return Ok(false);
        }

        match self.delete(db, address).await {
            Ok(()) => {
                tracing::info!(address.id = %address.id, "deleted unused address");
                Ok(true)
            }
            Err(err) if err.is_referential_integrity() => {
                tracing::warn!(address.id = %address.id, %err, "address was referenced again; keeping it");
                Ok(false)
            }
            Err(err) if err.is_record_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn validate(&self, db: &Db, address: &PostalAddress<'_>) -> Result<()> {
        let table = db.schema().table(Address::TABLE)?;
        validate::required_text(table, "street_address", address.street_address)?;
        validate::required_text(table, "house_number", address.house_number)
    }
}
