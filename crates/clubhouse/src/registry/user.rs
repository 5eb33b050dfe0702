use super::{AddressRegistry, PostalAddress};
use crate::{
    model::{Address, Id, User},
    validate, Db, Model, Result,
};

use clubhouse_core::{
    driver::operation::{Delete, Update},
    stmt::Filter,
    Error,
};

/// Profile fields of a new user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Members and their home addresses.
///
/// Unlike clubs, a user moving out also deletes the place the old address
/// lay in once no address is left there.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    addresses: AddressRegistry,
}

impl UserRegistry {
    pub fn new(addresses: AddressRegistry) -> Self {
        Self { addresses }
    }

    /// Fails with a unique violation if the email is taken.
    pub async fn create(
        &self,
        db: &mut Db,
        user: &NewUser<'_>,
        address: &PostalAddress<'_>,
    ) -> Result<User> {
        let table = db.schema().table(User::TABLE)?;
        validate::required_text(table, "email", user.email)?;
        validate::text(table, "first_name", user.first_name)?;
        validate::text(table, "last_name", user.last_name)?;

        db.transaction(async |db: &mut Db| {
            let address = self.addresses.get_or_create(db, address).await?.entity;

            let created: User = db
                .insert(
                    User::insert()
                        .value("email", user.email)
                        .value("first_name", user.first_name)
                        .value("last_name", user.last_name)
                        .value("address_id", address.id),
                )
                .await?;

            tracing::debug!(user.id = %created.id, "created user");
            Ok(created)
        })
        .await
    }

    pub async fn get(&self, db: &mut Db, id: Id<User>) -> Result<User> {
        db.get(User::query().filter_eq("id", id)).await
    }

    pub async fn get_by_email(&self, db: &mut Db, email: &str) -> Result<Option<User>> {
        db.first(User::query().filter_eq("email", email)).await
    }

    /// Moves the user to `address`, then removes the previous address and
    /// its place if they are no longer used.
    pub async fn edit_address(
        &self,
        db: &mut Db,
        user: &User,
        address: &PostalAddress<'_>,
    ) -> Result<User> {
        let (edited, previous) = db
            .transaction(async |db: &mut Db| {
                let stored = self.get(db, user.id).await?;
                let previous = self.addresses.get(db, stored.address_id).await?;

                let address = self.addresses.get_or_create(db, address).await?.entity;

                let updated = db
                    .update(
                        Update::new(User::TABLE, Filter::new().eq("id", user.id))
                            .set("address_id", address.id),
                    )
                    .await?;

                if updated == 0 {
                    return Err(not_found(user.id));
                }

                Ok((self.get(db, user.id).await?, previous))
            })
            .await?;

        if edited.address_id != previous.id {
            self.clean_up(db, &previous).await?;
        }

        Ok(edited)
    }

    /// Deletes the user and their memberships, then cleans up the address
    /// the same way [`edit_address`](Self::edit_address) does.
    pub async fn delete(&self, db: &mut Db, user: &User) -> Result<()> {
        let address = db
            .transaction(async |db: &mut Db| {
                let stored = self.get(db, user.id).await?;
                let address = self.addresses.get(db, stored.address_id).await?;

                let deleted = db
                    .delete(Delete::new(User::TABLE, Filter::new().eq("id", user.id)))
                    .await?;

                if deleted == 0 {
                    return Err(not_found(user.id));
                }

                Ok(address)
            })
            .await?;

        tracing::info!(user.id = %user.id, "deleted user");
        self.clean_up(db, &address).await
    }

    async fn clean_up(&self, db: &mut Db, address: &Address) -> Result<()> {
        if self.addresses.delete_if_unused(db, address).await? {
            self.addresses
                .places()
                .delete_if_unused(db, address.place_id)
                .await?;
        }
        Ok(())
    }
}

fn not_found(id: Id<User>) -> Error {
    Error::record_not_found(format!("table=user key={{id: {id}}}"))
}
