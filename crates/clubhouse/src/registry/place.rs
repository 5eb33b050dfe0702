use super::{get_or_insert, Created};
use crate::{
    model::{Address, Id, Place},
    validate, Db, Model, Result,
};

use clubhouse_core::{driver::operation::Delete, stmt::Filter};

/// Deduplicates postal locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceRegistry;

impl PlaceRegistry {
    /// Returns the place with exactly this postcode and village, creating it
    /// on first use.
    pub async fn get_or_create(
        &self,
        db: &mut Db,
        postcode: i32,
        village: &str,
    ) -> Result<Created<Place>> {
        validate::range("postcode", postcode.into(), 0, 99_999)?;
        validate::required_text(db.schema().table(Place::TABLE)?, "village", village)?;

        get_or_insert::<Place>(
            db,
            vec![("postcode", postcode.into()), ("village", village.into())],
        )
        .await
    }

    pub async fn get(&self, db: &mut Db, id: Id<Place>) -> Result<Place> {
        db.get(Place::query().filter_eq("id", id)).await
    }

    /// Returns `true` while any address lies in the place.
    pub async fn is_used(&self, db: &mut Db, id: Id<Place>) -> Result<bool> {
        db.exists(Address::query().filter_eq("place_id", id)).await
    }

    /// Deletes the place unless an address still lies in it.
    pub async fn delete_if_unused(&self, db: &mut Db, id: Id<Place>) -> Result<bool> {
        if self.is_used(db, id).await? {
            return Ok(false);
        }

        match db
            .delete(Delete::new(Place::TABLE, Filter::new().eq("id", id)))
            .await
        {
            Ok(0) => Ok(false),
            Ok(_) => {
                tracing::info!(place.id = %id, "deleted unused place");
                Ok(true)
            }
            Err(err) if err.is_referential_integrity() => {
                tracing::warn!(place.id = %id, %err, "place was referenced again; keeping it");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
