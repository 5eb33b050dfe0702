//! One registry per entity. Registries own no connection; every operation
//! takes the [`Db`] handle of the request it runs for.

mod address;
pub use address::{AddressRegistry, PostalAddress};

mod club;
pub use club::ClubRegistry;

mod document;
pub use document::DocumentStore;

mod form_field;
pub use form_field::{FormFieldEngine, NewFormField};

mod membership;
pub use membership::MembershipRegistry;

mod place;
pub use place::PlaceRegistry;

mod user;
pub use user::{NewUser, UserRegistry};

use crate::{Db, Model, Result};

use clubhouse_core::stmt::{Filter, Value};

/// The result of a get-or-create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T> {
    pub entity: T,

    /// `false` when an existing row matched
    pub was_created: bool,
}

impl<T> Created<T> {
    pub fn created(entity: T) -> Self {
        Self {
            entity,
            was_created: true,
        }
    }

    pub fn existing(entity: T) -> Self {
        Self {
            entity,
            was_created: false,
        }
    }

    pub fn into_entity(self) -> T {
        self.entity
    }
}

/// Returns the row of `M` matching every `(column, value)` pair, inserting
/// one with exactly those values when none does.
///
/// Losing a race against a concurrent insert of the same key surfaces as a
/// unique violation; the winner's row is then read back.
pub(crate) async fn get_or_insert<M: Model>(
    db: &mut Db,
    fields: Vec<(&'static str, Value)>,
) -> Result<Created<M>> {
    let lookup = fields
        .iter()
        .fold(Filter::new(), |filter, (column, value)| {
            filter.eq(*column, value.clone())
        });
    let query = M::query().filter(lookup);

    if let Some(existing) = db.first::<M>(query.clone()).await? {
        return Ok(Created::existing(existing));
    }

    let insert = fields
        .into_iter()
        .fold(M::insert(), |insert, (column, value)| insert.value(column, value));

    match db.insert::<M>(insert).await {
        Ok(entity) => {
            tracing::debug!(table = M::TABLE, "created row");
            Ok(Created::created(entity))
        }
        Err(err) if err.is_unique_violation() => {
            tracing::debug!(table = M::TABLE, %err, "lost insert race; reading winner");
            match db.first::<M>(query).await? {
                Some(existing) => Ok(Created::existing(existing)),
                // The conflicting row differs in a column outside the lookup
                None => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}
