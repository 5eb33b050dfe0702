//! Sample data shared by the registry tests.

use clubhouse::{
    Club, ClubRegistry, Db, FieldType, FormField, FormFieldEngine, Id, Model, NewFormField,
    NewUser, PostalAddress, User, UserRegistry,
};

pub fn sesame_street() -> PostalAddress<'static> {
    PostalAddress::new("Sesamstraße", "1", 65199, "Wiesbaden")
}

pub fn elm_street() -> PostalAddress<'static> {
    PostalAddress::new("Elm Street", "13", 10115, "Berlin")
}

/// A second address in the same place as [`sesame_street`].
pub fn market_square() -> PostalAddress<'static> {
    PostalAddress::new("Marktplatz", "2a", 65199, "Wiesbaden")
}

pub fn bert() -> NewUser<'static> {
    NewUser {
        email: "bert@example.org",
        first_name: "Bert",
        last_name: "Sesam",
    }
}

pub fn ernie() -> NewUser<'static> {
    NewUser {
        email: "ernie@example.org",
        first_name: "Ernie",
        last_name: "Sesam",
    }
}

/// A required text field at `ordering`, otherwise blank.
pub fn text_field(name: &str, ordering: i32) -> NewFormField<'_> {
    NewFormField {
        name,
        field_type: FieldType::Char,
        value: "",
        is_required: true,
        help_text: "",
        pre_text: "",
        ordering,
    }
}

pub async fn create_club(db: &mut Db, clubname: &str, address: &PostalAddress<'_>) -> Club {
    ClubRegistry::default()
        .create(db, clubname, "1977", address)
        .await
        .unwrap()
}

pub async fn create_user(db: &mut Db, user: &NewUser<'_>, address: &PostalAddress<'_>) -> User {
    UserRegistry::default().create(db, user, address).await.unwrap()
}

/// Number of rows stored for `M`.
pub async fn count<M: Model>(db: &mut Db) -> usize {
    db.all::<M>(M::query()).await.unwrap().len()
}

/// `(name, ordering)` of every field of the club, in form order.
pub async fn layout(db: &mut Db, club: Id<Club>) -> Vec<(String, i32)> {
    FormFieldEngine
        .fields(db, club)
        .await
        .unwrap()
        .into_iter()
        .map(|FormField { name, ordering, .. }| (name, ordering))
        .collect()
}
