use crate::{
    model::{Club, FieldType, FormField, Id},
    validate, Db, Model, Result,
};

use clubhouse_core::{
    driver::operation::Shift,
    stmt::{Filter, OrderBy},
    Error,
};

/// Attributes of a form field to add to a club's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFormField<'a> {
    pub name: &'a str,
    pub field_type: FieldType,
    pub value: &'a str,
    pub is_required: bool,
    pub help_text: &'a str,
    pub pre_text: &'a str,
    pub ordering: i32,
}

/// Keeps each club's form fields in a gap-tolerant, collision-free order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFieldEngine;

impl FormFieldEngine {
    /// Adds a field to the club's form at `field.ordering`.
    ///
    /// Returns `None` without writing if the club already has a field with
    /// identical attributes. If the position is taken, the field there and
    /// every field after it move down by one first.
    pub async fn create(
        &self,
        db: &mut Db,
        club: Id<Club>,
        field: &NewFormField<'_>,
    ) -> Result<Option<FormField>> {
        let table = db.schema().table(FormField::TABLE)?;
        validate::required_text(table, "name", field.name)?;

        db.transaction(async |db: &mut Db| {
            let identical = Filter::new()
                .eq("club_id", club)
                .eq("name", field.name)
                .eq("field_type", field.field_type)
                .eq("value", field.value)
                .eq("is_required", field.is_required)
                .eq("help_text", field.help_text)
                .eq("pre_text", field.pre_text)
                .eq("ordering", field.ordering);

            if db.exists(FormField::query().filter(identical)).await? {
                tracing::debug!(club.id = %club, name = field.name, "form field already exists");
                return Ok(None);
            }

            let occupied = FormField::query()
                .filter_eq("club_id", club)
                .filter_eq("ordering", field.ordering);

            if db.exists(occupied).await? {
                let last = db
                    .first::<FormField>(
                        FormField::query()
                            .filter_eq("club_id", club)
                            .order_by(OrderBy::desc("ordering")),
                    )
                    .await?;

                // Shifting moves the last field one further
                if let Some(last) = last.filter(|last| last.ordering == i32::MAX) {
                    return Err(Error::validation_range(
                        "ordering",
                        i64::from(last.ordering) + 1,
                        i64::from(i32::MIN),
                        i64::from(i32::MAX),
                    ));
                }

                let moved = db
                    .shift(Shift::up(
                        FormField::TABLE,
                        Filter::new().eq("club_id", club),
                        "ordering",
                        field.ordering.into(),
                    ))
                    .await?;

                tracing::debug!(club.id = %club, ordering = field.ordering, moved, "shifted form fields");
            }

            let created: FormField = db
                .insert(
                    FormField::insert()
                        .value("club_id", club)
                        .value("name", field.name)
                        .value("field_type", field.field_type)
                        .value("value", field.value)
                        .value("is_required", field.is_required)
                        .value("help_text", field.help_text)
                        .value("pre_text", field.pre_text)
                        .value("ordering", field.ordering),
                )
                .await?;

            tracing::debug!(club.id = %club, form_field.id = %created.id, ordering = created.ordering, "created form field");
            Ok(Some(created))
        })
        .await
    }

    /// The club's fields in form order.
    pub async fn fields(&self, db: &mut Db, club: Id<Club>) -> Result<Vec<FormField>> {
        db.all(
            FormField::query()
                .filter_eq("club_id", club)
                .order_by(OrderBy::asc("ordering")),
        )
        .await
    }
}
