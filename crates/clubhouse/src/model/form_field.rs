use super::{Club, Id, Model};
use crate::Result;

use clubhouse_core::{
    schema::{Column, ForeignKey, Index, OnDelete, Table, Type},
    stmt::{Value, ValueRecord},
    Error,
};

use std::{fmt, str::FromStr};

/// A custom field on a club's membership-request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: Id<FormField>,
    pub club_id: Id<Club>,
    pub name: String,
    pub field_type: FieldType,

    /// Default value or choices, interpreted by the form renderer
    pub value: String,
    pub is_required: bool,
    pub help_text: String,

    /// Text shown above the field
    pub pre_text: String,

    /// Position on the form; unique per club
    pub ordering: i32,
}

/// Widget kind of a [`FormField`], stored by its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Char,
    TextArea,
    Integer,
    Float,
    Email,
    Date,
    CheckBox,
    RadioBox,
    SelectBox,
    File,
}

impl FieldType {
    pub const ALL: [FieldType; 10] = [
        FieldType::Char,
        FieldType::TextArea,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Email,
        FieldType::Date,
        FieldType::CheckBox,
        FieldType::RadioBox,
        FieldType::SelectBox,
        FieldType::File,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Char => "char",
            FieldType::TextArea => "text_area",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::CheckBox => "check_box",
            FieldType::RadioBox => "radio_box",
            FieldType::SelectBox => "select_box",
            FieldType::File => "file",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| Error::type_conversion(Value::String(s.to_string()), "FieldType"))
    }
}

impl From<FieldType> for Value {
    fn from(value: FieldType) -> Self {
        Value::from(value.as_str())
    }
}

impl Model for FormField {
    const TABLE: &'static str = "form_field";

    fn table() -> Table {
        Table::new(Self::TABLE)
            .column(Column::id())
            .column(Column::new("club_id", Type::I64))
            .column(Column::new("name", Type::String).max_len(150))
            .column(Column::new("field_type", Type::String))
            .column(Column::new("value", Type::String))
            .column(Column::new("is_required", Type::Bool))
            .column(Column::new("help_text", Type::String))
            .column(Column::new("pre_text", Type::String))
            .column(Column::new("ordering", Type::I32))
            .index(Index::unique(
                "form_field_club_ordering",
                ["club_id", "ordering"],
            ))
            .foreign_key(ForeignKey::new("club_id", Club::TABLE, OnDelete::Cascade))
    }

    fn load(mut row: ValueRecord) -> Result<Self> {
        Ok(FormField {
            id: Id::load(row.take(0)?)?,
            club_id: Id::load(row.take(1)?)?,
            name: row.take(2)?.into_string()?,
            field_type: row.take(3)?.into_string()?.parse()?,
            value: row.take(4)?.into_string()?,
            is_required: row.take(5)?.to_bool()?,
            help_text: row.take(6)?.into_string()?,
            pre_text: row.take(7)?.into_string()?,
            ordering: row.take(8)?.to_i32()?,
        })
    }
}
