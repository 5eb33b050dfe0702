use clubhouse_core::{
    schema::Type,
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value of the column's type.
    pub fn from_sql(row: &Row, index: usize, ty: Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => match ty {
                Type::Bool => stmt::Value::Bool(value != 0),
                Type::I32 => stmt::Value::I32(
                    i32::try_from(value)
                        .map_err(|_| Error::type_conversion(stmt::Value::I64(value), "i32"))?,
                ),
                Type::I64 => stmt::Value::I64(value),
                Type::String | Type::Bytes => {
                    return Err(Error::type_conversion(stmt::Value::I64(value), "text"))
                }
            },
            SqlValue::Text(value) => match ty {
                Type::String => stmt::Value::String(value),
                _ => return Err(Error::type_conversion(stmt::Value::String(value), "integer")),
            },
            SqlValue::Blob(value) => match ty {
                Type::Bytes => stmt::Value::Bytes(value),
                _ => return Err(Error::type_conversion(stmt::Value::Bytes(value), "integer")),
            },
            SqlValue::Real(value) => {
                return Err(Error::from_args(format_args!(
                    "unexpected REAL value {value} in column {index}"
                )))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
