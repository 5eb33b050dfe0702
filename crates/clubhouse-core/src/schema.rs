mod column;
pub use column::{Column, Type};

mod foreign_key;
pub use foreign_key::{ForeignKey, OnDelete};

mod index;
pub use index::Index;

mod table;
pub use table::Table;

use crate::{Error, Result};

/// The set of tables the application stores.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(tables: Vec<Table>) -> Result<Self> {
        let schema = Self { tables };
        schema.verify()?;
        Ok(schema)
    }

    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .iter()
            .find(|table| table.name == name)
            .ok_or_else(|| err!("table `{name}` is not part of the schema"))
    }

    /// Checks that every column named by an index or foreign key exists and
    /// that foreign keys only reference tables declared earlier.
    fn verify(&self) -> Result<()> {
        for (position, table) in self.tables.iter().enumerate() {
            for index in &table.indices {
                for column in &index.columns {
                    table.resolve(column)?;
                }
            }

            for fk in &table.foreign_keys {
                table.resolve(fk.column)?;

                let Some(target) = self.tables[..position]
                    .iter()
                    .find(|target| target.name == fk.target)
                else {
                    return Err(Error::from_args(format_args!(
                        "foreign key `{}.{}` references unknown or later table `{}`",
                        table.name, fk.column, fk.target
                    )));
                };

                target.resolve(fk.target_column)?;
            }
        }

        Ok(())
    }
}
