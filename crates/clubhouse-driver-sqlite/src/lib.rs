mod sql;

mod transaction_manager;
use transaction_manager::TransactionManager;

mod value;
pub(crate) use value::Value;

use clubhouse_core::{
    async_trait,
    driver::{
        operation::{Operation, Shift, Transaction},
        Driver, Response,
    },
    schema::{Schema, Table},
    stmt::ValueRecord,
    Error, Result,
};
use rusqlite::{ffi, Connection as RusqliteConnection};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL.
    ///
    /// `sqlite::memory:` selects an in-memory database; any other path is
    /// opened as a file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn clubhouse_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    fn max_connections(&self) -> Option<usize> {
        // Every in-memory connection is its own database
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
    transaction_manager: TransactionManager,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Self::init(connection)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Self::init(connection)
    }

    fn init(connection: RusqliteConnection) -> Result<Self> {
        // Foreign keys are off by default in SQLite
        connection
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(Error::driver_operation_failed)?;

        Ok(Self {
            connection,
            transaction_manager: TransactionManager::new(),
        })
    }
}

#[async_trait]
impl clubhouse_core::driver::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        match op {
            Operation::Transaction(op) => {
                self.transaction(op)?;
                Ok(Response::count(0))
            }
            Operation::Insert(op) => {
                let table = schema.table(op.table)?;
                let stmt = sql::insert(table, &op)?;
                let rows = self.query_rows(table, stmt)?;
                Ok(Response::values(rows))
            }
            Operation::Query(op) => {
                let table = schema.table(op.table)?;
                let stmt = sql::query(table, &op)?;
                let rows = self.query_rows(table, stmt)?;
                Ok(Response::values(rows))
            }
            Operation::Update(op) => {
                let table = schema.table(op.table)?;
                let stmt = sql::update(table, &op)?;
                self.execute(table, stmt).map(Response::count)
            }
            Operation::Delete(op) => {
                let table = schema.table(op.table)?;
                let stmt = sql::delete(table, &op)?;
                self.execute(table, stmt).map(Response::count)
            }
            Operation::Shift(op) => {
                let table = schema.table(op.table)?;
                self.shift(table, &op).map(Response::count)
            }
        }
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        for table in &schema.tables {
            self.create_table(table)?;
        }

        Ok(())
    }
}

impl Connection {
    fn transaction(&mut self, op: Transaction) -> Result<()> {
        let sql = match op {
            Transaction::Start => self.transaction_manager.start(),
            Transaction::Commit => self.transaction_manager.commit()?,
            Transaction::Rollback => self.transaction_manager.rollback()?,
        };

        tracing::trace!(sql = %sql, "transaction");

        self.connection
            .execute_batch(&sql)
            .map_err(Error::driver_operation_failed)
    }

    fn create_table(&mut self, table: &Table) -> Result<()> {
        let stmt = sql::create_table(table);
        self.connection
            .execute(&stmt, [])
            .map_err(Error::driver_operation_failed)?;

        for index in &table.indices {
            let stmt = sql::create_index(table, index);
            self.connection
                .execute(&stmt, [])
                .map_err(Error::driver_operation_failed)?;
        }

        Ok(())
    }

    fn query_rows(&mut self, table: &Table, stmt: sql::Statement) -> Result<Vec<ValueRecord>> {
        tracing::trace!(sql = %stmt.sql, params = ?stmt.params, "query");

        let mut prepared = self
            .connection
            .prepare_cached(&stmt.sql)
            .map_err(Error::driver_operation_failed)?;

        let params = stmt.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|err| constraint_error(table.name, err))?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let items = table
                        .columns
                        .iter()
                        .enumerate()
                        .map(|(index, column)| {
                            Value::from_sql(row, index, column.ty).map(Value::into_inner)
                        })
                        .collect::<Result<Vec<_>>>()?;

                    ret.push(ValueRecord::from_vec(items));
                }
                Ok(None) => break,
                Err(err) => return Err(constraint_error(table.name, err)),
            }
        }

        Ok(ret)
    }

    fn execute(&mut self, table: &Table, stmt: sql::Statement) -> Result<u64> {
        tracing::trace!(sql = %stmt.sql, params = ?stmt.params, "execute");

        let mut prepared = self
            .connection
            .prepare_cached(&stmt.sql)
            .map_err(Error::driver_operation_failed)?;

        let params = stmt.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let count = prepared
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(|err| constraint_error(table.name, err))?;

        Ok(count as u64)
    }

    /// SQLite checks unique indexes row by row during `UPDATE`, so a single
    /// `SET col = col + 1` can collide with a row that has not moved yet.
    /// Rows are moved one at a time, furthest first, inside a transaction.
    fn shift(&mut self, table: &Table, op: &Shift) -> Result<u64> {
        let owns_transaction = self.transaction_manager.depth() == 0;

        if owns_transaction {
            self.transaction(Transaction::Start)?;
        }

        match self.shift_rows(table, op) {
            Ok(count) => {
                if owns_transaction {
                    self.transaction(Transaction::Commit)?;
                }
                Ok(count)
            }
            Err(err) => {
                if owns_transaction {
                    self.transaction(Transaction::Rollback)?;
                }
                Err(err)
            }
        }
    }

    fn shift_rows(&mut self, table: &Table, op: &Shift) -> Result<u64> {
        if op.by == 0 {
            return Ok(0);
        }

        let targets = sql::shift_targets(table, &op.scope, op.column, op.from, op.by > 0)?;
        let ids = self.query_ids(table, targets)?;

        let update = sql::shift_row(table, op.column)?;
        tracing::trace!(sql = %update, rows = ids.len(), by = op.by, "shift");

        let mut prepared = self
            .connection
            .prepare_cached(&update)
            .map_err(Error::driver_operation_failed)?;

        for id in &ids {
            prepared
                .execute(rusqlite::params![op.by, id])
                .map_err(|err| constraint_error(table.name, err))?;
        }

        Ok(ids.len() as u64)
    }

    fn query_ids(&mut self, table: &Table, stmt: sql::Statement) -> Result<Vec<i64>> {
        let mut prepared = self
            .connection
            .prepare_cached(&stmt.sql)
            .map_err(Error::driver_operation_failed)?;

        let params = stmt.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let rows = prepared
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                row.get::<_, i64>(0)
            })
            .map_err(|err| constraint_error(table.name, err))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver_operation_failed)
    }
}

/// Maps constraint failures to their dedicated error kinds.
fn constraint_error(table: &str, err: rusqlite::Error) -> Error {
    if let rusqlite::Error::SqliteFailure(failure, message) = &err {
        let message = message.clone().unwrap_or_else(|| failure.to_string());

        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                return Error::unique_violation(table, message);
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                return Error::referential_integrity(table, message);
            }
            // `ON DELETE RESTRICT` tables created by earlier versions
            ffi::SQLITE_CONSTRAINT_TRIGGER if message.starts_with("FOREIGN KEY") => {
                return Error::referential_integrity(table, message);
            }
            _ => {}
        }
    }

    Error::driver_operation_failed(err)
}
