//! Renders operations as SQLite statements.

use clubhouse_core::{
    driver::operation::{Delete, Insert, Query, Update},
    schema::{Column, Index, Table, Type},
    stmt::{Filter, Value},
    Result,
};

/// A rendered statement and its positional parameters.
#[derive(Debug)]
pub(crate) struct Statement {
    pub(crate) sql: String,
    pub(crate) params: Vec<Value>,
}

pub(crate) fn create_table(table: &Table) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (", ident(table.name));

    let mut defs = table.columns.iter().map(column_def).collect::<Vec<_>>();

    for fk in &table.foreign_keys {
        defs.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {}",
            ident(fk.column),
            ident(fk.target),
            ident(fk.target_column),
            fk.on_delete.as_sql()
        ));
    }

    sql.push_str(&defs.join(", "));
    sql.push(')');
    sql
}

pub(crate) fn create_index(table: &Table, index: &Index) -> String {
    format!(
        "CREATE {}INDEX IF NOT EXISTS {} ON {} ({})",
        if index.unique { "UNIQUE " } else { "" },
        ident(index.name),
        ident(table.name),
        idents(index.columns.iter().copied())
    )
}

fn column_def(column: &Column) -> String {
    if column.primary_key {
        return format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", ident(column.name));
    }

    let ty = match column.ty {
        Type::Bool | Type::I32 | Type::I64 => "INTEGER",
        Type::String => "TEXT",
        Type::Bytes => "BLOB",
    };

    let mut def = format!("{} {}", ident(column.name), ty);
    if !column.nullable {
        def.push_str(" NOT NULL");
    }
    def
}

pub(crate) fn insert(table: &Table, op: &Insert) -> Result<Statement> {
    let mut params = vec![];
    let mut columns = vec![];

    for (column, value) in &op.values {
        resolve(table, column)?;
        columns.push(*column);
        params.push(value.clone());
    }

    let placeholders = (1..=params.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        ident(table.name),
        idents(columns.into_iter()),
        placeholders,
        idents(table.column_names())
    );

    Ok(Statement { sql, params })
}

pub(crate) fn query(table: &Table, op: &Query) -> Result<Statement> {
    let mut params = vec![];
    let mut sql = format!(
        "SELECT {} FROM {}",
        idents(table.column_names()),
        ident(table.name)
    );

    where_clause(table, &op.filter, &mut sql, &mut params)?;

    if let Some(order_by) = op.order_by {
        resolve(table, order_by.column)?;
        sql.push_str(&format!(
            " ORDER BY {} {}",
            ident(order_by.column),
            order_by.direction.as_sql()
        ));
    }

    if let Some(limit) = op.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    Ok(Statement { sql, params })
}

pub(crate) fn update(table: &Table, op: &Update) -> Result<Statement> {
    let mut params = vec![];
    let mut assignments = vec![];

    for (column, value) in &op.assignments {
        resolve(table, column)?;
        params.push(value.clone());
        assignments.push(format!("{} = ?{}", ident(column), params.len()));
    }

    let mut sql = format!(
        "UPDATE {} SET {}",
        ident(table.name),
        assignments.join(", ")
    );
    where_clause(table, &op.filter, &mut sql, &mut params)?;

    Ok(Statement { sql, params })
}

pub(crate) fn delete(table: &Table, op: &Delete) -> Result<Statement> {
    let mut params = vec![];
    let mut sql = format!("DELETE FROM {}", ident(table.name));
    where_clause(table, &op.filter, &mut sql, &mut params)?;

    Ok(Statement { sql, params })
}

/// `SELECT "id"` of the rows a shift moves, furthest first.
pub(crate) fn shift_targets(
    table: &Table,
    scope: &Filter,
    column: &'static str,
    from: i64,
    descending: bool,
) -> Result<Statement> {
    let filter = scope.clone().ge(column, from);
    let mut params = vec![];
    let mut sql = format!("SELECT \"id\" FROM {}", ident(table.name));
    where_clause(table, &filter, &mut sql, &mut params)?;
    sql.push_str(&format!(
        " ORDER BY {} {}",
        ident(column),
        if descending { "DESC" } else { "ASC" }
    ));

    Ok(Statement { sql, params })
}

pub(crate) fn shift_row(table: &Table, column: &'static str) -> Result<String> {
    resolve(table, column)?;
    Ok(format!(
        "UPDATE {0} SET {1} = {1} + ?1 WHERE \"id\" = ?2",
        ident(table.name),
        ident(column)
    ))
}

fn where_clause(
    table: &Table,
    filter: &Filter,
    sql: &mut String,
    params: &mut Vec<Value>,
) -> Result<()> {
    for (i, cond) in filter.conditions.iter().enumerate() {
        resolve(table, cond.column)?;
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });

        if cond.value.is_null() {
            // `= NULL` never matches in SQL
            sql.push_str(&format!("{} IS NULL", ident(cond.column)));
        } else {
            params.push(cond.value.clone());
            sql.push_str(&format!(
                "{} {} ?{}",
                ident(cond.column),
                cond.op.as_sql(),
                params.len()
            ));
        }
    }

    Ok(())
}

fn resolve<'a>(table: &'a Table, column: &str) -> Result<&'a Column> {
    table
        .column_by_name(column)
        .ok_or_else(|| clubhouse_core::err!("column `{}.{}` does not exist", table.name, column))
}

fn ident(name: &str) -> String {
    format!("\"{name}\"")
}

fn idents<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.map(ident).collect::<Vec<_>>().join(", ")
}
