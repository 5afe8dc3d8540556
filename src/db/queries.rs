//! Engine primitives: one statement per call, values always bound.
//!
//! Table and column names reach these functions already checked by the
//! provider; predicates arrive with `?` placeholders and their arguments.

use crate::errors::{AppError, AppResult};
use crate::models::row_set::RowSet;
use log::debug;
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};

pub fn execute_query(
    conn: &Connection,
    table: &str,
    columns: &[String],
    predicate: Option<&str>,
    args: &[Value],
    order_by: Option<&str>,
) -> AppResult<RowSet> {
    let projection = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(", ")
    };

    let mut sql = format!("SELECT {} FROM {}", projection, table);
    if let Some(p) = predicate {
        sql.push_str(" WHERE ");
        sql.push_str(p);
    }
    if let Some(o) = order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(o);
    }
    debug!("{}", sql);

    let mut stmt = conn.prepare(&sql)?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = names.len();

    let mut rows = stmt.query(params_from_iter(args.iter()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(width);
        for i in 0..width {
            values.push(row.get::<_, Value>(i)?);
        }
        out.push(values);
    }

    Ok(RowSet::new(names, out))
}

/// Insert one row and return the id the engine assigned. A negative id is
/// treated as a failed insert and the row is rolled back.
pub fn execute_insert(
    conn: &Connection,
    table: &str,
    columns: &[&str],
    values: &[Value],
) -> AppResult<i64> {
    let sql = if columns.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES", table)
    } else {
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders
        )
    };
    debug!("{}", sql);

    let tx = conn.unchecked_transaction()?;
    let new_id = {
        let mut stmt = tx.prepare(&sql)?;
        stmt.insert(params_from_iter(values.iter()))?
    };

    if new_id < 0 {
        // dropping `tx` rolls the row back
        return Err(AppError::InsertFailed(format!(
            "engine returned row id {} for {}",
            new_id, table
        )));
    }

    tx.commit()?;
    Ok(new_id)
}

pub fn execute_update(
    conn: &Connection,
    table: &str,
    columns: &[&str],
    values: &[Value],
    predicate: Option<&str>,
    args: &[Value],
) -> AppResult<usize> {
    if columns.is_empty() {
        return Err(AppError::EmptyValues);
    }

    let assignments: Vec<String> = columns.iter().map(|c| format!("{} = ?", c)).collect();
    let mut sql = format!("UPDATE {} SET {}", table, assignments.join(", "));
    if let Some(p) = predicate {
        sql.push_str(" WHERE ");
        sql.push_str(p);
    }
    debug!("{}", sql);

    let changed = conn.execute(&sql, params_from_iter(values.iter().chain(args.iter())))?;
    Ok(changed)
}

pub fn execute_delete(
    conn: &Connection,
    table: &str,
    predicate: Option<&str>,
    args: &[Value],
) -> AppResult<usize> {
    let mut sql = format!("DELETE FROM {}", table);
    if let Some(p) = predicate {
        sql.push_str(" WHERE ");
        sql.push_str(p);
    }
    debug!("{}", sql);

    let deleted = conn.execute(&sql, params_from_iter(args.iter()))?;
    Ok(deleted)
}

/// Number of rows in a table, for `db --info`.
pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count)
}
