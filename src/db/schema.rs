//! Schema bootstrap.
//!
//! Each schema version is a SQL script replayed one statement at a time.
//! The applied version is mirrored to `PRAGMA user_version`; a store already
//! at the latest version is left untouched.

use crate::errors::{AppError, AppResult};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

struct SchemaVersion {
    version: u32,
    sql: &'static str,
}

const SCHEMAS: &[SchemaVersion] = &[SchemaVersion {
    version: 1,
    sql: include_str!("schema/bluebird.sql"),
}];

/// Latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMAS.last().map_or(0, |s| s.version)
}

pub fn current_version(conn: &Connection) -> AppResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Split a script into statements. A statement ends on a line ending with
/// `;`. Blank lines and `--` comment lines are skipped.
pub fn split_statements(script: &str) -> AppResult<Vec<String>> {
    let mut out = Vec::new();
    let mut buffer = String::new();

    for line in script.lines() {
        let line = line.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }

        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(line);

        if line.ends_with(';') {
            out.push(std::mem::take(&mut buffer));
        }
    }

    if !buffer.trim().is_empty() {
        return Err(AppError::Migration(format!(
            "unterminated statement in schema script: {}",
            buffer.trim()
        )));
    }

    Ok(out)
}

/// Bring the store up to the latest schema version.
pub fn bootstrap(conn: &mut Connection) -> AppResult<()> {
    let current = current_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than supported {}",
            current, latest
        )));
    }

    if current == latest {
        return Ok(());
    }

    info!("Creating database schema (version {} -> {})", current, latest);

    let tx = conn.transaction()?;
    for schema in SCHEMAS {
        if schema.version <= current {
            continue;
        }

        for stmt in split_statements(schema.sql)? {
            debug!("{}", stmt);
            tx.execute_batch(&stmt)?;
        }
        tx.execute_batch(&format!("PRAGMA user_version = {};", schema.version))?;
    }
    tx.commit()?;

    Ok(())
}

/// Check whether a table exists in the store.
pub fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}
