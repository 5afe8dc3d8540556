use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// One row of the internal operation journal.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn journal(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // local time, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Journal rows, newest first.
pub fn load_journal(conn: &Connection) -> AppResult<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, operation, IFNULL(target, ''), message
         FROM log
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(JournalEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
