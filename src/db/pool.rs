//! Lazily-opened SQLite connection (lightweight, one per provider).
//!
//! The connection is opened on first demand, bootstrapped with the schema,
//! reused for every later request and closed on `close()` or drop.

use crate::db::schema::bootstrap;
use crate::errors::{AppError, AppResult};
use log::{debug, error};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

impl DbLocation {
    pub fn display(&self) -> String {
        match self {
            DbLocation::File(p) => p.display().to_string(),
            DbLocation::Memory => ":memory:".to_string(),
        }
    }
}

pub struct DbPool {
    location: DbLocation,
    conn: Option<Connection>,
}

impl DbPool {
    /// Pool for a database file. Nothing is opened yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            location: DbLocation::File(path.as_ref().to_path_buf()),
            conn: None,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            location: DbLocation::Memory,
            conn: None,
        }
    }

    pub fn location(&self) -> &DbLocation {
        &self.location
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Handle for reads.
    pub fn readable(&mut self) -> AppResult<&Connection> {
        self.connection().map(|c| &*c)
    }

    /// Handle for writes. Same connection as `readable()`; SQLite serialises
    /// writers itself.
    pub fn writable(&mut self) -> AppResult<&mut Connection> {
        self.connection()
    }

    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            debug!("Closing database {}", self.location.display());
            if let Err((_, e)) = conn.close() {
                error!("Error closing database {}: {}", self.location.display(), e);
            }
        }
    }

    fn connection(&mut self) -> AppResult<&mut Connection> {
        if self.conn.is_none() {
            let conn = self.open()?;
            self.conn = Some(conn);
        }
        self.conn
            .as_mut()
            .ok_or_else(|| AppError::Other("database connection vanished".to_string()))
    }

    fn open(&self) -> AppResult<Connection> {
        let path = self.location.display();
        debug!("Opening database {}", path);

        let unavailable = |source: rusqlite::Error| {
            error!("Error opening database connection {}: {}", path, source);
            AppError::StorageUnavailable {
                path: path.clone(),
                source,
            }
        };

        let mut conn = match &self.location {
            DbLocation::File(p) => Connection::open(p),
            DbLocation::Memory => Connection::open_in_memory(),
        }
        .map_err(unavailable)?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(unavailable)?;

        match bootstrap(&mut conn) {
            Ok(()) => Ok(conn),
            Err(AppError::ConstraintViolation(e)) => Err(unavailable(e)),
            Err(e) => Err(e),
        }
    }
}

impl Drop for DbPool {
    fn drop(&mut self) {
        self.close();
    }
}
