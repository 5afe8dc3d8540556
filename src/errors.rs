//! Unified application error type.
//! The provider, the db layer, the config and the CLI all return AppError so
//! callers see one typed failure whatever layer produced it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Resource routing
    // ---------------------------
    #[error("Unknown URI {0}")]
    UnrecognizedResource(String),

    // ---------------------------
    // Storage engine
    // ---------------------------
    #[error("Error opening database connection ({path}): {source}")]
    StorageUnavailable {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("An error occurred inserting into the database: {0}")]
    InsertFailed(String),

    #[error("Database error: {0}")]
    ConstraintViolation(#[from] rusqlite::Error),

    #[error("Invalid column name: {0:?}")]
    InvalidColumn(String),

    #[error("No values supplied for update")]
    EmptyValues,

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
