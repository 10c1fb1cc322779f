//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the contact store.
//! - Apply the `contacts` schema according to the configured init mode.
//!
//! # Invariants
//! - Core code must not read/write contact rows before the schema is applied.
//! - There is exactly one schema shape; no cross-version migration exists.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    InvalidPath(String),
    /// An existing `contacts` table does not have the expected shape.
    IncompatibleSchema(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidPath(message) => write!(f, "invalid database path: {message}"),
            Self::IncompatibleSchema(message) => {
                write!(f, "incompatible contacts table: {message}")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidPath(_) | Self::IncompatibleSchema(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
