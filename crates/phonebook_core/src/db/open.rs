//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection settings required by the store.
//! - Apply the `contacts` schema before returning a usable connection.
//!
//! # Invariants
//! - A connection is returned only after the schema is in place.
//! - On any bootstrap failure the half-opened connection is dropped (closed)
//!   before the error is returned.

use super::schema::apply_schema;
use super::{DbError, DbResult};
use crate::config::{InitMode, StoreConfig};
use log::{error, info};
use rusqlite::Connection;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the SQLite database file named by `config` and applies the schema.
///
/// # Side effects
/// - With `InitMode::Reset`, every existing contact row is discarded.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = config.init_mode;
    info!(
        "event=db_open module=db status=start mode=file init={}",
        mode.as_str()
    );

    if config.db_path.as_os_str().is_empty() {
        error!(
            "event=db_open module=db status=error mode=file error_code=db_path_empty"
        );
        return Err(DbError::InvalidPath("db_path cannot be empty".to_string()));
    }

    let conn = match Connection::open(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, mode, "file", started_at)
}

/// Opens an in-memory SQLite database and applies the schema.
///
/// Every in-memory database starts empty, so `mode` only matters for logging
/// symmetry with [`open_db`].
pub fn open_db_in_memory(mode: InitMode) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=memory init={}",
        mode.as_str()
    );

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, mode, "memory", started_at)
}

fn finish_open(
    mut conn: Connection,
    mode: InitMode,
    label: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    match bootstrap_connection(&mut conn, mode) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                label,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                label,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, mode: InitMode) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_schema(conn, mode)?;
    Ok(())
}
