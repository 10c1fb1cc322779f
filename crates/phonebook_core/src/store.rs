//! Contact store facade.
//!
//! # Responsibility
//! - Own the single database handle for the store lifetime.
//! - Expose the directory operations with typed, propagated failures.
//!
//! # Invariants
//! - The handle is acquired in `open*` and released on `close` or drop.
//! - No operation retries or performs partial writes.
//! - Logs carry ids, counts and durations only; never names or phone numbers.

use crate::config::{InitMode, StoreConfig};
use crate::db::{open_db, open_db_in_memory, schema, DbError};
use crate::model::contact::{Contact, ContactFields, ContactId};
use crate::repo::contact_repo::{ContactRepository, RepoError, SqliteContactRepository};
use log::{debug, error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// The backing database could not be opened, configured or reset.
    Initialization(DbError),
    /// A single operation failed; the store remains usable.
    Operation(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialization(err) => write!(f, "contact store initialization failed: {err}"),
            Self::Operation(err) => write!(f, "contact store operation failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Initialization(err) => Some(err),
            Self::Operation(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Operation(value)
    }
}

/// Single-table contact directory backed by SQLite.
///
/// Owns one connection, so it is `Send` but not `Sync`; callers sharing a
/// store across threads must wrap it in their own lock.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Opens the store described by `config`.
    ///
    /// With the default `InitMode::Reset` all previously stored contacts are
    /// discarded.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let conn = open_db(config).map_err(StoreError::Initialization)?;
        Ok(Self { conn })
    }

    /// Opens an empty store in memory.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory(InitMode::Reset).map_err(StoreError::Initialization)?;
        Ok(Self { conn })
    }

    /// Inserts a new contact and returns the store-assigned id.
    pub fn add_contact(&self, fields: &ContactFields) -> StoreResult<ContactId> {
        let started_at = Instant::now();
        match self.repo().add_contact(fields) {
            Ok(id) => {
                debug!(
                    "event=contact_add module=store status=ok id={} duration_ms={}",
                    id,
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => Err(log_failure("contact_add", started_at, err)),
        }
    }

    /// Deletes the contact with `id`. Returns the number of removed rows (0 or 1).
    pub fn delete_contact(&self, id: ContactId) -> StoreResult<usize> {
        let started_at = Instant::now();
        match self.repo().delete_contact(id) {
            Ok(changed) => {
                debug!(
                    "event=contact_delete module=store status=ok id={} affected={} duration_ms={}",
                    id,
                    changed,
                    started_at.elapsed().as_millis()
                );
                Ok(changed)
            }
            Err(err) => Err(log_failure("contact_delete", started_at, err)),
        }
    }

    /// Overwrites all five mutable fields of the contact with `id`.
    ///
    /// Returns the number of updated rows (0 or 1).
    pub fn edit_contact(&self, id: ContactId, fields: &ContactFields) -> StoreResult<usize> {
        let started_at = Instant::now();
        match self.repo().edit_contact(id, fields) {
            Ok(changed) => {
                debug!(
                    "event=contact_edit module=store status=ok id={} affected={} duration_ms={}",
                    id,
                    changed,
                    started_at.elapsed().as_millis()
                );
                Ok(changed)
            }
            Err(err) => Err(log_failure("contact_edit", started_at, err)),
        }
    }

    /// Exact, case-sensitive last name match in natural retrieval order.
    pub fn search_by_last_name(&self, last_name: &str) -> StoreResult<Vec<Contact>> {
        let started_at = Instant::now();
        let result = self.repo().search_by_last_name(last_name);
        log_read("contact_search_last_name", started_at, result)
    }

    /// Primary key lookup; the result holds zero or one contact.
    pub fn search_by_id(&self, id: ContactId) -> StoreResult<Vec<Contact>> {
        let started_at = Instant::now();
        let result = self.repo().search_by_id(id);
        log_read("contact_search_id", started_at, result)
    }

    /// Every stored contact in natural retrieval order.
    pub fn get_all_contacts(&self) -> StoreResult<Vec<Contact>> {
        let started_at = Instant::now();
        let result = self.repo().get_all_contacts();
        log_read("contact_list", started_at, result)
    }

    /// Drops and recreates the contacts table. Ids restart at 1.
    pub fn reset_store(&mut self) -> StoreResult<()> {
        let started_at = Instant::now();
        match schema::reset_schema(&mut self.conn) {
            Ok(()) => {
                info!(
                    "event=store_reset module=store status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => Err(log_failure("store_reset", started_at, RepoError::Db(err))),
        }
    }

    /// Releases the database handle, reporting any close failure.
    ///
    /// Dropping the store also closes the handle, but silently.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_conn, err)| {
            error!(
                "event=store_close module=store status=error error={}",
                err
            );
            StoreError::Operation(RepoError::from(err))
        })?;
        info!("event=store_close module=store status=ok");
        Ok(())
    }

    fn repo(&self) -> SqliteContactRepository<'_> {
        SqliteContactRepository::new(&self.conn)
    }
}

fn log_read(
    event: &str,
    started_at: Instant,
    result: Result<Vec<Contact>, RepoError>,
) -> StoreResult<Vec<Contact>> {
    match result {
        Ok(contacts) => {
            debug!(
                "event={} module=store status=ok rows={} duration_ms={}",
                event,
                contacts.len(),
                started_at.elapsed().as_millis()
            );
            Ok(contacts)
        }
        Err(err) => Err(log_failure(event, started_at, err)),
    }
}

fn log_failure(event: &str, started_at: Instant, err: RepoError) -> StoreError {
    error!(
        "event={} module=store status=error duration_ms={} error={}",
        event,
        started_at.elapsed().as_millis(),
        err
    );
    StoreError::Operation(err)
}
