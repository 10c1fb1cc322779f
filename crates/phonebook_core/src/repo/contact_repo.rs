//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and lookup APIs over the `contacts` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Reads carry no `ORDER BY`; rows come back in natural retrieval order.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactFields, ContactId};
use rusqlite::{params, Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    phone1,
    phone2,
    phone3
FROM contacts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact operations.
pub trait ContactRepository {
    fn add_contact(&self, fields: &ContactFields) -> RepoResult<ContactId>;
    fn delete_contact(&self, id: ContactId) -> RepoResult<usize>;
    fn edit_contact(&self, id: ContactId, fields: &ContactFields) -> RepoResult<usize>;
    fn search_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Contact>>;
    fn search_by_id(&self, id: ContactId) -> RepoResult<Vec<Contact>>;
    fn get_all_contacts(&self) -> RepoResult<Vec<Contact>>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_contacts<P: Params>(&self, sql: &str, params: P) -> RepoResult<Vec<Contact>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let mut rows = stmt.query(params)?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn add_contact(&self, fields: &ContactFields) -> RepoResult<ContactId> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO contacts (
                first_name,
                last_name,
                phone1,
                phone2,
                phone3
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
        )?;
        let id = stmt.insert(params![
            fields.first_name.as_str(),
            fields.last_name.as_str(),
            fields.phone1.as_str(),
            fields.phone2.as_str(),
            fields.phone3.as_str(),
        ])?;

        Ok(id)
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", [id])?;
        Ok(changed)
    }

    fn edit_contact(&self, id: ContactId, fields: &ContactFields) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE contacts
             SET
                first_name = ?1,
                last_name = ?2,
                phone1 = ?3,
                phone2 = ?4,
                phone3 = ?5
             WHERE id = ?6;",
            params![
                fields.first_name.as_str(),
                fields.last_name.as_str(),
                fields.phone1.as_str(),
                fields.phone2.as_str(),
                fields.phone3.as_str(),
                id,
            ],
        )?;
        Ok(changed)
    }

    fn search_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Contact>> {
        self.query_contacts(
            &format!("{CONTACT_SELECT_SQL} WHERE last_name = ?1;"),
            [last_name],
        )
    }

    fn search_by_id(&self, id: ContactId) -> RepoResult<Vec<Contact>> {
        self.query_contacts(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"), [id])
    }

    fn get_all_contacts(&self) -> RepoResult<Vec<Contact>> {
        self.query_contacts(&format!("{CONTACT_SELECT_SQL};"), [])
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let id: ContactId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in contacts.id"
        )));
    }

    Ok(Contact {
        id,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        phone1: row.get("phone1")?,
        phone2: row.get("phone2")?,
        phone3: row.get("phone3")?,
    })
}
