//! `contacts` table definition.
//!
//! # Invariants
//! - `id` uses `AUTOINCREMENT`, so a deleted id is never handed out again while
//!   the table exists.
//! - Dropping the table also drops its `sqlite_sequence` entry; ids restart at 1
//!   after a reset.
//! - A preserved table must match this shape exactly; anything else is refused.

use super::{DbError, DbResult};
use crate::config::InitMode;
use rusqlite::Connection;

const CREATE_CONTACTS_SQL: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    phone1 TEXT NOT NULL DEFAULT '',
    phone2 TEXT NOT NULL DEFAULT '',
    phone3 TEXT NOT NULL DEFAULT ''
);";

/// Applies the schema as requested by `mode`.
pub fn apply_schema(conn: &mut Connection, mode: InitMode) -> DbResult<()> {
    match mode {
        InitMode::Reset => reset_schema(conn),
        InitMode::Preserve => ensure_schema(conn),
    }
}

/// Drops and recreates the `contacts` table in one transaction.
///
/// All rows are discarded. On failure the previous table is left intact.
pub fn reset_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch("DROP TABLE IF EXISTS contacts;")?;
    tx.execute_batch(CREATE_CONTACTS_SQL)?;
    tx.commit()?;
    Ok(())
}

const TEXT_COLUMNS: [&str; 5] = ["first_name", "last_name", "phone1", "phone2", "phone3"];

/// Creates the `contacts` table when absent. Existing rows are kept.
///
/// # Errors
/// - `DbError::IncompatibleSchema` when an existing table has nullable text
///   columns, missing columns or no `AUTOINCREMENT` id.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_CONTACTS_SQL)?;
    check_table_shape(conn)
}

fn check_table_shape(conn: &Connection) -> DbResult<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(contacts);")?;
    let columns = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>("name")?,
                row.get::<_, i64>("notnull")?,
                row.get::<_, i64>("pk")?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    if !columns.iter().any(|(name, _, pk)| name == "id" && *pk == 1) {
        return Err(DbError::IncompatibleSchema(
            "contacts.id is not the primary key".to_string(),
        ));
    }
    for expected in TEXT_COLUMNS {
        match columns.iter().find(|(name, _, _)| name == expected) {
            Some((_, 1, _)) => {}
            Some(_) => {
                return Err(DbError::IncompatibleSchema(format!(
                    "contacts.{expected} allows NULL"
                )));
            }
            None => {
                return Err(DbError::IncompatibleSchema(format!(
                    "contacts.{expected} is missing"
                )));
            }
        }
    }

    let table_sql: String = conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'contacts';",
        [],
        |row| row.get(0),
    )?;
    if !table_sql.to_ascii_uppercase().contains("AUTOINCREMENT") {
        return Err(DbError::IncompatibleSchema(
            "contacts.id is not AUTOINCREMENT".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, reset_schema};
    use crate::db::DbError;
    use rusqlite::Connection;

    fn row_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn reset_discards_rows_and_restarts_ids() {
        let mut conn = Connection::open_in_memory().unwrap();
        reset_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO contacts (last_name) VALUES ('Smith');", [])
            .unwrap();
        conn.execute("INSERT INTO contacts (last_name) VALUES ('Adams');", [])
            .unwrap();

        reset_schema(&mut conn).unwrap();
        assert_eq!(row_count(&conn), 0);

        conn.execute("INSERT INTO contacts (last_name) VALUES ('Jones');", [])
            .unwrap();
        assert_eq!(conn.last_insert_rowid(), 1);
    }

    #[test]
    fn ensure_keeps_existing_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        reset_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO contacts (last_name) VALUES ('Smith');", [])
            .unwrap();

        ensure_schema(&conn).unwrap();
        assert_eq!(row_count(&conn), 1);
    }

    #[test]
    fn omitted_columns_default_to_empty_text() {
        let mut conn = Connection::open_in_memory().unwrap();
        reset_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO contacts (last_name) VALUES ('Smith');", [])
            .unwrap();

        let phone3: String = conn
            .query_row("SELECT phone3 FROM contacts;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(phone3, "");
    }

    #[test]
    fn ensure_rejects_table_without_autoincrement() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE contacts (
                id INTEGER PRIMARY KEY,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                phone1 TEXT NOT NULL DEFAULT '',
                phone2 TEXT NOT NULL DEFAULT '',
                phone3 TEXT NOT NULL DEFAULT ''
            );",
        )
        .unwrap();

        let err = ensure_schema(&conn).unwrap_err();
        assert!(matches!(
            err,
            DbError::IncompatibleSchema(message) if message.contains("AUTOINCREMENT")
        ));
    }

    #[test]
    fn ensure_rejects_missing_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT ''
            );",
        )
        .unwrap();

        let err = ensure_schema(&conn).unwrap_err();
        assert!(matches!(
            err,
            DbError::IncompatibleSchema(message) if message.contains("phone1")
        ));
    }
}
