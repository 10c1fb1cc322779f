//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for contact rows.
//! - Isolate SQLite query details from the store facade.
//!
//! # Invariants
//! - Every operation maps to exactly one SQL statement.
//! - Absent ids are not errors: writes report 0 affected rows, reads return
//!   an empty list.

pub mod contact_repo;
