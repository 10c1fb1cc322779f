//! Contact domain model.
//!
//! # Responsibility
//! - Define the value types handed across the store boundary.
//! - Own the deterministic ordering policy for contact lists.
//!
//! # Invariants
//! - Values are disconnected copies; mutating one never touches storage.

pub mod contact;
pub mod ordering;
