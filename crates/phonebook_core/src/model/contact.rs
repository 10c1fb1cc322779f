//! Contact domain model.
//!
//! # Responsibility
//! - Define the directory record returned from queries.
//! - Define the caller-settable field set used for insert and update.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes for a stored record.
//! - Phone slots are free-form text; empty means "unused".

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
pub type ContactId = i64;

/// The five fields a caller may set on insert or overwrite on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone1: impl Into<String>,
        phone2: impl Into<String>,
        phone3: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone1: phone1.into(),
            phone2: phone2.into(),
            phone3: phone3.into(),
        }
    }
}

/// A stored contact as read back from the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
}

impl Contact {
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone1: fields.phone1,
            phone2: fields.phone2,
            phone3: fields.phone3,
        }
    }

    /// Returns a copy of the mutable part, e.g. to feed an edit.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone1: self.phone1.clone(),
            phone2: self.phone2.clone(),
            phone3: self.phone3.clone(),
        }
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} {}: {}, {}, {}",
            self.id, self.first_name, self.last_name, self.phone1, self.phone2, self.phone3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactFields};

    #[test]
    fn fields_roundtrip_through_contact() {
        let fields = ContactFields::new("Ada", "Lovelace", "111", "", "333");
        let contact = Contact::from_fields(7, fields.clone());
        assert_eq!(contact.id, 7);
        assert_eq!(contact.fields(), fields);
    }

    #[test]
    fn display_renders_all_slots() {
        let contact = Contact::from_fields(3, ContactFields::new("Ivan", "Ivanov", "1", "2", "3"));
        assert_eq!(contact.to_string(), "#3 Ivan Ivanov: 1, 2, 3");
    }
}
