//! Deterministic in-memory ordering for contact lists.
//!
//! # Invariants
//! - Key priority: last name, first name, phone1, phone2, phone3.
//! - Text compares byte-wise on its UTF-8 encoding; no case folding or locale.
//! - `id` is never a key, so equal-key contacts keep their input order.

use super::contact::Contact;
use std::cmp::Ordering;

/// Compares two contacts by the directory sort key.
pub fn compare_contacts(a: &Contact, b: &Contact) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Returns `contacts` reordered by [`compare_contacts`].
///
/// Pure: takes a caller-owned sequence and never touches the store. The sort
/// is stable.
pub fn sort_contacts(mut contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.sort_by(compare_contacts);
    contacts
}

fn sort_key(contact: &Contact) -> (&str, &str, &str, &str, &str) {
    (
        contact.last_name.as_str(),
        contact.first_name.as_str(),
        contact.phone1.as_str(),
        contact.phone2.as_str(),
        contact.phone3.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::{compare_contacts, sort_contacts};
    use crate::model::contact::{Contact, ContactFields};
    use std::cmp::Ordering;

    fn contact(id: i64, first: &str, last: &str, phone1: &str, phone2: &str) -> Contact {
        Contact::from_fields(id, ContactFields::new(first, last, phone1, phone2, ""))
    }

    fn names(contacts: &[Contact]) -> Vec<(String, String)> {
        contacts
            .iter()
            .map(|c| (c.last_name.clone(), c.first_name.clone()))
            .collect()
    }

    #[test]
    fn sorts_by_last_then_first_name() {
        let sorted = sort_contacts(vec![
            contact(1, "B", "Smith", "", ""),
            contact(2, "A", "Smith", "", ""),
            contact(3, "A", "Adams", "", ""),
        ]);
        assert_eq!(
            names(&sorted),
            vec![
                ("Adams".to_string(), "A".to_string()),
                ("Smith".to_string(), "A".to_string()),
                ("Smith".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn phones_break_name_ties_in_slot_order() {
        let sorted = sort_contacts(vec![
            contact(1, "A", "Smith", "2", "0"),
            contact(2, "A", "Smith", "1", "9"),
            contact(3, "A", "Smith", "1", "5"),
        ]);
        let ids: Vec<i64> = sorted.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn phone3_is_the_last_tie_breaker() {
        let fields = |phone3: &str| ContactFields::new("A", "Smith", "1", "2", phone3);
        let sorted = sort_contacts(vec![
            Contact::from_fields(1, fields("9")),
            Contact::from_fields(2, fields("")),
            Contact::from_fields(3, fields("10")),
        ]);
        let ids: Vec<i64> = sorted.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let sorted = sort_contacts(vec![
            contact(9, "A", "Smith", "1", ""),
            contact(4, "A", "Smith", "1", ""),
        ]);
        let ids: Vec<i64> = sorted.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 4]);
        assert_eq!(compare_contacts(&sorted[0], &sorted[1]), Ordering::Equal);
    }

    #[test]
    fn comparison_is_case_sensitive_bytewise() {
        let upper = contact(1, "", "Zed", "", "");
        let lower = contact(2, "", "adams", "", "");
        assert_eq!(compare_contacts(&upper, &lower), Ordering::Less);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(sort_contacts(Vec::new()).is_empty());
    }

    #[test]
    fn repeated_sorts_are_identical() {
        let input = vec![
            contact(1, "Kirill", "Darievich", "555", ""),
            contact(2, "Ivan", "Ivanov", "123", ""),
            contact(3, "Alexander", "Alexandrov", "987", ""),
        ];
        assert_eq!(sort_contacts(input.clone()), sort_contacts(input));
    }
}
