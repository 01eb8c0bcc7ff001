//! Shared fixtures for contract tests

#![allow(dead_code)]

use contacts_core::{Contact, ContactDraft, ContactRegistry};

/// Snapshot of a contact's five fields, for before/after comparisons
pub type Fields = (String, String, String, String, String);

/// Build a valid contact with the given identifier and fixed other fields
pub fn valid_contact(contact_id: &str) -> Contact {
    Contact::new(contact_id, "Kai", "Noe", "8087712233", "55 Kapolei Pkwy")
        .expect("fixture contact is valid")
}

/// A draft with every field present and valid
pub fn valid_draft(contact_id: &str) -> ContactDraft {
    ContactDraft::new()
        .with_contact_id(contact_id)
        .with_first_name("Rin")
        .with_last_name("Sato")
        .with_phone("8084459912")
        .with_address("55 Kalakaua Rd")
}

/// Read all five fields of a contact
pub fn fields(contact: &Contact) -> Fields {
    (
        contact.contact_id().to_string(),
        contact.first_name().to_string(),
        contact.last_name().to_string(),
        contact.phone().to_string(),
        contact.address().to_string(),
    )
}

/// Registry pre-populated with valid contacts under `ids`
pub fn registry_with(ids: &[&str]) -> ContactRegistry {
    let mut registry = ContactRegistry::new();
    for id in ids {
        registry.add(valid_contact(id)).expect("fixture ids are unique");
    }
    registry
}

/// Sorted snapshot of every stored contact
pub fn snapshot(registry: &ContactRegistry) -> Vec<Fields> {
    let mut all: Vec<Fields> = registry.iter().map(fields).collect();
    all.sort();
    all
}

/// Assert every registry key equals its contact's identifier
pub fn assert_keys_consistent(registry: &ContactRegistry) {
    for id in registry.contact_ids() {
        let contact = registry.get(id).expect("listed id resolves");
        assert_eq!(contact.contact_id(), id, "key/identifier mismatch");
    }
}

/// Assert the field-level invariants hold for a contact
pub fn assert_contact_valid(contact: &Contact) {
    assert!(contact.contact_id().chars().count() <= 10);
    assert!(contact.first_name().chars().count() <= 10);
    assert!(contact.last_name().chars().count() <= 10);
    assert!(contact.address().chars().count() <= 30);
    assert_eq!(contact.phone().chars().count(), 10);
    assert!(contact.phone().chars().all(|c| c.is_ascii_digit()));
}
