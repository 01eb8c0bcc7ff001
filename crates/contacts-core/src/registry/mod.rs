//! Identifier-keyed contact registry
//!
//! The registry maps contact identifiers to [`Contact`] records. It owns the
//! uniqueness and existence rules; field validation stays with the record.
//!
//! ## Usage
//!
//! ```rust
//! use contacts_core::{Contact, ContactRegistry, Error};
//!
//! let mut registry = ContactRegistry::new();
//! registry.add(Contact::new("UP123", "Rin", "Koa", "8089987766", "21 King St")?)?;
//!
//! registry.update_first_name("UP123", "Maui")?;
//! assert_eq!(registry.get("UP123").map(|c| c.first_name()), Some("Maui"));
//!
//! // Unknown identifiers are errors, never silent no-ops
//! assert!(matches!(registry.delete("NOPE999"), Err(Error::NotFound(_))));
//! # Ok::<(), contacts_core::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - Every key equals the `contact_id()` of the contact stored under it
//! - A failed operation leaves the registry and its contacts unchanged
//! - Identifier comparison is exact (no case folding)
//! - Iteration order is unspecified

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::contact::Contact;
use crate::error::{Error, Result};

/// In-memory registry of contacts keyed by identifier
///
/// The registry is the sole owner of the contacts added to it. Stored
/// contacts can still be read with [`get`](Self::get) and changed with
/// [`get_mut`](Self::get_mut); since `Contact` only exposes validated
/// mutators and no identifier setter, neither path can break the key
/// invariant.
#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    contacts: HashMap<String, Contact>,
}

impl ContactRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with room for `capacity` contacts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
        }
    }

    /// Create a registry from configuration
    ///
    /// The configuration is validated, then every seed contact is built and
    /// added in order. The first failure is returned and no registry is
    /// produced.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::with_capacity(config.initial_capacity.max(config.contacts.len()));
        for draft in &config.contacts {
            registry.add(draft.clone().build()?)?;
        }

        debug!(contacts = registry.size(), "registry built from configuration");
        Ok(registry)
    }

    /// Add a contact
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateId`] if a contact with the same identifier is
    /// already stored. The stored contact is left untouched.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.contacts.contains_key(contact.contact_id()) {
            return Err(Error::duplicate_id(contact.contact_id()));
        }

        let contact_id = contact.contact_id().to_string();
        debug!(contact_id = %contact_id, "contact added");
        self.contacts.insert(contact_id, contact);
        Ok(())
    }

    /// Remove a contact, returning it
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if nothing is stored under `contact_id`.
    pub fn delete(&mut self, contact_id: &str) -> Result<Contact> {
        let removed = self
            .contacts
            .remove(contact_id)
            .ok_or_else(|| Error::not_found(contact_id))?;

        debug!(contact_id, "contact deleted");
        Ok(removed)
    }

    /// Replace the given name of a stored contact
    pub fn update_first_name(&mut self, contact_id: &str, first_name: impl Into<String>) -> Result<()> {
        self.required_mut(contact_id)?.set_first_name(first_name)?;
        debug!(contact_id, field = "first_name", "contact updated");
        Ok(())
    }

    /// Replace the family name of a stored contact
    pub fn update_last_name(&mut self, contact_id: &str, last_name: impl Into<String>) -> Result<()> {
        self.required_mut(contact_id)?.set_last_name(last_name)?;
        debug!(contact_id, field = "last_name", "contact updated");
        Ok(())
    }

    /// Replace the phone number of a stored contact
    pub fn update_phone(&mut self, contact_id: &str, phone: impl Into<String>) -> Result<()> {
        self.required_mut(contact_id)?.set_phone(phone)?;
        debug!(contact_id, field = "phone", "contact updated");
        Ok(())
    }

    /// Replace the address of a stored contact
    pub fn update_address(&mut self, contact_id: &str, address: impl Into<String>) -> Result<()> {
        self.required_mut(contact_id)?.set_address(address)?;
        debug!(contact_id, field = "address", "contact updated");
        Ok(())
    }

    /// Look up a contact by exact identifier
    pub fn get(&self, contact_id: &str) -> Option<&Contact> {
        trace!(contact_id, "contact lookup");
        self.contacts.get(contact_id)
    }

    /// Look up a contact for in-place mutation
    pub fn get_mut(&mut self, contact_id: &str) -> Option<&mut Contact> {
        trace!(contact_id, "contact lookup (mut)");
        self.contacts.get_mut(contact_id)
    }

    /// Check whether a contact is stored under `contact_id`
    pub fn contains(&self, contact_id: &str) -> bool {
        self.contacts.contains_key(contact_id)
    }

    /// Number of stored contacts
    pub fn size(&self) -> usize {
        self.contacts.len()
    }

    /// Number of stored contacts (alias of [`size`](Self::size))
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Stored identifiers, in no particular order
    pub fn contact_ids(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }

    /// Stored contacts, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    fn required_mut(&mut self, contact_id: &str) -> Result<&mut Contact> {
        self.contacts
            .get_mut(contact_id)
            .ok_or_else(|| Error::not_found(contact_id))
    }
}
