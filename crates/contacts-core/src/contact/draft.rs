//! Contact drafts: contact input where any field may be absent
//!
//! A draft is how absent input reaches the core. It comes from seed
//! configuration (a JSON object with missing keys or `null` values) or from
//! callers assembling a contact piece by piece. Building a draft applies the
//! same checks as [`Contact::new`], with an extra presence check in front of
//! each field.

use serde::{Deserialize, Serialize};

use super::{Contact, MAX_ADDRESS_LEN, MAX_ID_LEN, MAX_NAME_LEN, require_max_len, require_phone};
use crate::error::{Error, Field, Result};

/// Unvalidated contact input
///
/// # Example
///
/// ```rust
/// use contacts_core::{ContactDraft, Error, Field};
///
/// let draft = ContactDraft::new()
///     .with_contact_id("PH001")
///     .with_first_name("Rin")
///     .with_last_name("Sato")
///     .with_address("55 Kalakaua Rd");
///
/// let err = draft.build().unwrap_err();
/// assert!(matches!(err, Error::Missing { field: Field::Phone }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub contact_id: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

impl ContactDraft {
    /// Create an empty draft (every field absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier
    pub fn with_contact_id(mut self, contact_id: impl Into<String>) -> Self {
        self.contact_id = Some(contact_id.into());
        self
    }

    /// Set the given name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the family name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Validate the draft and produce a [`Contact`]
    ///
    /// # Errors
    ///
    /// [`Error::Missing`] for the first absent field, or any error
    /// [`Contact::new`] can return. Fields are checked in declaration order.
    pub fn build(self) -> Result<Contact> {
        let contact_id = require_max_len(
            Field::ContactId,
            require_present(Field::ContactId, self.contact_id)?,
            MAX_ID_LEN,
        )?;
        let first_name = require_max_len(
            Field::FirstName,
            require_present(Field::FirstName, self.first_name)?,
            MAX_NAME_LEN,
        )?;
        let last_name = require_max_len(
            Field::LastName,
            require_present(Field::LastName, self.last_name)?,
            MAX_NAME_LEN,
        )?;
        let phone = require_phone(require_present(Field::Phone, self.phone)?)?;
        let address = require_max_len(
            Field::Address,
            require_present(Field::Address, self.address)?,
            MAX_ADDRESS_LEN,
        )?;

        Ok(Contact {
            contact_id,
            first_name,
            last_name,
            phone,
            address,
        })
    }
}

impl TryFrom<ContactDraft> for Contact {
    type Error = Error;

    fn try_from(draft: ContactDraft) -> Result<Self> {
        draft.build()
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self {
            contact_id: Some(contact.contact_id.clone()),
            first_name: Some(contact.first_name.clone()),
            last_name: Some(contact.last_name.clone()),
            phone: Some(contact.phone.clone()),
            address: Some(contact.address.clone()),
        }
    }
}

fn require_present(field: Field, value: Option<String>) -> Result<String> {
    value.ok_or(Error::missing(field))
}
