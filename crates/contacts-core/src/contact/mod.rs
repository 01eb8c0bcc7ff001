// # Contact Record
//
// A five-field contact value that validates itself.
//
// ## Invariants
//
// A constructed `Contact` always satisfies:
// - `contact_id`, `first_name`, `last_name`: at most 10 characters
// - `address`: at most 30 characters
// - `phone`: exactly 10 characters, each an ASCII digit `0`-`9`
// - `contact_id` is the value given at construction
//
// Lengths are counted in Unicode scalar values (`str::chars`). Nothing is
// trimmed or normalized, and empty text is accepted everywhere except phone.
//
// ## Validation Order
//
// Fields are checked in declaration order. Within a field, presence comes
// first, then length, then (phone only) content. The first failure wins.

pub mod draft;

pub use draft::ContactDraft;

use crate::error::{Error, Field, Result};

/// Maximum length of a contact identifier
pub const MAX_ID_LEN: usize = 10;

/// Maximum length of a given or family name
pub const MAX_NAME_LEN: usize = 10;

/// Maximum length of an address
pub const MAX_ADDRESS_LEN: usize = 30;

/// Exact length of a phone number
pub const PHONE_LEN: usize = 10;

/// A validated contact record
///
/// Fields are private; reads go through accessors and writes go through the
/// `set_*` mutators, which re-run the same validation as [`Contact::new`].
/// There is no setter for the identifier.
///
/// # Example
///
/// ```rust
/// use contacts_core::Contact;
///
/// let mut contact = Contact::new("HX902", "Leo", "Koa", "8083217789", "77 Kapiolani Ave")?;
/// contact.set_phone("8081112233")?;
/// assert_eq!(contact.phone(), "8081112233");
///
/// // A rejected update leaves the stored value alone
/// assert!(contact.set_phone("808-111-22").is_err());
/// assert_eq!(contact.phone(), "8081112233");
/// # Ok::<(), contacts_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    contact_id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl Contact {
    /// Create a contact, validating every field
    ///
    /// # Errors
    ///
    /// - [`Error::TooLong`] if an identifier, name or address exceeds its bound
    /// - [`Error::PhoneLength`] if the phone is not exactly 10 characters
    /// - [`Error::PhoneNonDigit`] if the phone contains a non-digit
    pub fn new(
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            contact_id: require_max_len(Field::ContactId, contact_id.into(), MAX_ID_LEN)?,
            first_name: require_max_len(Field::FirstName, first_name.into(), MAX_NAME_LEN)?,
            last_name: require_max_len(Field::LastName, last_name.into(), MAX_NAME_LEN)?,
            phone: require_phone(phone.into())?,
            address: require_max_len(Field::Address, address.into(), MAX_ADDRESS_LEN)?,
        })
    }

    /// The immutable identifier
    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replace the given name
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<()> {
        self.first_name = require_max_len(Field::FirstName, first_name.into(), MAX_NAME_LEN)?;
        Ok(())
    }

    /// Replace the family name
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<()> {
        self.last_name = require_max_len(Field::LastName, last_name.into(), MAX_NAME_LEN)?;
        Ok(())
    }

    /// Replace the phone number
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<()> {
        self.phone = require_phone(phone.into())?;
        Ok(())
    }

    /// Replace the address
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<()> {
        self.address = require_max_len(Field::Address, address.into(), MAX_ADDRESS_LEN)?;
        Ok(())
    }
}

/// Check a bounded text field, handing the value back on success
pub(crate) fn require_max_len(field: Field, value: String, max: usize) -> Result<String> {
    let len = value.chars().count();
    if len > max {
        return Err(Error::too_long(field, max, len));
    }
    Ok(value)
}

/// Check a phone number: exactly `PHONE_LEN` ASCII digits
pub(crate) fn require_phone(value: String) -> Result<String> {
    let len = value.chars().count();
    if len != PHONE_LEN {
        return Err(Error::PhoneLength { len });
    }

    // ASCII range only; `char::is_numeric` would admit other scripts.
    if let Some((position, found)) = value
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(Error::PhoneNonDigit { position, found });
    }

    Ok(value)
}
