//! Configuration types for the contact registry
//!
//! A registry can be built from a [`RegistryConfig`], usually deserialized
//! from JSON:
//!
//! ```json
//! {
//!   "initial_capacity": 64,
//!   "contacts": [
//!     { "contact_id": "HX902", "first_name": "Leo", "last_name": "Koa",
//!       "phone": "8083217789", "address": "77 Kapiolani Ave" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::contact::ContactDraft;

/// Upper bound accepted for `initial_capacity`
pub const MAX_INITIAL_CAPACITY: usize = 1_000_000;

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Number of contacts to reserve room for up front
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Contacts to add when the registry is built
    ///
    /// Each entry is validated like any other contact; absent fields are
    /// reported as missing.
    #[serde(default)]
    pub contacts: Vec<ContactDraft>,
}

impl RegistryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            contacts: Vec::new(),
        }
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a seed contact
    pub fn with_contact(mut self, draft: ContactDraft) -> Self {
        self.contacts.push(draft);
        self
    }

    /// Validate the configuration
    ///
    /// Seed contacts are not checked here; they are validated when the
    /// registry is built.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(crate::Error::config(format!(
                "initial_capacity must be <= {} (got {})",
                MAX_INITIAL_CAPACITY, self.initial_capacity
            )));
        }

        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_initial_capacity() -> usize {
    16
}
