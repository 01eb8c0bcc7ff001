// # contacts-core
//
// Core library for the validated in-memory contact registry.
//
// ## Architecture Overview
//
// - **Contact**: five-field record that validates itself on construction
//   and on every mutation
// - **ContactDraft**: contact input with optional fields, used where a value
//   may be absent (seed configuration, piecewise assembly)
// - **ContactRegistry**: identifier-keyed collection enforcing uniqueness and
//   existence, delegating field validation to `Contact`
// - **RegistryConfig**: serde configuration for building a seeded registry
//
// ## Design Principles
//
// 1. **No invalid state**: a `Contact` that exists is valid
// 2. **Stable identity**: the identifier has no setter, so registry keys never drift
// 3. **All or nothing**: a failed operation changes nothing
// 4. **Library-First**: binaries are thin wrappers; the library never installs
//    a tracing subscriber

pub mod config;
pub mod contact;
pub mod error;
pub mod registry;

// Re-export core types for convenience
pub use config::RegistryConfig;
pub use contact::{Contact, ContactDraft};
pub use error::{Error, Field, Result};
pub use registry::ContactRegistry;
