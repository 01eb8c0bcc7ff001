// # contacts_walkthrough
//
// Embedding example for contacts-core.
//
// This binary is a thin integration layer: it reads configuration from the
// environment, installs a tracing subscriber, builds a registry and drives it
// through a short scripted session. All validation and registry rules live in
// contacts-core.
//
// ## Configuration
//
// - `CONTACTS_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
// - `CONTACTS_SEED_FILE`: optional path to a JSON `RegistryConfig`
//
// ## Example
//
// ```bash
// export CONTACTS_LOG_LEVEL=debug
// export CONTACTS_SEED_FILE=./seed.json
//
// contacts_walkthrough
// ```

use anyhow::{Context, Result};
use contacts_core::{Contact, ContactDraft, ContactRegistry, RegistryConfig};
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for the walkthrough
///
/// - 0: Session completed
/// - 1: Configuration error
/// - 2: Runtime error (an operation that should succeed failed)
#[derive(Debug, Clone, Copy)]
enum WalkthroughExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<WalkthroughExitCode> for ExitCode {
    fn from(code: WalkthroughExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    log_level: String,
    seed_file: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        Self {
            log_level: env::var("CONTACTS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            seed_file: env::var("CONTACTS_SEED_FILE").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Validate the configuration and resolve the log level
    fn log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "CONTACTS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }

    /// Load the registry configuration, from the seed file if one is set
    fn registry_config(&self) -> Result<RegistryConfig> {
        let Some(path) = &self.seed_file else {
            return Ok(RegistryConfig::default());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CONTACTS_SEED_FILE {}", path))?;
        let config = RegistryConfig::from_json_str(&json)
            .with_context(|| format!("Failed to parse CONTACTS_SEED_FILE {}", path))?;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let config = Config::from_env();

    let log_level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return WalkthroughExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return WalkthroughExitCode::ConfigError.into();
    }

    let registry_config = match config.registry_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            return WalkthroughExitCode::ConfigError.into();
        }
    };

    let mut registry = match ContactRegistry::from_config(&registry_config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Invalid seed contacts: {}", e);
            return WalkthroughExitCode::ConfigError.into();
        }
    };
    info!("Registry ready with {} seeded contact(s)", registry.size());

    match run_session(&mut registry) {
        Ok(()) => {
            info!("Walkthrough complete: {} contact(s) stored", registry.size());
            WalkthroughExitCode::Success.into()
        }
        Err(e) => {
            error!("Walkthrough error: {:#}", e);
            WalkthroughExitCode::RuntimeError.into()
        }
    }
}

/// Drive the registry through add, update and delete, including the
/// failures a caller should expect to see.
fn run_session(registry: &mut ContactRegistry) -> Result<()> {
    let contact = Contact::new("UP123", "Rin", "Koa", "8089987766", "21 King St")
        .context("building walkthrough contact")?;
    registry.add(contact).context("adding UP123")?;
    info!("Added UP123");

    let duplicate = Contact::new("UP123", "Miko", "Lane", "8086611199", "88 Nimitz Hwy")?;
    if let Err(e) = registry.add(duplicate) {
        warn!("Rejected as expected: {}", e);
    }

    registry.update_first_name("UP123", "Maui")?;
    registry.update_last_name("UP123", "Zen")?;
    registry.update_phone("UP123", "8081112233")?;
    registry.update_address("UP123", "9 Ward Ave")?;

    if let Err(e) = registry.update_phone("UP123", "808ABC9912") {
        warn!("Rejected as expected: {}", e);
    }

    if let Some(stored) = registry.get("UP123") {
        info!(
            contact_id = stored.contact_id(),
            first_name = stored.first_name(),
            last_name = stored.last_name(),
            phone = stored.phone(),
            address = stored.address(),
            "Current state of UP123"
        );
    }

    let incomplete = ContactDraft::new()
        .with_contact_id("PH001")
        .with_first_name("Rin")
        .with_last_name("Sato")
        .with_address("55 Kalakaua Rd");
    if let Err(e) = incomplete.build() {
        warn!("Rejected as expected: {}", e);
    }

    registry.delete("UP123").context("deleting UP123")?;
    info!("Deleted UP123");

    if let Err(e) = registry.delete("UP123") {
        warn!("Rejected as expected: {}", e);
    }

    Ok(())
}
