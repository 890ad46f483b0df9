//! Configuration for the teller
//!
//! A small TOML file can seed the die and open accounts before the first
//! prompt. Loading never touches the session contract: config problems
//! surface as [`ConfigError`], not as ledger outcomes.

use crate::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming a config file to load
pub const CONFIG_ENV: &str = "TELLER_CONFIG";

/// Environment variable overriding the die seed
pub const SEED_ENV: &str = "TELLER_SEED";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment override holds an unusable value
    #[error("invalid value {value:?} for {name}")]
    Env {
        /// Variable that was set
        name: String,
        /// Value it carried
        value: String,
    },
}

/// Teller configuration
///
/// Everything is optional: an absent file, an empty file, and the
/// defaults all mean an empty ledger with an entropy-seeded die.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the die; omit to seed from entropy
    pub seed: Option<u64>,

    /// Accounts opened before the session starts
    pub accounts: Vec<OpeningAccount>,
}

/// An account funded before the first prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningAccount {
    /// Account id to create
    pub id: AccountId,

    /// Opening balance, quoted in the file so the digits survive exactly
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load with the standard precedence
    ///
    /// An explicit path wins over `TELLER_CONFIG`; with neither set the
    /// defaults apply. `TELLER_SEED` then overrides whatever seed the
    /// file carried.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Config::from_file(path)?,
            None => match std::env::var(CONFIG_ENV) {
                Ok(path) => Config::from_file(path)?,
                Err(_) => Config::default(),
            },
        };

        if let Ok(raw) = std::env::var(SEED_ENV) {
            let seed = raw.parse::<u64>().map_err(|_| ConfigError::Env {
                name: SEED_ENV.to_string(),
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}
