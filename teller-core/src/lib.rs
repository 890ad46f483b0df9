//! Teller Core
//!
//! In-memory account ledger with a dice game, built for one interactive
//! session per process.
//!
//! # Architecture
//!
//! - **Single Owner**: One [`Ledger`] per process, mutated through `&mut`
//! - **Typed Outcomes**: Business results are enums whose `Display` is the exact user-facing line
//! - **Narrow Errors**: Only a non-numeric or negative amount is an [`Error`]; declines are outcomes
//! - **Injected Dice**: The gamble draws from a [`DieSource`], so a seed replays a session
//!
//! # Invariants
//!
//! - Balances change only through the operation methods
//! - Validated amounts are non-negative; only the gamble can push a balance below zero
//! - A declined operation leaves every balance untouched
//! - Same seed, same script, same transcript

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod ledger;
pub mod dice;
pub mod error;
pub mod config;

// Re-exports
pub use config::{Config, ConfigError, OpeningAccount};
pub use dice::{DieSource, StdDie, DIE_FACES};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use types::{parse_amount, AccountId, AmountKind, GambleOutcome, Outcome};
