//! Core types for the teller
//!
//! All types are designed for:
//! - Opaque account keys (ids are compared, never parsed)
//! - Exact arithmetic (Decimal for money)
//! - Message-stable rendering (`Display` is the user-facing contract)

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier (opaque, caller-supplied)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create new account ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which argument an amount error is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountKind {
    /// Opening balance handed to create
    InitialBalance,
    /// Deposit amount
    Deposit,
    /// Withdrawal amount
    Withdrawal,
    /// Transfer amount
    Transfer,
    /// Gamble stake
    Bet,
}

impl AmountKind {
    /// Label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            AmountKind::InitialBalance => "Initial balance",
            AmountKind::Deposit => "Deposit amount",
            AmountKind::Withdrawal => "Withdrawal amount",
            AmountKind::Transfer => "Transfer amount",
            AmountKind::Bet => "Bet amount",
        }
    }
}

impl fmt::Display for AmountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse caller-supplied amount text into a [`Decimal`]
///
/// This is the boundary where the "must be a number" error kind arises;
/// past it amounts are typed, and only the negativity check remains inside
/// the operations.
pub fn parse_amount(kind: AmountKind, text: &str) -> Result<Decimal> {
    text.trim().parse::<Decimal>().map_err(|_| Error::NotANumber(kind))
}

/// Result of a non-gambling ledger operation
///
/// Domain-state conflicts (missing account, duplicate account, insufficient
/// funds, same-account transfer) are ordinary variants here, not errors;
/// callers branch on them. `Display` renders the exact message shown to the
/// user, with amounts in normalized form (`300`, `12.5`, `0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Account inserted with its opening balance
    Created {
        /// New account id
        id: AccountId,
        /// Stored opening balance
        balance: Decimal,
    },

    /// Create declined: the id is already on the books
    AlreadyExists,

    /// The named account is not on the books
    NoSuchAccount,

    /// Deposit applied
    Deposited {
        /// Credited account
        id: AccountId,
        /// Deposited amount
        amount: Decimal,
        /// Balance after the deposit
        balance: Decimal,
    },

    /// Withdrawal applied
    Withdrew {
        /// Debited account
        id: AccountId,
        /// Withdrawn amount
        amount: Decimal,
        /// Balance after the withdrawal
        balance: Decimal,
    },

    /// Withdrawal declined: balance below the requested amount
    InsufficientFunds,

    /// Balance inquiry
    Balance {
        /// Account asked about
        id: AccountId,
        /// Current balance
        balance: Decimal,
    },

    /// Transfer declined: source and destination are the same id
    SameAccount,

    /// Transfer declined: source, destination, or both are missing
    UnknownParties,

    /// Transfer declined: source balance below the requested amount
    InsufficientSource,

    /// Transfer applied
    Transferred {
        /// Moved amount
        amount: Decimal,
        /// Debited account
        from: AccountId,
        /// Credited account
        to: AccountId,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { id, balance } => write!(
                f,
                "Account {} created successfully with balance {}.",
                id,
                balance.normalize()
            ),
            Outcome::AlreadyExists => write!(f, "Account already exists."),
            Outcome::NoSuchAccount => write!(f, "Account does not exist."),
            Outcome::Deposited { id, amount, balance } => write!(
                f,
                "Deposited {} to account {}. New balance is {}.",
                amount.normalize(),
                id,
                balance.normalize()
            ),
            Outcome::Withdrew { id, amount, balance } => write!(
                f,
                "Withdrew {} from account {}. New balance is {}.",
                amount.normalize(),
                id,
                balance.normalize()
            ),
            Outcome::InsufficientFunds => write!(f, "Insufficient funds."),
            Outcome::Balance { id, balance } => {
                write!(f, "Account {} has balance {}.", id, balance.normalize())
            }
            Outcome::SameAccount => write!(f, "Cannot transfer to the same account."),
            Outcome::UnknownParties => write!(f, "One or both accounts do not exist."),
            Outcome::InsufficientSource => {
                write!(f, "Insufficient funds in the source account.")
            }
            Outcome::Transferred { amount, from, to } => write!(
                f,
                "Transferred {} from account {} to account {}.",
                amount.normalize(),
                from,
                to
            ),
        }
    }
}

/// Result of a gamble
///
/// The pre-roll rejections never touch the balance. Resolved bets carry the
/// roll and the balance after settlement; [`GambleOutcome::roll`] exposes
/// the roll so callers can report it separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GambleOutcome {
    /// The account is not on the books
    NoSuchAccount,

    /// Balance is not strictly positive; nothing to stake
    NoBalance,

    /// The stake exceeds the current balance
    BetTooLarge,

    /// The chosen number is outside the die's faces
    InvalidNumber,

    /// Exact hit: the stake was credited
    Won {
        /// What the die showed
        roll: u8,
        /// Credited stake
        stake: Decimal,
        /// Balance after the win
        balance: Decimal,
    },

    /// One off: balance unchanged
    Push {
        /// What the die showed
        roll: u8,
        /// Unchanged balance
        balance: Decimal,
    },

    /// Missed: the stake was debited
    Lost {
        /// What the die showed
        roll: u8,
        /// Debited stake
        stake: Decimal,
        /// Balance after the loss
        balance: Decimal,
    },
}

impl GambleOutcome {
    /// Roll behind a resolved bet; `None` for pre-roll rejections
    pub fn roll(&self) -> Option<u8> {
        match self {
            GambleOutcome::Won { roll, .. }
            | GambleOutcome::Push { roll, .. }
            | GambleOutcome::Lost { roll, .. } => Some(*roll),
            _ => None,
        }
    }
}

impl fmt::Display for GambleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GambleOutcome::NoSuchAccount => write!(f, "Account does not exist."),
            GambleOutcome::NoBalance => {
                write!(f, "You don't have any balance to gamble with.")
            }
            GambleOutcome::BetTooLarge => {
                write!(f, "You don't have enough balance to place that bet.")
            }
            GambleOutcome::InvalidNumber => {
                write!(f, "Invalid number. Please choose a number between 1 and 6.")
            }
            GambleOutcome::Won { stake, balance, .. } => write!(
                f,
                "Congratulations! You won {}. Your new balance is {}.",
                stake.normalize(),
                balance.normalize()
            ),
            GambleOutcome::Push { balance, .. } => write!(
                f,
                "You were close! Your balance is still {}.",
                balance.normalize()
            ),
            GambleOutcome::Lost { stake, balance, .. } => write!(
                f,
                "Sorry, you lost {}. Your new balance is {}.",
                stake.normalize(),
                balance.normalize()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_id_round_trip() {
        let id = AccountId::new("a1");
        assert_eq!(id.as_str(), "a1");
        assert_eq!(id.to_string(), "a1");
    }

    #[test]
    fn test_parse_amount_accepts_numbers() {
        assert_eq!(parse_amount(AmountKind::Deposit, "300").unwrap(), dec!(300));
        assert_eq!(parse_amount(AmountKind::Deposit, "12.5").unwrap(), dec!(12.5));
        assert_eq!(parse_amount(AmountKind::Deposit, " 0 ").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount(AmountKind::Deposit, "-7").unwrap(), dec!(-7));
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert_eq!(
            parse_amount(AmountKind::Transfer, "lots"),
            Err(Error::NotANumber(AmountKind::Transfer))
        );
        assert_eq!(
            parse_amount(AmountKind::Bet, ""),
            Err(Error::NotANumber(AmountKind::Bet))
        );
    }

    #[test]
    fn test_outcome_messages() {
        let created = Outcome::Created {
            id: AccountId::new("a1"),
            balance: dec!(1000),
        };
        assert_eq!(
            created.to_string(),
            "Account a1 created successfully with balance 1000."
        );

        let transferred = Outcome::Transferred {
            amount: dec!(300),
            from: AccountId::new("a1"),
            to: AccountId::new("a2"),
        };
        assert_eq!(
            transferred.to_string(),
            "Transferred 300 from account a1 to account a2."
        );

        assert_eq!(Outcome::AlreadyExists.to_string(), "Account already exists.");
        assert_eq!(Outcome::NoSuchAccount.to_string(), "Account does not exist.");
        assert_eq!(Outcome::InsufficientFunds.to_string(), "Insufficient funds.");
        assert_eq!(
            Outcome::SameAccount.to_string(),
            "Cannot transfer to the same account."
        );
        assert_eq!(
            Outcome::UnknownParties.to_string(),
            "One or both accounts do not exist."
        );
        assert_eq!(
            Outcome::InsufficientSource.to_string(),
            "Insufficient funds in the source account."
        );
    }

    #[test]
    fn test_messages_normalize_trailing_zeros() {
        let outcome = Outcome::Deposited {
            id: AccountId::new("a1"),
            amount: dec!(50.00),
            balance: dec!(150.50),
        };
        assert_eq!(
            outcome.to_string(),
            "Deposited 50 to account a1. New balance is 150.5."
        );

        let balance = Outcome::Balance {
            id: AccountId::new("a1"),
            balance: dec!(0.00),
        };
        assert_eq!(balance.to_string(), "Account a1 has balance 0.");
    }

    #[test]
    fn test_gamble_outcome_messages() {
        let won = GambleOutcome::Won {
            roll: 3,
            stake: dec!(200),
            balance: dec!(1200),
        };
        assert_eq!(
            won.to_string(),
            "Congratulations! You won 200. Your new balance is 1200."
        );
        assert_eq!(won.roll(), Some(3));

        let push = GambleOutcome::Push {
            roll: 4,
            balance: dec!(1000),
        };
        assert_eq!(push.to_string(), "You were close! Your balance is still 1000.");

        let lost = GambleOutcome::Lost {
            roll: 6,
            stake: dec!(200),
            balance: dec!(800),
        };
        assert_eq!(
            lost.to_string(),
            "Sorry, you lost 200. Your new balance is 800."
        );

        assert_eq!(GambleOutcome::NoSuchAccount.roll(), None);
        assert_eq!(
            GambleOutcome::NoBalance.to_string(),
            "You don't have any balance to gamble with."
        );
    }
}
