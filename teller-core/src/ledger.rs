//! The account ledger and its operations
//!
//! Holds the account table and applies validated mutations. Operations
//! return typed outcomes whose `Display` is the exact message a caller
//! shows; only a malformed amount is an error (see [`crate::Error`]).
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use teller_core::{AccountId, Ledger};
//!
//! let mut ledger = Ledger::new();
//! let alice = AccountId::new("alice");
//! ledger.create_account(&alice, Decimal::from(100)).unwrap();
//!
//! let outcome = ledger.deposit(&alice, Decimal::from(50)).unwrap();
//! assert_eq!(
//!     outcome.to_string(),
//!     "Deposited 50 to account alice. New balance is 150.",
//! );
//! ```

use crate::dice::{DieSource, DIE_FACES};
use crate::types::{AccountId, AmountKind, GambleOutcome, Outcome};
use crate::{Error, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory account ledger
///
/// Process-lifetime, single-owner, no persistence: created empty and
/// mutated only through its operation methods. Account ids are unique
/// within the table. Amount inputs are validated non-negative; a balance
/// can go negative only through [`Ledger::gamble`]. Balance arithmetic
/// saturates at the ends of the [`Decimal`] range, so any amount the
/// boundary parser accepts settles without aborting.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Account table: id to balance
    accounts: BTreeMap<AccountId, Decimal>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Number of accounts on the books
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True when no accounts exist yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Current balance, if the account exists
    pub fn balance_of(&self, id: &AccountId) -> Option<Decimal> {
        self.accounts.get(id).copied()
    }

    /// Open an account with an opening balance
    ///
    /// A duplicate id is declined before the amount is examined, so
    /// re-creating an existing account with a negative balance reports
    /// [`Outcome::AlreadyExists`] rather than an error.
    pub fn create_account(
        &mut self,
        id: &AccountId,
        opening_balance: Decimal,
    ) -> Result<Outcome> {
        if self.accounts.contains_key(id) {
            return Ok(Outcome::AlreadyExists);
        }
        if opening_balance < Decimal::ZERO {
            return Err(Error::Negative(AmountKind::InitialBalance));
        }

        self.accounts.insert(id.clone(), opening_balance);
        debug!("Created account {} with balance {}", id, opening_balance);

        Ok(Outcome::Created {
            id: id.clone(),
            balance: opening_balance,
        })
    }

    /// Deposit an amount into an account
    ///
    /// The existence check runs before amount validation: a deposit into a
    /// missing account reports [`Outcome::NoSuchAccount`] even when the
    /// amount is negative.
    pub fn deposit(&mut self, id: &AccountId, amount: Decimal) -> Result<Outcome> {
        let balance = match self.accounts.get_mut(id) {
            Some(balance) => balance,
            None => return Ok(Outcome::NoSuchAccount),
        };
        if amount < Decimal::ZERO {
            return Err(Error::Negative(AmountKind::Deposit));
        }

        *balance = balance.saturating_add(amount);
        let balance = *balance;
        debug!("Deposited {} to {}; balance now {}", amount, id, balance);

        Ok(Outcome::Deposited {
            id: id.clone(),
            amount,
            balance,
        })
    }

    /// Withdraw an amount from an account
    ///
    /// Declines with [`Outcome::InsufficientFunds`] when the balance is
    /// below the requested amount; the balance is left untouched.
    pub fn withdraw(&mut self, id: &AccountId, amount: Decimal) -> Result<Outcome> {
        let balance = match self.accounts.get_mut(id) {
            Some(balance) => balance,
            None => return Ok(Outcome::NoSuchAccount),
        };
        if amount < Decimal::ZERO {
            return Err(Error::Negative(AmountKind::Withdrawal));
        }
        if *balance < amount {
            return Ok(Outcome::InsufficientFunds);
        }

        *balance -= amount;
        let balance = *balance;
        debug!("Withdrew {} from {}; balance now {}", amount, id, balance);

        Ok(Outcome::Withdrew {
            id: id.clone(),
            amount,
            balance,
        })
    }

    /// Report an account's balance
    ///
    /// Cannot fail: a missing account is an ordinary outcome.
    pub fn check_balance(&self, id: &AccountId) -> Outcome {
        match self.accounts.get(id) {
            Some(balance) => Outcome::Balance {
                id: id.clone(),
                balance: *balance,
            },
            None => Outcome::NoSuchAccount,
        }
    }

    /// Move an amount between two accounts
    ///
    /// The same-account check runs before existence, so a nonexistent
    /// self-transfer still reports [`Outcome::SameAccount`]. Debit and
    /// credit land together before the method returns.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> Result<Outcome> {
        if from == to {
            return Ok(Outcome::SameAccount);
        }
        let (from_balance, to_balance) = match (self.accounts.get(from), self.accounts.get(to)) {
            (Some(from_balance), Some(to_balance)) => (*from_balance, *to_balance),
            _ => return Ok(Outcome::UnknownParties),
        };
        if amount < Decimal::ZERO {
            return Err(Error::Negative(AmountKind::Transfer));
        }
        if from_balance < amount {
            return Ok(Outcome::InsufficientSource);
        }

        self.accounts.insert(from.clone(), from_balance - amount);
        self.accounts.insert(to.clone(), to_balance.saturating_add(amount));
        debug!("Transferred {} from {} to {}", amount, from, to);

        Ok(Outcome::Transferred {
            amount,
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// Resolve a bet against the die
    ///
    /// Gate order is fixed: account, then a strictly positive balance,
    /// then stake versus balance, then the chosen number's range. The
    /// sufficiency rule is exactly `stake <= balance` at this moment and a
    /// loss simply subtracts; the stake itself is not sign-checked, which
    /// makes this the one operation that can leave a balance negative.
    pub fn gamble(
        &mut self,
        id: &AccountId,
        stake: Decimal,
        chosen: u8,
        die: &mut dyn DieSource,
    ) -> GambleOutcome {
        let balance = match self.accounts.get(id) {
            Some(balance) => *balance,
            None => return GambleOutcome::NoSuchAccount,
        };
        if balance <= Decimal::ZERO {
            return GambleOutcome::NoBalance;
        }
        if stake > balance {
            return GambleOutcome::BetTooLarge;
        }
        if !(1..=DIE_FACES).contains(&chosen) {
            return GambleOutcome::InvalidNumber;
        }

        let roll = die.roll();
        debug!("Gamble on {}: rolled {} against chosen {}", id, roll, chosen);

        if roll == chosen {
            let balance = balance.saturating_add(stake);
            self.accounts.insert(id.clone(), balance);
            GambleOutcome::Won {
                roll,
                stake,
                balance,
            }
        } else if roll.abs_diff(chosen) == 1 {
            GambleOutcome::Push { roll, balance }
        } else {
            let balance = balance.saturating_sub(stake);
            self.accounts.insert(id.clone(), balance);
            GambleOutcome::Lost {
                roll,
                stake,
                balance,
            }
        }
    }
}
