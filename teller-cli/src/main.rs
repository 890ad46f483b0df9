//! Interactive teller session over stdin/stdout
//!
//! Prints a numbered menu, reads answers line by line and prints one
//! message per operation, so a scripted stdin replays a whole session.

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use teller_core::{
    parse_amount, AccountId, AmountKind, Config, DieSource, GambleOutcome, Ledger, Outcome,
    StdDie,
};
use tracing::{info, warn};

/// Interactive in-memory bank teller with a dice table
#[derive(Debug, Parser)]
#[command(name = "teller", version, about)]
struct Opts {
    /// Path to a TOML config file (seed, opening accounts)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the die; wins over config file and environment
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; the transcript owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    let mut config = Config::load(opts.config.as_deref()).context("loading configuration")?;
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }

    let die: Box<dyn DieSource> = match config.seed {
        Some(seed) => Box::new(StdDie::seeded(seed)),
        None => Box::new(StdDie::from_entropy()),
    };

    let mut ledger = Ledger::new();
    for account in &config.accounts {
        let outcome = ledger
            .create_account(&account.id, account.balance)
            .with_context(|| format!("opening account {}", account.id))?;
        if outcome == Outcome::AlreadyExists {
            warn!("Duplicate account {} in config; kept the first balance", account.id);
        } else {
            info!("Opened account {} with balance {}", account.id, account.balance);
        }
    }
    info!("🚀 Teller starting with {} account(s)", ledger.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(ledger, die, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}

/// Whether the session continues after a menu action
///
/// Running out of input mid-operation abandons the half-collected
/// operation and quits; a truncated script never applies a partially
/// answered command.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session over any line-based reader and writer
///
/// Generic over its streams so a test can drive a whole session from a
/// string and capture the transcript.
struct Shell<R, W> {
    ledger: Ledger,
    die: Box<dyn DieSource>,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn new(ledger: Ledger, die: Box<dyn DieSource>, reader: R, writer: W) -> Self {
        Self {
            ledger,
            die,
            reader,
            writer,
        }
    }

    /// Drive the menu until exit or end of input
    fn run(&mut self) -> io::Result<()> {
        loop {
            let flow = match self.menu()? {
                // End of input closes the session like option 7.
                None => Flow::Quit,
                Some(choice) => match choice.as_str() {
                    "1" => self.create_account()?,
                    "2" => self.deposit()?,
                    "3" => self.withdraw()?,
                    "4" => self.check_balance()?,
                    "5" => self.transfer()?,
                    "6" => self.gamble()?,
                    "7" => Flow::Quit,
                    _ => {
                        writeln!(self.writer, "Invalid option, please try again.")?;
                        Flow::Continue
                    }
                },
            };
            if flow == Flow::Quit {
                writeln!(self.writer, "Exiting program.")?;
                return Ok(());
            }
        }
    }

    fn menu(&mut self) -> io::Result<Option<String>> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Options:")?;
        writeln!(self.writer, "1. Create Account")?;
        writeln!(self.writer, "2. Deposit Money")?;
        writeln!(self.writer, "3. Withdraw Money")?;
        writeln!(self.writer, "4. Check Balance")?;
        writeln!(self.writer, "5. Transfer Money")?;
        writeln!(self.writer, "6. Gamble")?;
        writeln!(self.writer, "7. Exit")?;
        self.ask("Choose an option: ")
    }

    /// Print a prompt and read one answer; `None` means end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        Ok(Some(line.to_string()))
    }

    /// Ask for an account id; `None` means input ran out
    fn account_id(&mut self, prompt: &str) -> io::Result<Option<AccountId>> {
        Ok(self.ask(prompt)?.map(AccountId::new))
    }

    /// Print the message for an outcome or a rejected amount
    fn report(&mut self, result: teller_core::Result<Outcome>) -> io::Result<Flow> {
        match result {
            Ok(outcome) => writeln!(self.writer, "{}", outcome)?,
            Err(err) => writeln!(self.writer, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        let id = match self.account_id("Enter account ID: ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        let text = match self.ask("Enter initial balance: ")? {
            Some(text) => text,
            None => return Ok(Flow::Quit),
        };
        // A blank answer opens the account empty.
        let result = if text.is_empty() {
            self.ledger.create_account(&id, Decimal::ZERO)
        } else {
            parse_amount(AmountKind::InitialBalance, &text)
                .and_then(|balance| self.ledger.create_account(&id, balance))
        };
        self.report(result)
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        let id = match self.account_id("Enter account ID: ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        let text = match self.ask("Enter amount to deposit: ")? {
            Some(text) => text,
            None => return Ok(Flow::Quit),
        };
        let result = parse_amount(AmountKind::Deposit, &text)
            .and_then(|amount| self.ledger.deposit(&id, amount));
        self.report(result)
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        let id = match self.account_id("Enter account ID: ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        let text = match self.ask("Enter amount to withdraw: ")? {
            Some(text) => text,
            None => return Ok(Flow::Quit),
        };
        let result = parse_amount(AmountKind::Withdrawal, &text)
            .and_then(|amount| self.ledger.withdraw(&id, amount));
        self.report(result)
    }

    fn check_balance(&mut self) -> io::Result<Flow> {
        let id = match self.account_id("Enter account ID: ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        let outcome = self.ledger.check_balance(&id);
        writeln!(self.writer, "{}", outcome)?;
        Ok(Flow::Continue)
    }

    fn transfer(&mut self) -> io::Result<Flow> {
        let from = match self.account_id("Enter from account ID: ")? {
            Some(from) => from,
            None => return Ok(Flow::Quit),
        };
        let to = match self.account_id("Enter to account ID: ")? {
            Some(to) => to,
            None => return Ok(Flow::Quit),
        };
        let text = match self.ask("Enter amount to transfer: ")? {
            Some(text) => text,
            None => return Ok(Flow::Quit),
        };
        let result = parse_amount(AmountKind::Transfer, &text)
            .and_then(|amount| self.ledger.transfer(&from, &to, amount));
        self.report(result)
    }

    /// One round at the dice table
    ///
    /// Prompts are interleaved with the gates: the bet is only asked for
    /// once the account can gamble at all, and the number only once the
    /// bet fits the balance. The ledger re-checks everything when it rolls.
    fn gamble(&mut self) -> io::Result<Flow> {
        let id = match self.account_id("Enter account ID: ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        let balance = match self.ledger.balance_of(&id) {
            Some(balance) => balance,
            None => {
                writeln!(self.writer, "{}", GambleOutcome::NoSuchAccount)?;
                return Ok(Flow::Continue);
            }
        };
        if balance <= Decimal::ZERO {
            writeln!(self.writer, "{}", GambleOutcome::NoBalance)?;
            return Ok(Flow::Continue);
        }

        let prompt = format!(
            "Enter the amount you want to bet (current balance: {}): ",
            balance.normalize()
        );
        let text = match self.ask(&prompt)? {
            Some(text) => text,
            None => return Ok(Flow::Quit),
        };
        let stake = match parse_amount(AmountKind::Bet, &text) {
            Ok(stake) => stake,
            Err(err) => {
                writeln!(self.writer, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };
        if stake > balance {
            writeln!(self.writer, "{}", GambleOutcome::BetTooLarge)?;
            return Ok(Flow::Continue);
        }

        let text = match self.ask("Choose a number between 1 and 6: ")? {
            Some(text) => text,
            None => return Ok(Flow::Quit),
        };
        // Anything that is not a small positive integer is off the die.
        let chosen = text.trim().parse::<u8>().unwrap_or(0);

        let outcome = self.ledger.gamble(&id, stake, chosen, self.die.as_mut());
        if let Some(roll) = outcome.roll() {
            writeln!(self.writer, "You rolled: {}", roll)?;
        }
        writeln!(self.writer, "{}", outcome)?;
        Ok(Flow::Continue)
    }
}
