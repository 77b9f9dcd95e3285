use crate::domain::account::{Account, Amount, Balance};
use crate::domain::payment::{PaymentLog, PaymentRecord};
use crate::domain::ports::PaymentSource;
use log::{info, warn};
use std::fmt;

/// The result of a single payment attempt.
///
/// Running out of funds is an expected outcome, not an error: the session keeps
/// going after it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A bank covered the payment and it was logged.
    Processed {
        sequence: u64,
        bank: String,
        amount: Amount,
        new_balance: Balance,
    },
    /// Every bank in the chain was tried and none could cover the amount.
    InsufficientFunds { sequence: u64, amount: Amount },
    /// The chain has no banks at all.
    NoAccounts { sequence: u64, amount: Amount },
}

impl Outcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Outcome::Processed { .. })
    }

    pub fn sequence(&self) -> u64 {
        match self {
            Outcome::Processed { sequence, .. }
            | Outcome::InsufficientFunds { sequence, .. }
            | Outcome::NoAccounts { sequence, .. } => *sequence,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Processed {
                bank,
                amount,
                new_balance,
                ..
            } => write!(
                f,
                "Payment of {amount} processed by {bank}. New balance: {new_balance}"
            ),
            Outcome::InsufficientFunds { amount, .. } => write!(
                f,
                "Error: could not process the payment of {amount}. Insufficient funds."
            ),
            Outcome::NoAccounts { .. } => {
                write!(f, "Error: no banks available to process the payment.")
            }
        }
    }
}

/// An ordered list of banks tried one after the other.
///
/// The first bank whose balance covers the amount always pays, whatever the
/// other balances are. The order is fixed when the chain is built.
#[derive(Debug, Clone)]
pub struct FallbackChain<A: PaymentSource = Account> {
    accounts: Vec<A>,
}

impl<A: PaymentSource> FallbackChain<A> {
    pub fn new(accounts: Vec<A>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[A] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Routes `amount` down the chain and logs the payment under `sequence`
    /// if some bank covers it.
    pub fn attempt(&mut self, amount: Amount, sequence: u64, log: &mut PaymentLog) -> Outcome {
        if self.accounts.is_empty() {
            warn!("payment #{sequence} of {amount}: no banks available");
            return Outcome::NoAccounts { sequence, amount };
        }

        for account in self.accounts.iter_mut() {
            if !account.debit(amount) {
                info!(
                    "payment #{sequence}: {} cannot cover {amount}, trying next bank",
                    account.name()
                );
                continue;
            }

            log.append(PaymentRecord::new(sequence, account.describe(amount)));
            info!(
                "payment #{sequence} of {amount} processed by {}, new balance {}",
                account.name(),
                account.balance()
            );
            return Outcome::Processed {
                sequence,
                bank: account.name().to_string(),
                amount,
                new_balance: account.balance(),
            };
        }

        warn!("payment #{sequence} of {amount}: insufficient funds in every bank");
        Outcome::InsufficientFunds { sequence, amount }
    }
}
