use super::chain::{FallbackChain, Outcome};
use crate::domain::account::{Account, Amount};
use crate::domain::payment::PaymentLog;
use crate::domain::ports::PaymentSource;
use crate::error::Result;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parameters of a batch run: `count` payments of `amount` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchRequest {
    pub count: usize,
    pub amount: Decimal,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            count: 5,
            amount: dec!(500.0),
        }
    }
}

/// Coordinates the payments of one run.
///
/// `Session` owns the fallback chain and the payment log, and hands out order
/// numbers. Every attempt that reaches the chain consumes a number, whether it
/// is paid or not.
pub struct Session<A: PaymentSource = Account> {
    chain: FallbackChain<A>,
    log: PaymentLog,
    next_sequence: u64,
}

impl<A: PaymentSource> Session<A> {
    /// Creates a session over `accounts`, tried in the given order.
    pub fn new(accounts: Vec<A>) -> Self {
        Self {
            chain: FallbackChain::new(accounts),
            log: PaymentLog::new(),
            next_sequence: 1,
        }
    }

    /// Processes one payment.
    ///
    /// An amount that is not strictly positive is rejected before a sequence
    /// number is assigned.
    pub fn process_single(&mut self, amount: Decimal) -> Result<Outcome> {
        let amount = Amount::new(amount)?;
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        debug!("assigned sequence #{sequence} to payment of {amount}");
        Ok(self.chain.attempt(amount, sequence, &mut self.log))
    }

    /// Processes `request.count` payments of `request.amount`, one after the
    /// other. A failed payment does not stop the batch.
    pub fn process_batch(&mut self, request: BatchRequest) -> Result<Vec<Outcome>> {
        // Validate once so an invalid amount fails the whole batch up front.
        Amount::new(request.amount)?;
        (0..request.count)
            .map(|_| self.process_single(request.amount))
            .collect()
    }

    pub fn log(&self) -> &PaymentLog {
        &self.log
    }

    pub fn accounts(&self) -> &[A] {
        self.chain.accounts()
    }

    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }
}
