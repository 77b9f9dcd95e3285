use super::account::{Amount, PaymentInfo};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Evidence of one successful debit.
///
/// Records are created by the fallback chain and never modified afterwards.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentRecord {
    sequence: u64,
    #[serde(rename = "bank")]
    account_name: String,
    amount: Amount,
    token: String,
}

impl PaymentRecord {
    pub fn new(sequence: u64, info: PaymentInfo) -> Self {
        Self {
            sequence,
            account_name: info.account_name,
            amount: info.amount,
            token: info.token,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {}: bank {}, amount {}, token {}",
            self.sequence, self.account_name, self.amount, self.token
        )
    }
}

/// Append-only history of the payments made during a session.
#[derive(Debug, Default, Clone)]
pub struct PaymentLog {
    records: Vec<PaymentRecord>,
}

impl PaymentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PaymentRecord) {
        self.records.push(record);
    }

    /// Walks the records in the order they were appended.
    pub fn iter(&self) -> std::slice::Iter<'_, PaymentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every recorded amount.
    pub fn total(&self) -> Decimal {
        self.records.iter().map(|r| r.amount.value()).sum()
    }
}

impl<'a> IntoIterator for &'a PaymentLog {
    type Item = &'a PaymentRecord;
    type IntoIter = std::slice::Iter<'a, PaymentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
