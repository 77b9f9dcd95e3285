use super::account::{Amount, Balance, PaymentInfo};

/// Anything the fallback chain can route a payment to.
pub trait PaymentSource {
    fn name(&self) -> &str;
    fn token(&self) -> &str;
    fn balance(&self) -> Balance;
    fn can_process(&self, amount: Amount) -> bool;
    /// Debits `amount` when covered; returns `false` and leaves the balance
    /// untouched otherwise.
    fn debit(&mut self, amount: Amount) -> bool;

    fn describe(&self, amount: Amount) -> PaymentInfo {
        PaymentInfo {
            account_name: self.name().to_string(),
            amount,
            token: self.token().to_string(),
        }
    }
}
