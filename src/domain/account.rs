use crate::domain::ports::PaymentSource;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::SubAssign;
use std::str::FromStr;

/// Represents the funds a bank has left to pay with.
///
/// A wrapper around `rust_decimal::Decimal` so that money never goes through
/// binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// Represents a strictly positive payment amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::InvalidAmount(value.to_string()))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    /// Parses user input such as `"100"` or `"250.75"`.
    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| PaymentError::InvalidAmount(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// What a bank hands over to the payment log once it has paid.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInfo {
    pub account_name: String,
    pub amount: Amount,
    pub token: String,
}

/// A bank that payments can be routed to.
///
/// The balance only ever changes through [`Account::debit`], which refuses to
/// take it below zero.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Account {
    /// The bank's display name, unique within a configuration.
    pub name: String,
    balance: Balance,
    /// Opaque credential copied into every payment record.
    pub token: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        balance: Balance,
        token: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if balance < Balance::ZERO {
            return Err(PaymentError::ConfigMalformed(format!(
                "bank `{name}` has a negative balance ({balance})"
            )));
        }
        Ok(Self {
            name,
            balance,
            token: token.into(),
        })
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn can_process(&self, amount: Amount) -> bool {
        self.balance >= Balance::from(amount)
    }

    /// Takes `amount` out of the balance if it is covered.
    pub fn debit(&mut self, amount: Amount) -> bool {
        if self.can_process(amount) {
            self.balance -= Balance::from(amount);
            true
        } else {
            false
        }
    }
}

impl PaymentSource for Account {
    fn name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn can_process(&self, amount: Amount) -> bool {
        Account::can_process(self, amount)
    }

    fn debit(&mut self, amount: Amount) -> bool {
        Account::debit(self, amount)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bank {} - Balance: {} - Token: {}",
            self.name, self.balance, self.token
        )
    }
}
