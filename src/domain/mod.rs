//! Domain types: banks, amounts and the payment history.

pub mod account;
pub mod payment;
pub mod ports;
