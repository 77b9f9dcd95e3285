//! Application layer orchestrating payments.
//!
//! `FallbackChain` routes a single payment through the banks in order, and
//! `Session` numbers the payments and keeps the log of the ones that went
//! through.

pub mod chain;
pub mod session;
