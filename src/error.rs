use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("bank file {} was not found", .0.display())]
    #[diagnostic(
        code(bankchain::config::not_found),
        help("pass the path of a JSON document with a top-level `banks` object")
    )]
    ConfigNotFound(PathBuf),

    #[error("bank file is not valid: {0}")]
    #[diagnostic(
        code(bankchain::config::malformed),
        help("each bank needs a non-negative `initial_balance` and a string `token`")
    )]
    ConfigMalformed(String),

    #[error("invalid mode `{0}`")]
    #[diagnostic(
        code(bankchain::cli::invalid_mode),
        help("use `single-amount` or `batch`")
    )]
    InvalidMode(String),

    #[error("an amount is required for single-amount mode")]
    #[diagnostic(
        code(bankchain::cli::missing_amount),
        help("example: bankchain banks.json single-amount 100.0")
    )]
    MissingAmount,

    #[error("invalid amount `{0}`: must be a positive number")]
    #[diagnostic(code(bankchain::payment::invalid_amount))]
    InvalidAmount(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(bankchain::io))]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    #[diagnostic(code(bankchain::csv))]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
