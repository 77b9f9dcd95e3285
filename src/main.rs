use bankchain::application::chain::Outcome;
use bankchain::application::session::{BatchRequest, Session};
use bankchain::domain::account::Amount;
use bankchain::error::PaymentError;
use bankchain::interfaces::csv::payment_writer::PaymentWriter;
use bankchain::interfaces::json::bank_reader::load_accounts;
use clap::Parser;
use log::info;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    SingleAmount,
    Batch,
}

impl FromStr for Mode {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-amount" | "auto" => Ok(Mode::SingleAmount),
            "batch" | "list" => Ok(Mode::Batch),
            other => Err(PaymentError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: bankchain banks.json single-amount 100.0")]
struct Cli {
    /// JSON file describing the banks, in the order they are tried
    input: PathBuf,

    /// `single-amount` pays AMOUNT once, `batch` makes several fixed payments
    mode: Mode,

    /// Amount to pay, required in single-amount mode
    #[arg(allow_negative_numbers = true)]
    amount: Option<Amount>,

    /// Number of payments made in batch mode
    #[arg(long, default_value_t = 5)]
    count: usize,

    /// Amount of each payment in batch mode
    #[arg(long, default_value = "500.0")]
    batch_amount: Amount,

    /// Also write the payment history as CSV to this file
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<()> {
    miette::set_panic_hook();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("loading banks from {}", cli.input.display());

    let accounts = load_accounts(&cli.input)?;
    let mut session = Session::new(accounts);

    let outcomes: Vec<Outcome> = match cli.mode {
        Mode::SingleAmount => {
            let amount = cli.amount.ok_or(PaymentError::MissingAmount)?;
            vec![session.process_single(amount.value())?]
        }
        Mode::Batch => session.process_batch(BatchRequest {
            count: cli.count,
            amount: cli.batch_amount.value(),
        })?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in &outcomes {
        writeln!(out, "{outcome}").into_diagnostic()?;
    }

    writeln!(out, "Payment history:").into_diagnostic()?;
    for record in session.log() {
        writeln!(out, "  {record}").into_diagnostic()?;
    }
    writeln!(out, "Final balances:").into_diagnostic()?;
    for account in session.accounts() {
        writeln!(out, "  {account}").into_diagnostic()?;
    }

    if let Some(path) = cli.history {
        let file = File::create(&path).into_diagnostic()?;
        PaymentWriter::new(file).write_log(session.log())?;
        info!("payment history written to {}", path.display());
    }

    Ok(())
}
