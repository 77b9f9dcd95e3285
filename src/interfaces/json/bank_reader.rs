use crate::domain::account::{Account, Balance};
use crate::error::{PaymentError, Result};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BankDocument {
    #[serde(default, alias = "bancos")]
    banks: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct BankEntry {
    initial_balance: Balance,
    token: String,
}

/// Reads the bank configuration from a JSON source.
///
/// The document looks like:
///
/// ```json
/// { "banks": { "Galicia": { "initial_balance": 1000.0, "token": "token1" } } }
/// ```
///
/// Banks come back in document order, which is the order the fallback chain
/// tries them in. A document without a `banks` object yields no banks.
pub struct BankReader<R: Read> {
    source: R,
}

impl<R: Read> BankReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn accounts(self) -> Result<Vec<Account>> {
        let document: BankDocument = serde_json::from_reader(self.source)
            .map_err(|e| PaymentError::ConfigMalformed(e.to_string()))?;

        document
            .banks
            .into_iter()
            .map(|(name, value)| {
                let entry: BankEntry = serde_json::from_value(value)
                    .map_err(|e| PaymentError::ConfigMalformed(format!("bank `{name}`: {e}")))?;
                Account::new(name, entry.initial_balance, entry.token)
            })
            .collect()
    }
}

/// Opens `path` and reads the banks it configures.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PaymentError::ConfigNotFound(path.to_path_buf()),
        _ => PaymentError::Io(e),
    })?;
    let accounts = BankReader::new(BufReader::new(file)).accounts()?;
    debug!("loaded {} bank(s) from {}", accounts.len(), path.display());
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn read(data: &str) -> Result<Vec<Account>> {
        BankReader::new(data.as_bytes()).accounts()
    }

    #[test]
    fn test_reader_keeps_document_order() {
        let data = r#"{"banks": {
            "Zeta": {"initial_balance": 10, "token": "z"},
            "Alpha": {"initial_balance": 20.5, "token": "a"}
        }}"#;
        let accounts = read(data).unwrap();

        let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(accounts[1].balance(), Balance::new(dec!(20.5)));
        assert_eq!(accounts[1].token, "a");
    }

    #[test]
    fn test_reader_accepts_legacy_key() {
        let data = r#"{"bancos": {"Galicia": {"initial_balance": 1000.0, "token": "token1"}}}"#;
        let accounts = read(data).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance(), Balance::new(dec!(1000)));
    }

    #[test]
    fn test_reader_missing_key_yields_no_banks() {
        assert!(read(r#"{"other": 1}"#).unwrap().is_empty());
    }

    #[test]
    fn test_reader_malformed_json() {
        assert!(matches!(
            read("{not json"),
            Err(PaymentError::ConfigMalformed(_))
        ));
        assert!(matches!(read("[]"), Err(PaymentError::ConfigMalformed(_))));
    }

    #[test]
    fn test_reader_bad_entry() {
        let missing_token = r#"{"banks": {"A": {"initial_balance": 1}}}"#;
        let result = read(missing_token);
        assert!(matches!(result, Err(PaymentError::ConfigMalformed(msg)) if msg.contains("`A`")));

        let text_balance = r#"{"banks": {"A": {"initial_balance": "lots", "token": "t"}}}"#;
        assert!(matches!(
            read(text_balance),
            Err(PaymentError::ConfigMalformed(_))
        ));

        let negative = r#"{"banks": {"A": {"initial_balance": -5, "token": "t"}}}"#;
        assert!(matches!(
            read(negative),
            Err(PaymentError::ConfigMalformed(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_accounts(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(PaymentError::ConfigNotFound(_))));
    }
}
