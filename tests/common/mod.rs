use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a bank document with `banks` in the given order.
pub fn bank_file(banks: &[(&str, &str, &str)]) -> Result<NamedTempFile, Error> {
    let entries: Vec<String> = banks
        .iter()
        .map(|(name, balance, token)| {
            format!(r#""{name}": {{"initial_balance": {balance}, "token": "{token}"}}"#)
        })
        .collect();

    let mut file = NamedTempFile::new()?;
    writeln!(file, r#"{{"banks": {{{}}}}}"#, entries.join(", "))?;
    file.flush()?;
    Ok(file)
}

pub fn galicia_entre_rios() -> Result<NamedTempFile, Error> {
    bank_file(&[
        ("Galicia", "1000.0", "token1"),
        ("Entre Rios", "2000.0", "token2"),
    ])
}
