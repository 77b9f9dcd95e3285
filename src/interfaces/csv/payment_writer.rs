use crate::domain::payment::PaymentLog;
use crate::error::Result;
use std::io::Write;

/// Writes the payment history as CSV with a `sequence,bank,amount,token`
/// header.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_log(&mut self, log: &PaymentLog) -> Result<()> {
        if log.is_empty() {
            self.writer
                .write_record(["sequence", "bank", "amount", "token"])?;
        }
        for record in log {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
