use crate::domain::quote::{Installment, QuoteSummary};
use crate::error::{QuoteError, Result};
use std::io::Write;

/// Writes quote summaries or schedule rows as CSV.
///
/// The header is taken from the first record's field names.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summary(&mut self, summary: &QuoteSummary) -> Result<()> {
        self.writer.serialize(summary)?;
        Ok(())
    }

    pub fn write_schedule(&mut self, rows: &[Installment]) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and hands back the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| QuoteError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::calculator::EmiCalculator;
    use crate::domain::loan::LoanQuoteInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_schedule_header_and_rows() {
        let input = LoanQuoteInput::new(dec!(100), dec!(0), 2).unwrap();
        let rows = EmiCalculator::new().schedule(&input).unwrap();

        let mut writer = QuoteWriter::new(Vec::new());
        writer.write_schedule(&rows).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("month,opening_balance,installment,interest,principal_component,closing_balance")
        );
        assert_eq!(lines.next(), Some("1,100,50.00,0.00,50.00,50.00"));
        assert_eq!(lines.next(), Some("2,50.00,50.00,0.00,50.00,0.00"));
        assert_eq!(lines.next(), None);
    }
}
