use crate::application::calculator::EmiCalculator;
use crate::domain::loan::LoanQuoteInput;
use crate::error::Result;
use crate::interfaces::csv::quote_writer::QuoteWriter;
use std::io::Write;
use tracing::warn;

/// Counts of what happened during a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub quoted: usize,
    pub skipped: usize,
}

/// Quotes a stream of loan requests, one row at a time.
///
/// A row that fails to parse or to quote is logged and skipped so one bad
/// request never aborts the run. Only write failures are returned as errors.
pub fn quote_batch<I, W>(
    requests: I,
    calculator: &EmiCalculator,
    writer: &mut QuoteWriter<W>,
) -> Result<BatchOutcome>
where
    I: IntoIterator<Item = Result<LoanQuoteInput>>,
    W: Write,
{
    let mut outcome = BatchOutcome::default();

    for (index, request) in requests.into_iter().enumerate() {
        let row = index + 1;
        match request.and_then(|input| calculator.summarize(&input)) {
            Ok(summary) => {
                writer.write_summary(&summary)?;
                outcome.quoted += 1;
            }
            Err(e) => {
                warn!(row, "Skipping quote request {row}: {e}");
                outcome.skipped += 1;
            }
        }
    }

    writer.flush()?;
    Ok(outcome)
}
