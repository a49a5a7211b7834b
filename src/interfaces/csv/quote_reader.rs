use crate::domain::loan::LoanQuoteInput;
use crate::error::{QuoteError, Result};
use std::io::Read;

/// Reads loan quote requests from a CSV source.
///
/// Expects a `principal, rate, tenure` header. Whitespace is trimmed and
/// record lengths are flexible, so a trailing comma does not reject a row.
/// Each row is validated while it is deserialized.
pub struct QuoteRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteRequestReader<R> {
    /// Creates a new `QuoteRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates requests.
    pub fn requests(self) -> impl Iterator<Item = Result<LoanQuoteInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(QuoteError::from))
    }
}
