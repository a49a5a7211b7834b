use crate::domain::loan::LoanQuoteInput;
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

pub const DEFAULT_PRINCIPAL: &str = "50000";
pub const DEFAULT_RATE: &str = "10";
pub const DEFAULT_TENURE: &str = "12";

/// Raw text as typed into the calculator's three fields.
///
/// Coerces the text into numbers and then into a validated
/// [`LoanQuoteInput`]. Amounts may carry a leading `₹` and `,` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteForm {
    pub principal: String,
    pub annual_rate: String,
    pub tenure: String,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::new(DEFAULT_PRINCIPAL, DEFAULT_RATE, DEFAULT_TENURE)
    }
}

impl QuoteForm {
    pub fn new(
        principal: impl Into<String>,
        annual_rate: impl Into<String>,
        tenure: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            annual_rate: annual_rate.into(),
            tenure: tenure.into(),
        }
    }

    pub fn into_input(self) -> Result<LoanQuoteInput> {
        let principal = parse_decimal("principal", &self.principal)?;
        let annual_rate = parse_decimal("rate", self.annual_rate.trim().trim_end_matches('%'))?;
        let tenure = parse_months(&self.tenure)?;
        LoanQuoteInput::new(principal, annual_rate, tenure)
    }
}

fn parse_decimal(field: &str, text: &str) -> Result<Decimal> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    Decimal::from_str(&cleaned)
        .map_err(|_| QuoteError::invalid(format!("{field} is not a number: '{}'", text.trim())))
}

fn parse_months(text: &str) -> Result<i64> {
    let not_whole =
        || QuoteError::invalid("tenure must be a positive integer number of months");
    let months = Decimal::from_str(text.trim()).map_err(|_| not_whole())?;
    if !months.fract().is_zero() {
        return Err(not_whole());
    }
    months
        .to_i64()
        .ok_or_else(|| QuoteError::invalid("tenure too large to compute"))
}
