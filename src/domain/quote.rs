use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Rounds a monetary value to paise.
///
/// Midpoints round away from zero, and the result always carries two decimal
/// places so it prints as `10000.00` rather than `10000`.
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// The computed monthly installment, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanQuoteResult {
    pub monthly_installment: Decimal,
}

/// A quote together with what it costs over the whole tenure.
///
/// Kept flat so it can be written as a single CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub principal: Decimal,
    pub rate: Decimal,
    pub tenure: u32,
    pub emi: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Installment {
    pub month: u32,
    pub opening_balance: Decimal,
    pub installment: Decimal,
    pub interest: Decimal,
    pub principal_component: Decimal,
    pub closing_balance: Decimal,
}
