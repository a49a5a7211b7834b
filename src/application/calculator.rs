use crate::domain::loan::LoanQuoteInput;
use crate::domain::quote::{Installment, LoanQuoteResult, QuoteSummary, to_money};
use crate::error::{QuoteError, Result};
use rust_decimal::{Decimal, MathematicalOps};
use tracing::debug;

/// Longest tenure a schedule is built for: one hundred years of months.
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Computes the equated monthly installment for raw, unvalidated values.
///
/// The values are validated into a [`LoanQuoteInput`] first, so a negative
/// principal or a zero tenure fails with [`QuoteError::InvalidInput`] before
/// the formula runs.
pub fn compute_emi(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_months: i64,
) -> Result<Decimal> {
    let input = LoanQuoteInput::new(principal, annual_rate_percent, tenure_months)?;
    EmiCalculator::new()
        .quote(&input)
        .map(|result| result.monthly_installment)
}

/// Reducing-balance EMI calculator.
///
/// Holds no state between calls apart from an optional cap on the tenure it
/// accepts. Every method is pure: identical inputs always give identical
/// outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmiCalculator {
    max_tenure_months: Option<u32>,
}

impl EmiCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects tenures longer than `months` with `InvalidInput`.
    pub fn with_max_tenure(mut self, months: u32) -> Self {
        self.max_tenure_months = Some(months);
        self
    }

    /// Quotes the monthly installment, rounded to two decimal places.
    ///
    /// A loan so small that its installment rounds to zero paise is rejected
    /// rather than quoted as free.
    pub fn quote(&self, input: &LoanQuoteInput) -> Result<LoanQuoteResult> {
        let monthly_installment = to_money(self.exact_installment(input)?);
        if monthly_installment.is_zero() {
            return Err(QuoteError::invalid("installment rounds to zero"));
        }
        debug!(
            principal = %input.principal.value(),
            rate = %input.annual_rate.percent(),
            tenure = input.tenure.months(),
            emi = %monthly_installment,
            "Quoted loan"
        );
        Ok(LoanQuoteResult {
            monthly_installment,
        })
    }

    /// Quotes the installment and totals it over the tenure.
    pub fn summarize(&self, input: &LoanQuoteInput) -> Result<QuoteSummary> {
        let emi = self.quote(input)?.monthly_installment;
        let principal = input.principal.value();
        let total_payment = emi
            .checked_mul(Decimal::from(input.tenure.months()))
            .map(to_money)
            .ok_or_else(|| QuoteError::invalid("principal too large to compute"))?;

        Ok(QuoteSummary {
            principal,
            rate: input.annual_rate.percent(),
            tenure: input.tenure.months(),
            emi,
            total_payment,
            total_interest: to_money(total_payment - principal),
        })
    }

    /// Builds the month-by-month amortization schedule.
    ///
    /// Interest for each month is charged on the opening balance and rounded to
    /// paise. The final month settles whatever balance remains, so the last
    /// closing balance is exactly zero and the principal components add up to
    /// the principal.
    ///
    /// Tenures above [`MAX_SCHEDULE_MONTHS`] are rejected before any row is
    /// built.
    pub fn schedule(&self, input: &LoanQuoteInput) -> Result<Vec<Installment>> {
        let months = input.tenure.months();
        if months > MAX_SCHEDULE_MONTHS {
            return Err(QuoteError::invalid("tenure too large to compute"));
        }
        let emi = self.quote(input)?.monthly_installment;
        let rate = input.annual_rate.monthly_fraction();

        let mut balance = input.principal.value();
        let mut rows = Vec::new();
        for month in 1..=months {
            let interest = to_money(balance * rate);
            let (installment, principal_component) = if month == months {
                (balance + interest, balance)
            } else {
                let component = (emi - interest).min(balance);
                (component + interest, component)
            };
            let closing_balance = balance - principal_component;

            rows.push(Installment {
                month,
                opening_balance: balance,
                installment,
                interest,
                principal_component,
                closing_balance,
            });
            balance = closing_balance;
        }

        Ok(rows)
    }

    fn exact_installment(&self, input: &LoanQuoteInput) -> Result<Decimal> {
        let months = input.tenure.months();
        if let Some(max) = self.max_tenure_months
            && months > max
        {
            return Err(QuoteError::invalid(format!(
                "tenure exceeds the maximum of {max} months"
            )));
        }

        let principal = input.principal.value();
        let rate = input.annual_rate.monthly_fraction();
        let periods = Decimal::from(months);

        if rate.is_zero() {
            return Ok(principal / periods);
        }

        let growth = (Decimal::ONE + rate)
            .checked_powi(i64::from(months))
            .ok_or_else(|| QuoteError::invalid("tenure too large to compute"))?;
        // The smallest non-zero monthly rate is 1e-28 and 1 + 1e-28 is exact,
        // so growth is strictly above one here.
        let denominator = growth - Decimal::ONE;
        let factor = growth
            .checked_div(denominator)
            .ok_or_else(|| QuoteError::invalid("tenure too large to compute"))?;
        principal
            .checked_mul(rate)
            .and_then(|interest| interest.checked_mul(factor))
            .ok_or_else(|| QuoteError::invalid("principal too large to compute"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(principal: Decimal, rate: Decimal, tenure: i64) -> LoanQuoteInput {
        LoanQuoteInput::new(principal, rate, tenure).unwrap()
    }

    fn reason(err: QuoteError) -> String {
        match err {
            QuoteError::InvalidInput(reason) => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reference_quote() {
        let emi = compute_emi(dec!(50000), dec!(10), 12).unwrap();
        assert_eq!(emi, dec!(4395.79));
        assert_eq!(emi.to_string(), "4395.79");
    }

    #[test]
    fn test_interest_free_quote() {
        let emi = compute_emi(dec!(100000), dec!(0), 10).unwrap();
        assert_eq!(emi.to_string(), "10000.00");
    }

    #[test]
    fn test_interest_free_rounds_to_paise() {
        let emi = compute_emi(dec!(100), dec!(0), 3).unwrap();
        assert_eq!(emi, dec!(33.33));
    }

    #[test]
    fn test_single_month_tenure() {
        // 12% a year is 1% a month.
        let emi = compute_emi(dec!(1000), dec!(12), 1).unwrap();
        assert_eq!(emi, dec!(1010.00));
    }

    #[test]
    fn test_common_home_loan() {
        let emi = compute_emi(dec!(1000000), dec!(8.5), 240).unwrap();
        assert_eq!(emi, dec!(8678.23));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            reason(compute_emi(dec!(-100), dec!(10), 12).unwrap_err()),
            "principal must be positive"
        );
        assert_eq!(
            reason(compute_emi(dec!(1000), dec!(10), 0).unwrap_err()),
            "tenure must be a positive integer number of months"
        );
        assert_eq!(
            reason(compute_emi(dec!(1000), dec!(-1), 12).unwrap_err()),
            "rate cannot be negative"
        );
    }

    #[test]
    fn test_overflowing_tenure_is_reported() {
        let err = compute_emi(dec!(1000), dec!(100), 100_000).unwrap_err();
        assert_eq!(reason(err), "tenure too large to compute");
    }

    #[test]
    fn test_installment_rounding_to_zero_is_rejected() {
        let err = compute_emi(dec!(1), dec!(0), 600).unwrap_err();
        assert_eq!(reason(err), "installment rounds to zero");
        assert_eq!(compute_emi(dec!(6), dec!(0), 600).unwrap(), dec!(0.01));
    }

    #[test]
    fn test_rounding_residue_at_tiny_rate() {
        // Three installments fall a paisa short; the schedule's last month absorbs it.
        let emi = compute_emi(dec!(100), dec!(0.0001), 3).unwrap();
        assert_eq!(emi, dec!(33.33));

        let rows = EmiCalculator::new()
            .schedule(&input(dec!(100), dec!(0.0001), 3))
            .unwrap();
        assert_eq!(rows[2].installment, dec!(33.34));
    }

    #[test]
    fn test_smallest_representable_rate() {
        // 1.2e-25 percent a year is a monthly rate of exactly 1e-28.
        let rate = dec!(0.00000000000000000000000012);
        let emi = compute_emi(dec!(1200), rate, 12).unwrap();
        assert_eq!(emi, dec!(100.00));
    }

    #[test]
    fn test_schedule_rejects_huge_tenure() {
        let calculator = EmiCalculator::new();
        let huge = input(dec!(1000000000000), dec!(0), 10_000_000);
        assert!(calculator.quote(&huge).is_ok());
        assert_eq!(
            reason(calculator.schedule(&huge).unwrap_err()),
            "tenure too large to compute"
        );

        let widest = input(dec!(1000), dec!(0), i64::from(u32::MAX));
        assert!(matches!(
            calculator.schedule(&widest),
            Err(QuoteError::InvalidInput(_))
        ));

        let longest = input(dec!(1000000), dec!(5), i64::from(MAX_SCHEDULE_MONTHS));
        assert_eq!(calculator.schedule(&longest).unwrap().len(), 1200);
    }

    #[test]
    fn test_max_tenure_guard() {
        let calculator = EmiCalculator::new().with_max_tenure(360);
        assert!(calculator.quote(&input(dec!(1000), dec!(10), 360)).is_ok());

        let err = calculator
            .quote(&input(dec!(1000), dec!(10), 361))
            .unwrap_err();
        assert_eq!(reason(err), "tenure exceeds the maximum of 360 months");
    }

    #[test]
    fn test_summary_totals() {
        let summary = EmiCalculator::new()
            .summarize(&input(dec!(50000), dec!(10), 12))
            .unwrap();
        assert_eq!(summary.emi, dec!(4395.79));
        assert_eq!(summary.total_payment, dec!(52749.48));
        assert_eq!(summary.total_interest, dec!(2749.48));
        assert_eq!(summary.tenure, 12);
    }

    #[test]
    fn test_schedule_amortizes_to_zero() {
        let loan = input(dec!(50000), dec!(10), 12);
        let rows = EmiCalculator::new().schedule(&loan).unwrap();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[0].opening_balance, dec!(50000));
        assert_eq!(rows[0].interest, dec!(416.67));
        assert_eq!(rows[0].principal_component, dec!(3979.12));
        assert_eq!(rows[0].installment, dec!(4395.79));

        let last = rows.last().unwrap();
        assert_eq!(last.closing_balance, Decimal::ZERO);

        let repaid: Decimal = rows.iter().map(|row| row.principal_component).sum();
        assert_eq!(repaid, dec!(50000));

        for pair in rows.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
    }

    #[test]
    fn test_interest_free_schedule() {
        let rows = EmiCalculator::new()
            .schedule(&input(dec!(100), dec!(0), 3))
            .unwrap();
        let installments: Vec<Decimal> = rows.iter().map(|row| row.installment).collect();
        assert_eq!(installments, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);
        assert!(rows.iter().all(|row| row.interest.is_zero()));
    }
}
