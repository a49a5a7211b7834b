use crate::error::QuoteError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The loan amount requested, in rupees.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Principal(Decimal);

impl Principal {
    pub fn new(value: Decimal) -> Result<Self, QuoteError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(QuoteError::invalid("principal must be positive"))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Principal {
    type Error = QuoteError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Principal> for Decimal {
    fn from(principal: Principal) -> Self {
        principal.0
    }
}

/// Nominal annual interest rate expressed as a percentage (`10` is 10%).
///
/// Zero is a valid rate and describes an interest-free loan.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct AnnualRate(Decimal);

impl AnnualRate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(percent: Decimal) -> Result<Self, QuoteError> {
        if percent >= Decimal::ZERO {
            Ok(Self(percent))
        } else {
            Err(QuoteError::invalid("rate cannot be negative"))
        }
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// The monthly rate as a fraction: `percent / 12 / 100`.
    pub fn monthly_fraction(&self) -> Decimal {
        self.0 / dec!(12) / dec!(100)
    }

    pub fn is_interest_free(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for AnnualRate {
    type Error = QuoteError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnnualRate> for Decimal {
    fn from(rate: AnnualRate) -> Self {
        rate.0
    }
}

/// Number of monthly installments. At least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Tenure(u32);

impl Tenure {
    pub fn new(months: i64) -> Result<Self, QuoteError> {
        match u32::try_from(months) {
            Ok(months) if months >= 1 => Ok(Self(months)),
            Ok(_) => Err(QuoteError::invalid(
                "tenure must be a positive integer number of months",
            )),
            Err(_) if months > 0 => Err(QuoteError::invalid("tenure too large to compute")),
            Err(_) => Err(QuoteError::invalid(
                "tenure must be a positive integer number of months",
            )),
        }
    }

    pub fn months(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Tenure {
    type Error = QuoteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tenure> for u32 {
    fn from(tenure: Tenure) -> Self {
        tenure.0
    }
}

/// A validated request for a loan quote.
///
/// The fields can only be built through their validating constructors, so a
/// `LoanQuoteInput` always satisfies `principal > 0`, `rate >= 0` and
/// `tenure >= 1`. Deserialization goes through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    pub principal: Principal,
    #[serde(rename = "rate")]
    pub annual_rate: AnnualRate,
    pub tenure: Tenure,
}

impl LoanQuoteInput {
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_months: i64,
    ) -> Result<Self, QuoteError> {
        Ok(Self {
            principal: Principal::new(principal)?,
            annual_rate: AnnualRate::new(annual_rate_percent)?,
            tenure: Tenure::new(tenure_months)?,
        })
    }
}
