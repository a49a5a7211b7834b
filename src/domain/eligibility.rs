use serde::{Deserialize, Serialize};

pub const MIN_AGE: u32 = 21;
pub const MAX_AGE: u32 = 60;

/// What an applicant declares about themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub indian_resident: bool,
    pub age_years: u32,
    pub stable_income: bool,
    pub kyc_verified: bool,
    pub good_credit_history: bool,
}

/// A single published eligibility requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    IndianResident,
    AgeRange,
    StableIncome,
    ValidKyc,
    GoodCreditHistory,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::IndianResident,
        Criterion::AgeRange,
        Criterion::StableIncome,
        Criterion::ValidKyc,
        Criterion::GoodCreditHistory,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Criterion::IndianResident => "Indian Resident",
            Criterion::AgeRange => "Age 21 to 60 years",
            Criterion::StableIncome => "Stable Income Source",
            Criterion::ValidKyc => "Valid KYC Documents",
            Criterion::GoodCreditHistory => "Good Credit History",
        }
    }

    pub fn is_met(&self, profile: &ApplicantProfile) -> bool {
        match self {
            Criterion::IndianResident => profile.indian_resident,
            Criterion::AgeRange => (MIN_AGE..=MAX_AGE).contains(&profile.age_years),
            Criterion::StableIncome => profile.stable_income,
            Criterion::ValidKyc => profile.kyc_verified,
            Criterion::GoodCreditHistory => profile.good_credit_history,
        }
    }
}

/// The outcome of checking a profile against every criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub unmet: Vec<Criterion>,
}

impl EligibilityReport {
    pub fn evaluate(profile: &ApplicantProfile) -> Self {
        let unmet = Criterion::ALL
            .into_iter()
            .filter(|criterion| !criterion.is_met(profile))
            .collect();
        Self { unmet }
    }

    pub fn is_eligible(&self) -> bool {
        self.unmet.is_empty()
    }
}
