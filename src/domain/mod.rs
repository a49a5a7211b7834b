//! Domain layer: loan inputs, quote results and eligibility rules.
//!
//! Every value type here validates on construction, so the calculator in the
//! application layer only ever sees well-formed inputs.

pub mod eligibility;
pub mod loan;
pub mod quote;
