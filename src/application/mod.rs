//! Application layer containing the quoting logic.
//!
//! `EmiCalculator` is the entry point for single quotes, summaries and
//! amortization schedules; `batch` drives it over a stream of requests.

pub mod batch;
pub mod calculator;
mod proptests;
