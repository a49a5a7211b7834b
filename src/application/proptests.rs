//! Property-based tests for the EMI calculator.
