//! Adapters between the outside world and the calculator: form text, CSV
//! streams and rupee formatting.

pub mod csv;
pub mod display;
pub mod form;
