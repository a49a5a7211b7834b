pub mod quote_reader;
pub mod quote_writer;
