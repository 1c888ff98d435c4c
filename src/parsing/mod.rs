//! Parsing of raw upstream catalog entries into enzyme records.

pub mod raw;
