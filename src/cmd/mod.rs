//! Command-line argument definitions, one module per stage binary.

pub mod combiner;
pub mod mapper;
pub mod reducer;
