//! linrec library: application logic for the recurrence evaluator binary.

pub mod app;
pub mod config;
pub mod errors;
