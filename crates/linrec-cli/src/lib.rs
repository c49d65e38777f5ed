//! # linrec-cli
//!
//! Result presentation, output formatting, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{
    CLIResultPresenter, JsonResultPresenter, ResultPresenter, SequenceEntry, TermReport,
};
