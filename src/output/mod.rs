//! Terminal output formatting
//!
//! Display utilities for line mode, `check` results and the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, write_check_report, write_result, write_round_header, write_score,
    write_used_words,
};
