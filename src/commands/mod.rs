//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckEntry, CheckReport, run_check};
pub use simple::{SimpleCommand, run_simple};
