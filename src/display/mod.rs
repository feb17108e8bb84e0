//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledgers, warnings and decisions for
//! terminal display. Rounding to cents happens here and nowhere earlier.

pub mod decision;
pub mod ledger;
pub mod report;

pub use decision::{format_advice, format_anchor_row, format_decision};
pub use ledger::{format_ledger, format_ledger_row, format_warnings};
