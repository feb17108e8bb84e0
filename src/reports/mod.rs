//! Reports module for the cashflow CLI
//!
//! Reports summarise a finished ledger for people rather than for the
//! decision engine.

pub mod pay_cycle;

pub use pay_cycle::{CycleTotals, PayCycleReport};
