//! cashflow - household cash-flow projection engine
//!
//! This library projects a household's cash balance day by day from its
//! pay schedules, monthly obligations and one-off planned items, decides
//! whether each upcoming bill can be paid without the balance dropping below
//! a floor, and when it cannot, proposes the cheapest draw on revolving
//! credit to cover the gap.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Profile, events, ledger, verdicts and funding advice
//! - `services`: The engine (scheduler, simulator, anchors, funding, decision)
//! - `reports`: Pay-cycle summary
//! - `display`: Terminal formatting
//! - `storage`: Profile file I/O
//! - `cli`: Command handlers for the `cashflow` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow::config::{CashflowPaths, Settings};
//! use cashflow::services::decide;
//! use cashflow::storage::read_profile;
//!
//! let paths = CashflowPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let profile = read_profile(paths.default_profile())?;
//! let today = chrono::Local::now().date_naive();
//! let decision = decide(&profile, profile.run_options(&settings, today));
//! println!("safe: {}", decision.is_safe());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CashflowError, CashflowResult};
