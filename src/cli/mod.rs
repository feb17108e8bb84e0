//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine.

pub mod run;
pub mod setup;

pub use run::{handle_decide, handle_ledger, handle_summary, profile_path, RunArgs};
pub use setup::{handle_config, handle_init};
