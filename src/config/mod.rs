//! Configuration module for the cashflow CLI
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Defaults for horizon, floor and same-day ordering

pub mod paths;
pub mod settings;

pub use paths::CashflowPaths;
pub use settings::{Settings, TieBreak};
