//! Storage layer for the cashflow CLI
//!
//! Profiles live in plain JSON or YAML files chosen by the user; this layer
//! reads, validates and atomically writes them.

pub mod file_io;
pub mod init;

pub use file_io::{read_profile, read_required, write_atomic, write_profile, ProfileFormat};
pub use init::{init_profile, sample_profile};
