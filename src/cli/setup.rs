//! Setup commands: init and config

use std::path::Path;

use chrono::NaiveDate;

use crate::config::{CashflowPaths, Settings};
use crate::error::CashflowResult;
use crate::storage::{init_profile, ProfileFormat};

/// Write a starter profile and persist settings if none exist yet
pub fn handle_init(
    path: &Path,
    today: NaiveDate,
    force: bool,
    paths: &CashflowPaths,
    settings: &Settings,
) -> CashflowResult<()> {
    let profile = init_profile(path, today, force)?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    let format = match ProfileFormat::from_path(path) {
        ProfileFormat::Json => "JSON",
        ProfileFormat::Yaml => "YAML",
    };
    println!("Wrote sample profile ({}) to: {}", format, path.display());
    println!(
        "  {} income streams, {} obligations, {} planned items",
        profile.income.len(),
        profile.obligations.len(),
        profile.planned.len()
    );
    println!();
    println!("Edit it, then run 'cashflow decide {}'.", path.display());
    Ok(())
}

/// Show resolved paths and settings
pub fn handle_config(paths: &CashflowPaths, settings: &Settings) -> CashflowResult<()> {
    println!("Cashflow Configuration");
    println!("======================");
    println!("Data directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Default profile: {}", paths.default_profile().display());
    println!();
    println!("Settings:");
    println!("  Horizon:        {} days", settings.default_horizon_days);
    println!(
        "  Floor:          {}",
        crate::models::Money::from_amount(settings.default_floor)
            .format_with_symbol(&settings.currency_symbol)
    );
    println!("  Same-day order: {}", settings.default_tie_break);
    println!("  Currency:       {}", settings.currency_symbol);
    println!("  Date format:    {}", settings.date_format);
    Ok(())
}
