//! Projection commands: decide, ledger and summary
//!
//! Each command loads one profile, resolves run options (flags over profile
//! over settings) and runs the engine once.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use serde_json::json;

use crate::config::{CashflowPaths, Settings, TieBreak};
use crate::display::{format_decision, format_ledger, format_warnings};
use crate::error::{CashflowError, CashflowResult};
use crate::models::profile::check_horizon;
use crate::models::{Money, Profile, RunOptions};
use crate::reports::PayCycleReport;
use crate::services::decide;
use crate::storage::read_profile;

/// Overrides shared by every projection command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Date to project from (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true)]
    pub today: Option<String>,
    /// Days to project past today
    #[arg(long, global = true)]
    pub horizon: Option<u32>,
    /// Minimum acceptable balance (e.g. "250" or "250.00")
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub floor: Option<String>,
    /// Same-day ordering: expenses_first or income_first
    #[arg(long, global = true)]
    pub tie_break: Option<String>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

impl RunArgs {
    /// The injected "today", falling back to the local clock
    pub fn today(&self) -> CashflowResult<NaiveDate> {
        match &self.today {
            Some(raw) => parse_date(raw),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }

    /// Resolve run options: flags win over the profile, the profile over settings
    pub fn resolve(&self, profile: &Profile, settings: &Settings) -> CashflowResult<RunOptions> {
        let mut options = profile.run_options(settings, self.today()?);

        if let Some(horizon) = self.horizon {
            check_horizon("--horizon", horizon)?;
            options.horizon_days = horizon;
        }
        if let Some(raw) = &self.floor {
            let floor = Money::parse(raw).map_err(|e| {
                CashflowError::Validation(format!(
                    "Invalid floor: '{}'. Use format like '250.00' or '250'. Error: {}",
                    raw, e
                ))
            })?;
            options.floor = floor.to_amount();
        }
        if let Some(raw) = &self.tie_break {
            options.tie_break = TieBreak::parse(raw).ok_or_else(|| {
                CashflowError::Validation(format!(
                    "Invalid tie-break: '{}'. Valid values: expenses_first, income_first",
                    raw
                ))
            })?;
        }

        Ok(options)
    }
}

fn parse_date(raw: &str) -> CashflowResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        CashflowError::Validation(format!(
            "Invalid date: '{}'. Use format YYYY-MM-DD. Error: {}",
            raw, e
        ))
    })
}

/// Profile path given on the command line, else the one in the data directory
pub fn profile_path(paths: &CashflowPaths, profile: Option<PathBuf>) -> PathBuf {
    profile.unwrap_or_else(|| paths.default_profile())
}

fn load(path: &Path, args: &RunArgs, settings: &Settings) -> CashflowResult<(Profile, RunOptions)> {
    let profile = read_profile(path)?;
    let options = args.resolve(&profile, settings)?;
    Ok((profile, options))
}

/// Run the pipeline and print verdicts and the action
pub fn handle_decide(path: &Path, args: &RunArgs, settings: &Settings) -> CashflowResult<()> {
    let (profile, options) = load(path, args, settings)?;
    let decision = decide(&profile, options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    print!(
        "{}",
        format_decision(&decision, &settings.date_format, &settings.currency_symbol)
    );
    let warnings = format_warnings(&decision.warnings);
    if !warnings.is_empty() {
        println!();
        print!("{}", warnings);
    }
    Ok(())
}

/// Print the ledger table and warnings
pub fn handle_ledger(path: &Path, args: &RunArgs, settings: &Settings) -> CashflowResult<()> {
    let (profile, options) = load(path, args, settings)?;
    let decision = decide(&profile, options);

    if args.json {
        let body = json!({
            "options": decision.options,
            "warnings": decision.warnings,
            "ledger": decision.ledger,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!(
        "Ledger {} to {} (same-day: {})",
        options.today.format(&settings.date_format),
        options.horizon_end().format(&settings.date_format),
        options.tie_break
    );
    print!(
        "{}",
        format_ledger(&decision.ledger, &settings.date_format, &settings.currency_symbol)
    );
    let warnings = format_warnings(&decision.warnings);
    if !warnings.is_empty() {
        println!();
        print!("{}", warnings);
    }
    Ok(())
}

/// Print the pay-cycle summary
pub fn handle_summary(path: &Path, args: &RunArgs, settings: &Settings) -> CashflowResult<()> {
    let (profile, options) = load(path, args, settings)?;
    let decision = decide(&profile, options);
    let report = PayCycleReport::generate(&profile, &options, &decision.ledger);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }
    Ok(())
}
