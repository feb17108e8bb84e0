//! User settings for the cashflow CLI
//!
//! Holds the defaults applied when a profile leaves the projection horizon,
//! the safety floor or the same-day ordering policy unset, plus display
//! preferences.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::CashflowPaths;
use crate::error::{CashflowError, CashflowResult};
use crate::models::profile::check_horizon;

/// Ordering of events that fall on the same day
///
/// This decides whether a pay cheque landing on a bill's due date can cover
/// that bill, so it changes breach detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Outflows before inflows (conservative, default)
    #[default]
    ExpensesFirst,
    /// Inflows before outflows
    IncomeFirst,
}

impl TieBreak {
    /// Parse a tie-break policy from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "expenses_first" | "expenses" | "conservative" => Some(Self::ExpensesFirst),
            "income_first" | "income" => Some(Self::IncomeFirst),
            _ => None,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpensesFirst => write!(f, "expenses first"),
            Self::IncomeFirst => write!(f, "income first"),
        }
    }
}

/// User settings for the cashflow CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Days projected past today when a profile does not say
    #[serde(default = "default_horizon_days")]
    pub default_horizon_days: u32,

    /// Safety floor when a profile does not say
    #[serde(default)]
    pub default_floor: f64,

    /// Same-day ordering when a profile does not say
    #[serde(default)]
    pub default_tie_break: TieBreak,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_horizon_days() -> u32 {
    90
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_horizon_days: default_horizon_days(),
            default_floor: 0.0,
            default_tie_break: TieBreak::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CashflowError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CashflowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later, at display or run time
    pub fn validate(&self) -> CashflowResult<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CashflowError::Config(format!(
                "Invalid date format '{}' in settings",
                self.date_format
            )));
        }
        check_horizon("Settings", self.default_horizon_days)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CashflowError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            CashflowError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_horizon_days, 90);
        assert_eq!(settings.default_floor, 0.0);
        assert_eq!(settings.default_tie_break, TieBreak::ExpensesFirst);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_tie_break = TieBreak::IncomeFirst;
        settings.default_floor = 250.0;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_tie_break, TieBreak::IncomeFirst);
        assert_eq!(loaded.default_floor, 250.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.default_horizon_days, 90);
    }

    #[test]
    fn test_invalid_date_format_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format":"%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CashflowError::Config(_)));
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());

        let settings = Settings {
            default_horizon_days: u32::MAX,
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_tie_break_parse() {
        assert_eq!(TieBreak::parse("income-first"), Some(TieBreak::IncomeFirst));
        assert_eq!(TieBreak::parse("EXPENSES_FIRST"), Some(TieBreak::ExpensesFirst));
        assert_eq!(TieBreak::parse("random"), None);
    }
}
