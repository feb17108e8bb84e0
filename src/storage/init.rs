//! Starter profile for first-run setup

use std::path::Path;

use chrono::{Days, NaiveDate};

use super::file_io::write_profile;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{CashHolding, IncomeStream, Obligation, PlannedItem, Profile, Rent};

/// A two-earner household with a card, a line of credit and rent
///
/// Pay dates are placed relative to `today` so a fresh profile projects
/// something meaningful straight away.
pub fn sample_profile(today: NaiveDate) -> Profile {
    let back = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(today);
    let ahead = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);

    Profile {
        cash_buffer: 200.0,
        cash: vec![
            CashHolding {
                label: "Alex".into(),
                amount: 650.0,
            },
            CashHolding {
                label: "Sam".into(),
                amount: 300.0,
            },
        ],
        income: vec![
            IncomeStream::new("Alex pay", 14, back(4), 1850.0).with_deduction("Car lease", 210.0),
            IncomeStream::new("Sam pay", 14, back(11), 1400.0),
        ],
        rent: Some(Rent::new(1750.0, 1)),
        obligations: vec![
            Obligation::fixed_full("Visa", 16, 620.0),
            Obligation::revolving_minimum("Line of credit", 22, 4000.0, 9.45, 10000.0),
        ],
        planned: vec![PlannedItem::new(ahead(9), "Car insurance", 180.0)],
        ..Profile::default()
    }
}

/// Write the sample profile to `path`, refusing to overwrite unless `force`
pub fn init_profile(path: &Path, today: NaiveDate, force: bool) -> CashflowResult<Profile> {
    if path.exists() && !force {
        return Err(CashflowError::Profile(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let profile = sample_profile(today);
    write_profile(path, &profile)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::read_profile;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
    }

    #[test]
    fn test_sample_profile_is_valid() {
        let profile = sample_profile(today());
        assert!(profile.validate().is_ok());
        assert_eq!(profile.starting_balance(), 1150.0);
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("household.yaml");

        let written = init_profile(&path, today(), false).unwrap();
        assert_eq!(read_profile(&path).unwrap(), written);

        assert!(init_profile(&path, today(), false).is_err());
        assert!(init_profile(&path, today(), true).is_ok());
    }
}
