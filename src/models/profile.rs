//! Household profile
//!
//! The immutable snapshot the engine runs against. Profiles are edited and
//! stored elsewhere; by the time one reaches the engine it has been loaded and
//! validated, and nothing in the engine mutates it.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::{IncomeStreamId, ObligationId, PlannedItemId};
use super::income::IncomeStream;
use super::obligation::{Obligation, Rent};
use super::planned::PlannedItem;
use crate::config::settings::{Settings, TieBreak};
use crate::error::{CashflowError, CashflowResult};

/// Cash on hand belonging to one household member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashHolding {
    pub label: String,
    pub amount: f64,
}

/// A household's financial profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Days to project past today; settings decide when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_days: Option<u32>,
    /// Minimum acceptable balance; settings decide when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_break: Option<TieBreak>,
    /// Shared cash not tied to a member
    #[serde(default)]
    pub cash_buffer: f64,
    #[serde(default)]
    pub cash: Vec<CashHolding>,
    #[serde(default)]
    pub income: Vec<IncomeStream>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<Rent>,
    #[serde(default)]
    pub obligations: Vec<Obligation>,
    #[serde(default)]
    pub planned: Vec<PlannedItem>,
}

impl Profile {
    /// Cash available on day zero
    pub fn starting_balance(&self) -> f64 {
        self.cash_buffer + self.cash.iter().map(|c| c.amount).sum::<f64>()
    }

    /// Resolve run parameters for `today`, filling gaps from settings
    pub fn run_options(&self, settings: &Settings, today: NaiveDate) -> RunOptions {
        RunOptions {
            today,
            horizon_days: self.horizon_days.unwrap_or(settings.default_horizon_days),
            floor: self.floor.unwrap_or(settings.default_floor),
            tie_break: self.tie_break.unwrap_or(settings.default_tie_break),
        }
    }

    /// Give every entity loaded without an id a stable one
    ///
    /// The id depends only on the entity's kind, position and label, so
    /// loading the same file twice yields identical ids.
    pub fn assign_missing_ids(&mut self) {
        for (index, stream) in self.income.iter_mut().enumerate() {
            if stream.id.is_nil() {
                stream.id = IncomeStreamId::stable(index, &stream.label);
            }
        }
        for (index, obligation) in self.obligations.iter_mut().enumerate() {
            if obligation.id.is_nil() {
                obligation.id = ObligationId::stable(index, &obligation.label);
            }
        }
        for (index, item) in self.planned.iter_mut().enumerate() {
            if item.id.is_nil() {
                item.id = PlannedItemId::stable(index, &item.label);
            }
        }
    }

    /// Check the structural constraints the engine relies on
    ///
    /// Amounts must be finite and non-negative where the model says so.
    /// Scheduling problems (bad cadence, missing dates, out-of-range due
    /// days) are not rejected here; the scheduler reports them as warnings.
    pub fn validate(&self) -> CashflowResult<()> {
        check_finite("Profile", "cash_buffer", self.cash_buffer)?;
        if let Some(days) = self.horizon_days {
            check_horizon("Profile", days)?;
        }
        if let Some(floor) = self.floor {
            check_finite("Profile", "floor", floor)?;
        }

        for holding in &self.cash {
            check_finite(&format!("Cash '{}'", holding.label), "amount", holding.amount)?;
        }

        for stream in &self.income {
            let entity = format!("Income '{}'", stream.label);
            check_non_negative(&entity, "amount", stream.amount)?;
            if let Some(deduction) = &stream.deduction {
                check_non_negative(&entity, "deduction", deduction.amount)?;
            }
        }

        if let Some(rent) = &self.rent {
            check_non_negative("Rent", "amount", rent.amount)?;
        }

        for obligation in &self.obligations {
            let entity = format!("Obligation '{}'", obligation.label);
            check_non_negative(&entity, "balance", obligation.balance)?;
            check_non_negative(&entity, "annual_rate_percent", obligation.annual_rate_percent)?;
            check_non_negative(&entity, "credit_limit", obligation.credit_limit)?;
        }

        for item in &self.planned {
            check_finite(&format!("Planned '{}'", item.label), "amount", item.amount)?;
        }

        Ok(())
    }
}

fn check_finite(entity: &str, field: &str, value: f64) -> CashflowResult<()> {
    if !value.is_finite() {
        return Err(CashflowError::invalid_field(entity, field, "must be a finite number"));
    }
    Ok(())
}

/// Longest projection accepted from a profile or the command line
pub const MAX_HORIZON_DAYS: u32 = 36_600;

/// Reject horizons past `MAX_HORIZON_DAYS`
pub fn check_horizon(entity: &str, days: u32) -> CashflowResult<()> {
    if days > MAX_HORIZON_DAYS {
        return Err(CashflowError::invalid_field(
            entity,
            "horizon_days",
            format!("must be at most {} days", MAX_HORIZON_DAYS),
        ));
    }
    Ok(())
}

fn check_non_negative(entity: &str, field: &str, value: f64) -> CashflowResult<()> {
    check_finite(entity, field, value)?;
    if value < 0.0 {
        return Err(CashflowError::invalid_field(entity, field, "must not be negative"));
    }
    Ok(())
}

/// Fully resolved parameters for one engine run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Injected "today"; the engine never reads the clock
    pub today: NaiveDate,
    pub horizon_days: u32,
    pub floor: f64,
    pub tie_break: TieBreak,
}

impl RunOptions {
    /// Last date included in the projection, saturating at the calendar's end
    pub fn horizon_end(&self) -> NaiveDate {
        self.today
            .checked_add_days(Days::new(u64::from(self.horizon_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}
