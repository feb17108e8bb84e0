//! Recurring income model
//!
//! An income stream pays a fixed amount every `cadence_days` days, counted
//! from the last occurrence the household told us about.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::IncomeStreamId;

/// An obligation paid out of every occurrence of an income stream
/// (for example a car loan or lease taken per pay)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerPayDeduction {
    pub label: String,
    pub amount: f64,
}

/// A recurring income stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStream {
    #[serde(default = "IncomeStreamId::nil")]
    pub id: IncomeStreamId,
    pub label: String,
    /// Days between occurrences. Non-positive values are reported and skipped.
    pub cadence_days: i64,
    /// Most recent known pay date. Missing dates are reported and skipped.
    #[serde(default)]
    pub last_occurrence: Option<NaiveDate>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction: Option<PerPayDeduction>,
}

impl IncomeStream {
    /// Create a new income stream anchored at its last occurrence
    pub fn new(
        label: impl Into<String>,
        cadence_days: i64,
        last_occurrence: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            id: IncomeStreamId::new(),
            label: label.into(),
            cadence_days,
            last_occurrence: Some(last_occurrence),
            amount,
            deduction: None,
        }
    }

    /// Attach a per-pay deduction
    pub fn with_deduction(mut self, label: impl Into<String>, amount: f64) -> Self {
        self.deduction = Some(PerPayDeduction {
            label: label.into(),
            amount,
        });
        self
    }

    /// The deduction, if one is configured with a positive amount
    pub fn active_deduction(&self) -> Option<&PerPayDeduction> {
        self.deduction.as_ref().filter(|d| d.amount > 0.0)
    }
}
