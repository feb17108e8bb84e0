//! One-off planned items
//!
//! A dated expense (or refund, when the amount is negative) that happens once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::PlannedItemId;

/// A one-off planned cash movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedItem {
    #[serde(default = "PlannedItemId::nil")]
    pub id: PlannedItemId,
    pub date: NaiveDate,
    #[serde(default = "default_planned_label")]
    pub label: String,
    /// Positive amounts leave the household, negative amounts come back in.
    pub amount: f64,
}

fn default_planned_label() -> String {
    "Expense".to_string()
}

impl PlannedItem {
    pub fn new(date: NaiveDate, label: impl Into<String>, amount: f64) -> Self {
        Self {
            id: PlannedItemId::new(),
            date,
            label: label.into(),
            amount,
        }
    }

    /// Split the signed amount into (inflow, outflow)
    pub fn flows(&self) -> (f64, f64) {
        if self.amount < 0.0 {
            (-self.amount, 0.0)
        } else {
            (0.0, self.amount)
        }
    }
}
