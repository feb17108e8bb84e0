//! Obligation model
//!
//! Monthly bills keyed to a day of the month: cards paid in full, lines of
//! credit paid at their interest-only minimum, and the household rent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ObligationId;

/// How an obligation is paid each month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationKind {
    /// The whole balance is paid on the due date (credit card)
    #[serde(alias = "cc")]
    FixedFull,
    /// Only the monthly interest is paid (line of credit)
    #[serde(alias = "loc")]
    RevolvingMinimum,
}

impl fmt::Display for ObligationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedFull => write!(f, "full balance"),
            Self::RevolvingMinimum => write!(f, "minimum"),
        }
    }
}

/// A recurring monthly obligation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obligation {
    #[serde(default = "ObligationId::nil")]
    pub id: ObligationId,
    pub label: String,
    pub kind: ObligationKind,
    /// Day of month the payment is due (1-31). `None` means not configured.
    #[serde(default)]
    pub due_day: Option<u32>,
    #[serde(default)]
    pub balance: f64,
    /// Annual percentage rate. Only meaningful for revolving obligations.
    #[serde(default)]
    pub annual_rate_percent: f64,
    /// Only meaningful for revolving obligations.
    #[serde(default)]
    pub credit_limit: f64,
}

impl Obligation {
    /// A card or bill paid in full each month
    pub fn fixed_full(label: impl Into<String>, due_day: u32, balance: f64) -> Self {
        Self {
            id: ObligationId::new(),
            label: label.into(),
            kind: ObligationKind::FixedFull,
            due_day: Some(due_day),
            balance,
            annual_rate_percent: 0.0,
            credit_limit: 0.0,
        }
    }

    /// A line of credit paying its interest-only minimum each month
    pub fn revolving_minimum(
        label: impl Into<String>,
        due_day: u32,
        balance: f64,
        annual_rate_percent: f64,
        credit_limit: f64,
    ) -> Self {
        Self {
            id: ObligationId::new(),
            label: label.into(),
            kind: ObligationKind::RevolvingMinimum,
            due_day: Some(due_day),
            balance,
            annual_rate_percent,
            credit_limit,
        }
    }

    pub fn is_revolving(&self) -> bool {
        self.kind == ObligationKind::RevolvingMinimum
    }

    /// The payment due each month
    ///
    /// Revolving obligations without a positive rate pay zero; the scheduler
    /// reports that case as a warning.
    pub fn monthly_payment(&self) -> f64 {
        match self.kind {
            ObligationKind::FixedFull => self.balance,
            ObligationKind::RevolvingMinimum if self.annual_rate_percent > 0.0 => {
                self.balance * (self.annual_rate_percent / 100.0) / 12.0
            }
            ObligationKind::RevolvingMinimum => 0.0,
        }
    }

    /// Unused credit on a revolving obligation
    pub fn available_credit(&self) -> f64 {
        if !self.is_revolving() {
            return 0.0;
        }
        (self.credit_limit - self.balance).max(0.0)
    }
}

/// The household rent, due on the same day every month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rent {
    #[serde(default = "default_rent_label")]
    pub label: String,
    pub amount: f64,
    pub due_day: u32,
}

fn default_rent_label() -> String {
    "Rent".to_string()
}

impl Rent {
    pub fn new(amount: f64, due_day: u32) -> Self {
        Self {
            label: default_rent_label(),
            amount,
            due_day,
        }
    }
}
