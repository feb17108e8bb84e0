//! Dated cash events
//!
//! Everything the scheduler produces is an `Event`: a single dated movement of
//! money in or out of the household, tagged with the entity that produced it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{IncomeStreamId, ObligationId, PlannedItemId};

/// The profile entity an event was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum EventSource {
    Income(IncomeStreamId),
    Deduction(IncomeStreamId),
    Rent,
    Obligation(ObligationId),
    Planned(PlannedItemId),
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income(id) => write!(f, "{}", id),
            Self::Deduction(id) => write!(f, "{}/deduction", id),
            Self::Rent => write!(f, "rent"),
            Self::Obligation(id) => write!(f, "{}", id),
            Self::Planned(id) => write!(f, "{}", id),
        }
    }
}

/// A single dated cash movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub label: String,
    pub inflow: f64,
    pub outflow: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,
}

impl Event {
    /// Money coming in
    pub fn inflow(date: NaiveDate, label: impl Into<String>, amount: f64, source: EventSource) -> Self {
        Self {
            date,
            label: label.into(),
            inflow: amount,
            outflow: 0.0,
            source: Some(source),
        }
    }

    /// Money going out
    pub fn outflow(date: NaiveDate, label: impl Into<String>, amount: f64, source: EventSource) -> Self {
        Self {
            date,
            label: label.into(),
            inflow: 0.0,
            outflow: amount,
            source: Some(source),
        }
    }

    /// Net effect on the balance
    pub fn net(&self) -> f64 {
        self.inflow - self.outflow
    }

    /// True when the event brings money in overall
    pub fn is_income(&self) -> bool {
        self.inflow > self.outflow
    }
}
