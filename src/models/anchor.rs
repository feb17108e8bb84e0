//! Anchors and their safety verdicts
//!
//! An anchor is the next due date of one bill. Each anchor is judged only on
//! the part of the ledger up to and including that date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::{Event, EventSource};

/// The next due date of a bill, used as the end of a safety window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub source: EventSource,
    pub label: String,
    pub date: NaiveDate,
}

/// The first event in a window that takes the balance below the floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breach {
    /// Position of the breaching row in the ledger
    pub row: usize,
    pub event: Event,
    pub balance: f64,
}

impl Breach {
    pub fn date(&self) -> NaiveDate {
        self.event.date
    }

    /// How far below the floor the balance went
    pub fn shortfall(&self, floor: f64) -> f64 {
        floor - self.balance
    }
}

/// Safety verdict for one anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorVerdict {
    pub anchor: Anchor,
    pub safe: bool,
    pub floor: f64,
    /// Lowest balance inside the window
    pub min_balance: f64,
    /// Date of that minimum, absent when the window holds no events
    pub min_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_breach: Option<Breach>,
}

impl AnchorVerdict {
    /// Shortfall at the first breach, zero when safe
    pub fn shortfall(&self) -> f64 {
        self.first_breach
            .as_ref()
            .map(|b| b.shortfall(self.floor))
            .unwrap_or(0.0)
    }
}
