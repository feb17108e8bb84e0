//! Running-balance ledger
//!
//! The ledger is the simulator's output: every scheduled event in order, with
//! the balance after it is applied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::Event;

/// One event plus the balance it leaves behind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    #[serde(flatten)]
    pub event: Event,
    pub balance: f64,
}

/// The simulated ledger for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub starting_balance: f64,
    pub rows: Vec<LedgerRow>,
    /// Lowest balance over all rows (the starting balance when empty)
    pub min_balance: f64,
    /// First date the minimum is reached, if there are any rows
    pub min_date: Option<NaiveDate>,
}

impl Ledger {
    /// Balance after the last row
    pub fn closing_balance(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.balance)
            .unwrap_or(self.starting_balance)
    }

    /// Rows dated on or before `date`
    ///
    /// Rows are in date order, so this is always a prefix.
    pub fn rows_through(&self, date: NaiveDate) -> &[LedgerRow] {
        let end = self.rows.partition_point(|r| r.event.date <= date);
        &self.rows[..end]
    }

    /// Date of the first inflow positioned after row `index`
    ///
    /// Same-day inflows count when they were ordered after that row.
    pub fn next_inflow_after(&self, index: usize) -> Option<NaiveDate> {
        self.rows
            .iter()
            .skip(index + 1)
            .find(|r| r.event.inflow > 0.0)
            .map(|r| r.event.date)
    }

    /// First row with money going out
    pub fn next_outflow(&self) -> Option<&LedgerRow> {
        self.rows.iter().find(|r| r.event.outflow > 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventSource;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn row(day: u32, inflow: f64, outflow: f64, balance: f64) -> LedgerRow {
        let event = if inflow > 0.0 {
            Event::inflow(date(day), "in", inflow, EventSource::Rent)
        } else {
            Event::outflow(date(day), "out", outflow, EventSource::Rent)
        };
        LedgerRow { event, balance }
    }

    fn sample() -> Ledger {
        Ledger {
            starting_balance: 100.0,
            rows: vec![
                row(2, 0.0, 50.0, 50.0),
                row(5, 300.0, 0.0, 350.0),
                row(5, 0.0, 20.0, 330.0),
                row(9, 0.0, 400.0, -70.0),
            ],
            min_balance: -70.0,
            min_date: Some(date(9)),
        }
    }

    #[test]
    fn test_rows_through_is_inclusive_prefix() {
        let ledger = sample();
        assert_eq!(ledger.rows_through(date(1)).len(), 0);
        assert_eq!(ledger.rows_through(date(5)).len(), 3);
        assert_eq!(ledger.rows_through(date(30)).len(), 4);
    }

    #[test]
    fn test_next_inflow_after() {
        let ledger = sample();
        assert_eq!(ledger.next_inflow_after(0), Some(date(5)));
        assert_eq!(ledger.next_inflow_after(1), None);
        assert_eq!(ledger.next_inflow_after(10), None);
    }

    #[test]
    fn test_closing_balance() {
        let ledger = sample();
        assert_eq!(ledger.closing_balance(), -70.0);
        assert_eq!(ledger.next_outflow().map(|r| r.event.date), Some(date(2)));

        let empty = Ledger {
            starting_balance: 42.0,
            rows: Vec::new(),
            min_balance: 42.0,
            min_date: None,
        };
        assert!(empty.is_empty());
        assert_eq!(empty.closing_balance(), 42.0);
    }
}
