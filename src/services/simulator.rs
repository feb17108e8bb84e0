//! Ledger simulation
//!
//! Walks ordered events from a starting balance. Amounts stay unrounded here;
//! rounding to cents happens only when the ledger is displayed.

use tracing::debug;

use crate::models::{Event, Ledger, LedgerRow};

/// Apply `events` in order to `starting_balance`
///
/// The minimum is taken over the rows and its date is the first row that
/// reaches it. An empty event list yields the starting balance with no date.
pub fn simulate(events: &[Event], starting_balance: f64) -> Ledger {
    let mut balance = starting_balance;
    let mut minimum: Option<(f64, chrono::NaiveDate)> = None;
    let mut rows = Vec::with_capacity(events.len());

    for event in events {
        balance += event.inflow - event.outflow;
        if minimum.map_or(true, |(min, _)| balance < min) {
            minimum = Some((balance, event.date));
        }
        rows.push(LedgerRow {
            event: event.clone(),
            balance,
        });
    }

    let (min_balance, min_date) = match minimum {
        Some((min, date)) => (min, Some(date)),
        None => (starting_balance, None),
    };

    debug!(rows = rows.len(), min_balance, "ledger simulated");

    Ledger {
        starting_balance,
        rows,
        min_balance,
        min_date,
    }
}
