//! Windowed safety analysis
//!
//! Each anchor is judged on the ledger prefix up to its own due date. A later
//! recovery must not hide a shortfall that happens before a bill is paid, so
//! the household's overall minimum is never used here.

use chrono::NaiveDate;
use tracing::debug;

use super::calendar::{is_valid_due_day, next_due_on_or_after};
use crate::models::{Anchor, AnchorVerdict, Breach, EventSource, Ledger, Profile};

/// Evaluate every anchor independently against the same ledger
pub fn analyze(ledger: &Ledger, anchors: &[Anchor], floor: f64) -> Vec<AnchorVerdict> {
    anchors
        .iter()
        .map(|anchor| evaluate(ledger, anchor, floor))
        .collect()
}

/// Evaluate one anchor
pub fn evaluate(ledger: &Ledger, anchor: &Anchor, floor: f64) -> AnchorVerdict {
    let window = ledger.rows_through(anchor.date);

    let mut min_balance = ledger.starting_balance;
    let mut min_date = None;
    for row in window {
        if min_date.is_none() || row.balance < min_balance {
            min_balance = row.balance;
            min_date = Some(row.event.date);
        }
    }

    let first_breach = window
        .iter()
        .enumerate()
        .find(|(_, row)| row.balance < floor)
        .map(|(index, row)| Breach {
            row: index,
            event: row.event.clone(),
            balance: row.balance,
        });

    debug!(
        anchor = %anchor.label,
        date = %anchor.date,
        window = window.len(),
        safe = first_breach.is_none(),
        "anchor evaluated"
    );

    AnchorVerdict {
        anchor: anchor.clone(),
        safe: first_breach.is_none(),
        floor,
        min_balance,
        min_date,
        first_breach,
    }
}

/// The default anchor set: the next due date of rent and of every
/// obligation that would be scheduled, up to `horizon_end`
///
/// Anchors are ordered by date; ties keep profile order with rent first.
pub fn derive_anchors(profile: &Profile, today: NaiveDate, horizon_end: NaiveDate) -> Vec<Anchor> {
    let rent = profile
        .rent
        .iter()
        .filter(|rent| rent.amount > 0.0)
        .filter_map(|rent| {
            Some(Anchor {
                source: EventSource::Rent,
                label: rent.label.clone(),
                date: next_due_on_or_after(today, rent.due_day)?,
            })
        });

    let obligations = profile
        .obligations
        .iter()
        .filter(|o| o.balance > 0.0)
        .filter_map(|o| {
            let due_day = o.due_day.filter(|d| is_valid_due_day(*d))?;
            Some(Anchor {
                source: EventSource::Obligation(o.id),
                label: o.label.clone(),
                date: next_due_on_or_after(today, due_day)?,
            })
        });

    let mut anchors: Vec<Anchor> = rent
        .chain(obligations)
        .filter(|anchor| anchor.date <= horizon_end)
        .collect();
    anchors.sort_by_key(|anchor| anchor.date);
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, LedgerRow, Obligation, Rent};
    use crate::services::simulator::simulate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn anchor(label: &str, date: NaiveDate) -> Anchor {
        Anchor {
            source: EventSource::Rent,
            label: label.into(),
            date,
        }
    }

    fn ledger() -> Ledger {
        simulate(
            &[
                Event::outflow(date(3, 5), "Card", 300.0, EventSource::Rent),
                Event::inflow(date(3, 10), "Pay", 1000.0, EventSource::Rent),
                Event::outflow(date(3, 20), "Rent", 200.0, EventSource::Rent),
            ],
            100.0,
        )
    }

    #[test]
    fn test_early_breach_not_masked_by_recovery() {
        let ledger = ledger();
        let verdict = evaluate(&ledger, &anchor("Rent", date(3, 20)), 0.0);

        assert!(!verdict.safe);
        let breach = verdict.first_breach.as_ref().unwrap();
        assert_eq!(breach.date(), date(3, 5));
        assert_eq!(breach.row, 0);
        assert_eq!(breach.balance, -200.0);
        assert_eq!(verdict.shortfall(), 200.0);
        assert_eq!(verdict.min_balance, -200.0);
        assert_eq!(verdict.min_date, Some(date(3, 5)));
    }

    #[test]
    fn test_window_excludes_later_rows() {
        let ledger = simulate(
            &[
                Event::inflow(date(3, 10), "Pay", 1000.0, EventSource::Rent),
                Event::outflow(date(3, 20), "Big", 2000.0, EventSource::Rent),
            ],
            0.0,
        );
        let early = evaluate(&ledger, &anchor("Early", date(3, 15)), 0.0);
        let late = evaluate(&ledger, &anchor("Late", date(3, 20)), 0.0);

        assert!(early.safe);
        assert_eq!(early.min_balance, 1000.0);
        assert!(!late.safe);
    }

    #[test]
    fn test_anchor_date_is_inclusive() {
        let verdict = evaluate(&ledger(), &anchor("Card", date(3, 5)), 0.0);
        assert!(!verdict.safe);
    }

    #[test]
    fn test_floor_above_zero() {
        let ledger = simulate(
            &[Event::outflow(date(3, 5), "Card", 50.0, EventSource::Rent)],
            300.0,
        );
        assert!(evaluate(&ledger, &anchor("Card", date(3, 5)), 250.0).safe);
        let verdict = evaluate(&ledger, &anchor("Card", date(3, 5)), 251.0);
        assert!(!verdict.safe);
        assert!((verdict.shortfall() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_window() {
        let verdict = evaluate(&ledger(), &anchor("Soon", date(3, 1)), 0.0);
        assert!(verdict.safe);
        assert_eq!(verdict.min_balance, 100.0);
        assert_eq!(verdict.min_date, None);
    }

    #[test]
    fn test_analyze_keeps_anchor_order() {
        let anchors = vec![anchor("B", date(3, 20)), anchor("A", date(3, 1))];
        let verdicts = analyze(&ledger(), &anchors, 0.0);
        let labels: Vec<_> = verdicts.iter().map(|v| v.anchor.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }

    #[test]
    fn test_verdict_matches_prefix_definition() {
        let ledger = ledger();
        for day in 1..=31 {
            let verdict = evaluate(&ledger, &anchor("X", date(3, day)), 0.0);
            let breached = ledger
                .rows
                .iter()
                .filter(|r: &&LedgerRow| r.event.date <= date(3, day))
                .any(|r| r.balance < 0.0);
            assert_eq!(verdict.safe, !breached, "day {}", day);
        }
    }

    #[test]
    fn test_derive_anchors() {
        let mut unset = Obligation::fixed_full("Unset", 1, 100.0);
        unset.due_day = None;
        let card = Obligation::fixed_full("AMEX", 16, 500.0);
        let profile = Profile {
            rent: Some(Rent::new(1500.0, 28)),
            obligations: vec![
                card.clone(),
                Obligation::fixed_full("Paid off", 3, 0.0),
                unset,
                Obligation::fixed_full("Far", 2, 10.0),
            ],
            ..Profile::default()
        };

        let anchors = derive_anchors(&profile, date(3, 10), date(3, 31));
        assert_eq!(
            anchors,
            vec![
                Anchor {
                    source: EventSource::Obligation(card.id),
                    label: "AMEX".into(),
                    date: date(3, 16),
                },
                Anchor {
                    source: EventSource::Rent,
                    label: "Rent".into(),
                    date: date(3, 28),
                },
            ]
        );
    }
}
