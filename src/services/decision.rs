//! The decision pipeline
//!
//! Profile → schedule → ledger → anchor verdicts → funding advice. Every run
//! starts from scratch; nothing is cached between runs and the profile is
//! never modified.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info_span;

use super::anchors::{analyze, derive_anchors};
use super::funding::FundingAdvisor;
use super::scheduler::{next_income_after, EventScheduler};
use super::simulator::simulate;
use crate::models::{
    Anchor, AnchorVerdict, Breach, Event, FundingAdvice, Ledger, Profile, RunOptions,
    ScheduleWarning,
};

/// A verdict plus what to do about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorDecision {
    #[serde(flatten)]
    pub verdict: AnchorVerdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<FundingAdvice>,
}

/// Everything one run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub options: RunOptions,
    pub warnings: Vec<ScheduleWarning>,
    pub ledger: Ledger,
    pub anchors: Vec<AnchorDecision>,
}

/// The one-line answer: is it safe, and if not, what is blocking
#[derive(Debug, Clone, PartialEq)]
pub struct Headline<'a> {
    pub safe: bool,
    /// The first breach when unsafe, otherwise the next outflow
    pub blocking: Option<&'a Event>,
    pub shortfall: f64,
    pub advice: Option<&'a FundingAdvice>,
}

impl Decision {
    /// True when every anchor is safe
    pub fn is_safe(&self) -> bool {
        self.anchors.iter().all(|a| a.verdict.safe)
    }

    /// The unsafe anchor whose breach happens first
    pub fn first_unsafe(&self) -> Option<&AnchorDecision> {
        self.anchors
            .iter()
            .filter_map(|a| a.verdict.first_breach.as_ref().map(|b| (a, b.date())))
            .min_by_key(|(_, date)| *date)
            .map(|(a, _)| a)
    }

    pub fn headline(&self) -> Headline<'_> {
        match self.first_unsafe() {
            Some(decision) => Headline {
                safe: false,
                blocking: decision.verdict.first_breach.as_ref().map(|b| &b.event),
                shortfall: decision.verdict.shortfall(),
                advice: decision.advice.as_ref(),
            },
            None => Headline {
                safe: true,
                blocking: self.ledger.next_outflow().map(|row| &row.event),
                shortfall: 0.0,
                advice: None,
            },
        }
    }
}

/// Runs the full pipeline for one profile snapshot
pub struct DecisionEngine<'a> {
    profile: &'a Profile,
    options: RunOptions,
}

impl<'a> DecisionEngine<'a> {
    pub fn new(profile: &'a Profile, options: RunOptions) -> Self {
        Self { profile, options }
    }

    /// Run against the default anchors (rent and every scheduled obligation)
    pub fn run(&self) -> Decision {
        let anchors = derive_anchors(self.profile, self.options.today, self.options.horizon_end());
        self.run_with_anchors(&anchors)
    }

    /// Run against caller-chosen anchors
    pub fn run_with_anchors(&self, anchors: &[Anchor]) -> Decision {
        let span = info_span!("decision", today = %self.options.today, anchors = anchors.len());
        let _enter = span.enter();

        let schedule = EventScheduler::from_options(&self.options).schedule(self.profile);
        let ledger = simulate(&schedule.events, self.profile.starting_balance());
        let verdicts = analyze(&ledger, anchors, self.options.floor);

        let advisor = FundingAdvisor::from_obligations(&self.profile.obligations);
        let anchors = verdicts
            .into_iter()
            .map(|verdict| {
                let advice = verdict.first_breach.as_ref().and_then(|breach| {
                    let repay = self.repayment_date(&ledger, breach);
                    advisor.recommend(&verdict, repay)
                });
                AnchorDecision { verdict, advice }
            })
            .collect();

        Decision {
            options: self.options,
            warnings: schedule.warnings,
            ledger,
            anchors,
        }
    }

    /// When borrowed money can be repaid: the next ledger inflow after the
    /// breach, else the next pay past the horizon, else the breach day itself
    fn repayment_date(&self, ledger: &Ledger, breach: &Breach) -> NaiveDate {
        ledger
            .next_inflow_after(breach.row)
            .or_else(|| next_income_after(self.profile, breach.date()).map(|(date, _)| date))
            .unwrap_or_else(|| breach.date())
    }
}

/// Convenience wrapper: run with default anchors
pub fn decide(profile: &Profile, options: RunOptions) -> Decision {
    DecisionEngine::new(profile, options).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::TieBreak;
    use crate::models::{CashHolding, IncomeStream, Obligation, Rent};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn options(today: NaiveDate, horizon_days: u32, tie_break: TieBreak) -> RunOptions {
        RunOptions {
            today,
            horizon_days,
            floor: 0.0,
            tie_break,
        }
    }

    fn household() -> Profile {
        Profile {
            cash: vec![CashHolding {
                label: "Alex".into(),
                amount: 100.0,
            }],
            income: vec![IncomeStream::new("Alex pay", 14, date(3, 2), 800.0)],
            obligations: vec![
                Obligation::fixed_full("AMEX", 16, 500.0),
                Obligation::revolving_minimum("LOC", 20, 1000.0, 9.0, 3000.0),
            ],
            ..Profile::default()
        }
    }

    #[test]
    fn test_same_day_pay_covers_bill_income_first() {
        let decision = decide(&household(), options(date(3, 2), 20, TieBreak::IncomeFirst));
        assert!(decision.is_safe());
        let headline = decision.headline();
        assert!(headline.safe);
        assert_eq!(headline.blocking.map(|e| e.date), Some(date(3, 16)));
    }

    #[test]
    fn test_same_day_bill_first_breaches_and_borrows() {
        let decision = decide(&household(), options(date(3, 2), 20, TieBreak::ExpensesFirst));
        assert!(!decision.is_safe());

        let headline = decision.headline();
        assert!(!headline.safe);
        assert_eq!(headline.blocking.map(|e| e.label.as_str()), Some("AMEX (full balance)"));
        assert_eq!(headline.shortfall, 400.0);

        match headline.advice {
            Some(FundingAdvice::Borrow(rec)) => {
                assert_eq!(rec.borrow_amount, 400.0);
                assert_eq!(rec.primary.label, "LOC");
                // Repaid by the pay landing later the same day
                assert_eq!(rec.days, 1);
            }
            other => panic!("unexpected advice {:?}", other),
        }
    }

    #[test]
    fn test_repayment_falls_back_past_horizon() {
        let profile = Profile {
            income: vec![IncomeStream::new("Alex pay", 14, date(3, 15), 800.0)],
            rent: Some(Rent::new(100.0, 5)),
            obligations: vec![Obligation::revolving_minimum("LOC", 28, 1000.0, 9.0, 3000.0)],
            ..Profile::default()
        };
        let decision = decide(&profile, options(date(3, 1), 10, TieBreak::ExpensesFirst));
        let rent = &decision.anchors[0];
        assert!(!rent.verdict.safe);
        match &rent.advice {
            Some(FundingAdvice::Borrow(rec)) => assert_eq!(rec.days, 10),
            other => panic!("unexpected advice {:?}", other),
        }
    }

    #[test]
    fn test_warnings_are_returned() {
        let mut profile = household();
        profile.income[0].cadence_days = 0;
        let decision = decide(&profile, options(date(3, 2), 20, TieBreak::IncomeFirst));
        assert_eq!(decision.warnings.len(), 1);
    }

    #[test]
    fn test_run_with_explicit_anchors() {
        let profile = household();
        let engine = DecisionEngine::new(&profile, options(date(3, 2), 40, TieBreak::ExpensesFirst));
        let decision = engine.run_with_anchors(&[]);
        assert!(decision.anchors.is_empty());
        assert!(decision.is_safe());
        assert!(!decision.ledger.is_empty());
    }

    #[test]
    fn test_runs_are_identical() {
        let profile = household();
        let opts = options(date(3, 2), 90, TieBreak::ExpensesFirst);
        let first = serde_json::to_string(&decide(&profile, opts)).unwrap();
        let second = serde_json::to_string(&decide(&profile, opts)).unwrap();
        assert_eq!(first, second);
    }
}
