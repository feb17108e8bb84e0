//! Event scheduling
//!
//! Expands a profile into the flat, date-ordered list of cash events between
//! today and the horizon end. Scheduling never fails: an entity that cannot be
//! scheduled is left out and reported as a warning.

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::calendar::{cadence_occurrences, is_valid_due_day, monthly_occurrences};
use crate::config::settings::TieBreak;
use crate::models::{
    Event, EventSource, IncomeStream, Obligation, PlannedItem, Profile, Rent, RunOptions,
    ScheduleWarning,
};

/// Scheduler output: ordered events plus anything that was skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub events: Vec<Event>,
    pub warnings: Vec<ScheduleWarning>,
}

/// Expands profiles into dated events for a fixed window
#[derive(Debug, Clone, Copy)]
pub struct EventScheduler {
    today: NaiveDate,
    horizon_end: NaiveDate,
    tie_break: TieBreak,
}

impl EventScheduler {
    /// Create a scheduler covering `today..=horizon_end`
    pub fn new(today: NaiveDate, horizon_end: NaiveDate, tie_break: TieBreak) -> Self {
        Self {
            today,
            horizon_end,
            tie_break,
        }
    }

    /// Create a scheduler from resolved run options
    pub fn from_options(options: &RunOptions) -> Self {
        Self::new(options.today, options.horizon_end(), options.tie_break)
    }

    /// Expand the whole profile and order the result
    pub fn schedule(&self, profile: &Profile) -> Schedule {
        let mut schedule = Schedule::default();

        for stream in &profile.income {
            self.expand_income(stream, &mut schedule);
        }
        if let Some(rent) = &profile.rent {
            self.expand_rent(rent, &mut schedule);
        }
        for obligation in &profile.obligations {
            self.expand_obligation(obligation, &mut schedule);
        }
        for item in &profile.planned {
            self.expand_planned(item, &mut schedule);
        }

        order_events(&mut schedule.events, self.tie_break);

        for warning in &schedule.warnings {
            warn!(%warning, "schedule input skipped or assumed");
        }
        debug!(
            events = schedule.events.len(),
            warnings = schedule.warnings.len(),
            today = %self.today,
            horizon_end = %self.horizon_end,
            "schedule built"
        );

        schedule
    }

    fn expand_income(&self, stream: &IncomeStream, schedule: &mut Schedule) {
        if stream.cadence_days <= 0 {
            schedule.warnings.push(ScheduleWarning::NonPositiveCadence {
                stream: stream.label.clone(),
                cadence_days: stream.cadence_days,
            });
            return;
        }
        let Some(last) = stream.last_occurrence else {
            schedule.warnings.push(ScheduleWarning::MissingAnchorDate {
                stream: stream.label.clone(),
            });
            return;
        };

        for date in cadence_occurrences(last, stream.cadence_days, self.today)
            .take_while(|date| *date <= self.horizon_end)
        {
            schedule.events.push(Event::inflow(
                date,
                stream.label.clone(),
                stream.amount,
                EventSource::Income(stream.id),
            ));
            if let Some(deduction) = stream.active_deduction() {
                schedule.events.push(Event::outflow(
                    date,
                    deduction.label.clone(),
                    deduction.amount,
                    EventSource::Deduction(stream.id),
                ));
            }
        }
    }

    fn expand_rent(&self, rent: &Rent, schedule: &mut Schedule) {
        if !is_valid_due_day(rent.due_day) {
            schedule.warnings.push(ScheduleWarning::InvalidDueDay {
                obligation: rent.label.clone(),
                due_day: rent.due_day,
            });
            return;
        }
        if rent.amount <= 0.0 {
            return;
        }
        for date in self.monthly_dates(rent.due_day) {
            schedule.events.push(Event::outflow(
                date,
                rent.label.clone(),
                rent.amount,
                EventSource::Rent,
            ));
        }
    }

    fn expand_obligation(&self, obligation: &Obligation, schedule: &mut Schedule) {
        let Some(due_day) = obligation.due_day else {
            return;
        };
        if !is_valid_due_day(due_day) {
            schedule.warnings.push(ScheduleWarning::InvalidDueDay {
                obligation: obligation.label.clone(),
                due_day,
            });
            return;
        }
        if obligation.balance <= 0.0 {
            return;
        }
        if obligation.is_revolving() && obligation.annual_rate_percent <= 0.0 {
            schedule.warnings.push(ScheduleWarning::RateMissing {
                obligation: obligation.label.clone(),
            });
        }

        let label = format!("{} ({})", obligation.label, obligation.kind);
        let payment = obligation.monthly_payment();
        for date in self.monthly_dates(due_day) {
            schedule.events.push(Event::outflow(
                date,
                label.clone(),
                payment,
                EventSource::Obligation(obligation.id),
            ));
        }
    }

    fn expand_planned(&self, item: &PlannedItem, schedule: &mut Schedule) {
        if item.amount == 0.0 || item.date < self.today || item.date > self.horizon_end {
            return;
        }
        let (inflow, outflow) = item.flows();
        schedule.events.push(Event {
            date: item.date,
            label: item.label.clone(),
            inflow,
            outflow,
            source: Some(EventSource::Planned(item.id)),
        });
    }

    fn monthly_dates(&self, due_day: u32) -> impl Iterator<Item = NaiveDate> {
        let end = self.horizon_end;
        monthly_occurrences(self.today, due_day).take_while(move |date| *date <= end)
    }
}

/// Stable sort by date, then by the same-day policy
///
/// Events that tie on both keep the order they were generated in.
pub fn order_events(events: &mut [Event], tie_break: TieBreak) {
    let rank = |event: &Event| match (tie_break, event.is_income()) {
        (TieBreak::ExpensesFirst, true) | (TieBreak::IncomeFirst, false) => 1,
        _ => 0,
    };
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| rank(a).cmp(&rank(b))));
}

/// Earliest income occurrence strictly after `date`, ignoring any horizon
pub fn next_income_after(profile: &Profile, date: NaiveDate) -> Option<(NaiveDate, i64)> {
    profile
        .income
        .iter()
        .filter_map(|stream| {
            let last = stream.last_occurrence?;
            let next = cadence_occurrences(last, stream.cadence_days, date).next()?;
            Some((next, stream.cadence_days))
        })
        .min_by_key(|(next, _)| *next)
}
