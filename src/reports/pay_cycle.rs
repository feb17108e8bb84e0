//! Pay-cycle report
//!
//! How the household stands by the next paycheck and the one after it.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::{Ledger, Money, Profile, RunOptions};
use crate::services::next_income_after;

/// Cadence assumed when no income stream can produce a next pay
pub const FALLBACK_CADENCE_DAYS: i64 = 14;

/// Money in and out up to (and including) one pay date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleTotals {
    pub through: NaiveDate,
    pub inflow: f64,
    pub outflow: f64,
    /// Starting balance plus inflow minus outflow
    pub surplus: f64,
}

impl CycleTotals {
    fn from_ledger(ledger: &Ledger, through: NaiveDate) -> Self {
        let rows = ledger.rows_through(through);
        let inflow: f64 = rows.iter().map(|r| r.event.inflow).sum();
        let outflow: f64 = rows.iter().map(|r| r.event.outflow).sum();
        Self {
            through,
            inflow,
            outflow,
            surplus: ledger.starting_balance + inflow - outflow,
        }
    }
}

/// Pay-cycle report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayCycleReport {
    pub today: NaiveDate,
    pub starting_balance: f64,
    /// False when no stream was schedulable and the dates are assumed
    pub from_income: bool,
    pub next_pay: CycleTotals,
    pub second_pay: CycleTotals,
}

impl PayCycleReport {
    /// Generate the report from a ledger produced for `profile`
    pub fn generate(profile: &Profile, options: &RunOptions, ledger: &Ledger) -> Self {
        let today = options.today;
        let found = next_income_after(profile, today);
        let from_income = found.is_some();
        let (next, cadence) = found.unwrap_or_else(|| {
            (add_days(today, FALLBACK_CADENCE_DAYS), FALLBACK_CADENCE_DAYS)
        });
        let second = add_days(next, cadence);

        Self {
            today,
            starting_balance: ledger.starting_balance,
            from_income,
            next_pay: CycleTotals::from_ledger(ledger, next),
            second_pay: CycleTotals::from_ledger(ledger, second),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |amount: f64| Money::from_amount(amount).format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("Pay Cycle Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("Today:             {}\n", self.today));
        output.push_str(&format!(
            "Cash on hand:      {:>15}\n",
            money(self.starting_balance)
        ));
        if !self.from_income {
            output.push_str("No income stream is schedulable; pay dates are assumed.\n");
        }
        output.push('\n');

        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>12}\n",
            "", "Date", "Inflow", "Outflow", "Surplus"
        ));
        output.push_str(&"-".repeat(68));
        output.push('\n');
        for (title, totals) in [("By next pay", &self.next_pay), ("By 2nd pay", &self.second_pay)] {
            let surplus = if totals.surplus >= 0.0 {
                format!("+{}", money(totals.surplus))
            } else {
                money(totals.surplus)
            };
            output.push_str(&format!(
                "{:<16} {:>12} {:>12} {:>12} {:>12}\n",
                title,
                totals.through.to_string(),
                money(totals.inflow),
                money(totals.outflow),
                surplus
            ));
        }

        output
    }
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    u64::try_from(days)
        .ok()
        .and_then(|d| date.checked_add_days(Days::new(d)))
        .unwrap_or(date)
}
