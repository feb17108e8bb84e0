//! Ledger display formatting
//!
//! Register-style view of the simulated ledger.

use super::report::{format_amount, format_optional_amount, separator, truncate};
use crate::models::{Ledger, LedgerRow, ScheduleWarning};

const LABEL_WIDTH: usize = 28;

/// Format a single ledger row
pub fn format_ledger_row(row: &LedgerRow, date_format: &str, symbol: &str) -> String {
    format!(
        "{:10} {:<width$} {:>12} {:>12} {:>12}",
        row.event.date.format(date_format).to_string(),
        truncate(&row.event.label, LABEL_WIDTH),
        format_optional_amount(row.event.inflow, symbol),
        format_optional_amount(row.event.outflow, symbol),
        format_amount(row.balance, symbol),
        width = LABEL_WIDTH
    )
}

/// Format the whole ledger as a register with a closing summary
pub fn format_ledger(ledger: &Ledger, date_format: &str, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Starting balance: {}\n\n",
        format_amount(ledger.starting_balance, symbol)
    ));

    if ledger.is_empty() {
        output.push_str("No events inside the horizon.\n");
        return output;
    }

    output.push_str(&format!(
        "{:10} {:<width$} {:>12} {:>12} {:>12}\n",
        "Date",
        "Item",
        "In",
        "Out",
        "Balance",
        width = LABEL_WIDTH
    ));
    output.push_str(&separator(78));
    output.push('\n');

    for row in &ledger.rows {
        output.push_str(&format_ledger_row(row, date_format, symbol));
        output.push('\n');
    }

    output.push_str(&separator(78));
    output.push('\n');
    output.push_str(&format!(
        "Closing balance: {}\n",
        format_amount(ledger.closing_balance(), symbol)
    ));
    if let Some(date) = ledger.min_date {
        output.push_str(&format!(
            "Lowest balance:  {} on {}\n",
            format_amount(ledger.min_balance, symbol),
            date.format(date_format)
        ));
    }

    output
}

/// Format scheduling warnings, empty when there are none
pub fn format_warnings(warnings: &[ScheduleWarning]) -> String {
    let mut output = String::new();
    if warnings.is_empty() {
        return output;
    }
    output.push_str("Warnings:\n");
    for warning in warnings {
        output.push_str(&format!("  ! {}\n", warning));
    }
    output
}
