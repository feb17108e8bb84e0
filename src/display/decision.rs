//! Decision display formatting
//!
//! Renders the headline first (safe or not, what is blocking, what to do),
//! then the per-anchor verdicts.

use super::report::{double_separator, format_amount, separator};
use crate::models::{FundingAdvice, FundingRecommendation};
use crate::services::{AnchorDecision, Decision};

/// Format the full decision for the terminal
pub fn format_decision(decision: &Decision, date_format: &str, symbol: &str) -> String {
    let headline = decision.headline();
    let mut output = String::new();

    output.push_str(if headline.safe {
        "DECISION: SAFE\n"
    } else {
        "DECISION: UNSAFE\n"
    });
    output.push_str(&double_separator(50));
    output.push('\n');

    if let Some(event) = headline.blocking {
        output.push_str(&format!("Blocking bill: {}\n", event.label));
        output.push_str(&format!("Due:           {}\n", event.date.format(date_format)));
    }

    if headline.safe {
        output.push_str("\nFinal instruction: Pay as usual.\n");
    } else {
        output.push_str(&format!(
            "Short by:      {}\n\n",
            format_amount(headline.shortfall, symbol)
        ));
        if let Some(advice) = headline.advice {
            output.push_str(&format_advice(advice, symbol));
        }
        output.push_str("\nFinal instruction: Do the above action before the due date.\n");
    }

    if !decision.anchors.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:10} {:>8} {:>12}\n",
            "Anchor", "Date", "Verdict", "Lowest"
        ));
        output.push_str(&separator(63));
        output.push('\n');
        for anchor in &decision.anchors {
            output.push_str(&format_anchor_row(anchor, date_format, symbol));
            output.push('\n');
        }
    }

    output
}

/// Format one verdict row
pub fn format_anchor_row(anchor: &AnchorDecision, date_format: &str, symbol: &str) -> String {
    let verdict = &anchor.verdict;
    format!(
        "{:<30} {:10} {:>8} {:>12}",
        verdict.anchor.label,
        verdict.anchor.date.format(date_format).to_string(),
        if verdict.safe { "safe" } else { "UNSAFE" },
        format_amount(verdict.min_balance, symbol)
    )
}

/// Action and interest lines for a piece of funding advice
pub fn format_advice(advice: &FundingAdvice, symbol: &str) -> String {
    match advice {
        FundingAdvice::Borrow(rec) => format_recommendation(rec, symbol),
        FundingAdvice::NoCapacity { .. } => {
            "Best action: No revolving credit has room. Reduce or delay the obligation.\n"
                .to_string()
        }
    }
}

fn format_recommendation(rec: &FundingRecommendation, symbol: &str) -> String {
    let mut output = format!(
        "Best action: Borrow {} from {} (lowest rate: {}%).",
        format_amount(rec.borrow_amount, symbol),
        rec.primary.label,
        rec.primary.rate_percent
    );
    if let Some(remainder) = rec.unfunded_remainder {
        output.push_str(&format!(
            " Credit is not enough. Remaining unfunded: {}.",
            format_amount(remainder, symbol)
        ));
    }
    output.push('\n');

    if rec.draws.len() > 1 {
        for draw in &rec.draws {
            output.push_str(&format!(
                "  {} from {} at {}%\n",
                format_amount(draw.amount, symbol),
                draw.source.label,
                draw.source.rate_percent
            ));
        }
    }

    output.push_str(&format!(
        "Interest estimate: ~{} for {} days.",
        format_amount(rec.estimated_interest, symbol),
        rec.days
    ));
    if rec.rate_missing {
        output.push_str(" (Rate missing, set a rate for accuracy.)");
    }
    output.push('\n');
    output
}
