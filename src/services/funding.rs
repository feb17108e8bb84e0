//! Funding advice for unsafe anchors
//!
//! Proposes the cheapest borrowing that covers a shortfall out of unused
//! revolving credit. Interest is a simple, non-compounding estimate.
//!
//! The loan is split across sources in rate order. Each source lends at most
//! its own unused credit and charges its own rate, so a shortfall larger than
//! the cheapest line's room is priced partly at the next line's rate.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    AnchorVerdict, Draw, FundingAdvice, FundingRecommendation, Obligation, RevolvingSource,
};

/// Simple interest on `amount` at `rate_percent` a year for `days` days
pub fn simple_interest(amount: f64, rate_percent: f64, days: i64) -> f64 {
    if amount <= 0.0 || rate_percent <= 0.0 || days <= 0 {
        return 0.0;
    }
    amount * (rate_percent / 100.0) * (days as f64 / 365.0)
}

/// Advises on unsafe anchors using a fixed set of credit sources
#[derive(Debug, Clone, Default)]
pub struct FundingAdvisor {
    /// In declaration order
    sources: Vec<RevolvingSource>,
}

impl FundingAdvisor {
    pub fn new(sources: Vec<RevolvingSource>) -> Self {
        Self { sources }
    }

    /// Use every revolving obligation in the profile as a source
    pub fn from_obligations(obligations: &[Obligation]) -> Self {
        Self::new(
            obligations
                .iter()
                .filter_map(RevolvingSource::from_obligation)
                .collect(),
        )
    }

    /// Sources with room to lend, cheapest first
    ///
    /// Sources without a positive rate rank after every rated source; ties
    /// keep declaration order.
    pub fn ranked_sources(&self) -> Vec<&RevolvingSource> {
        let mut ranked: Vec<_> = self.sources.iter().filter(|s| s.capacity > 0.0).collect();
        ranked.sort_by(|a, b| {
            (!a.has_rate())
                .cmp(&!b.has_rate())
                .then_with(|| a.rate_percent.total_cmp(&b.rate_percent))
        });
        ranked
    }

    /// Unused credit across every source
    pub fn total_capacity(&self) -> f64 {
        self.sources.iter().map(|s| s.capacity.max(0.0)).sum()
    }

    /// Advice for one verdict; `None` when the anchor is safe
    ///
    /// `next_inflow` is when the borrowed money can be paid back. The loan is
    /// outstanding for at least one day.
    pub fn recommend(&self, verdict: &AnchorVerdict, next_inflow: NaiveDate) -> Option<FundingAdvice> {
        let breach = verdict.first_breach.as_ref()?;
        let shortfall = breach.shortfall(verdict.floor);

        let ranked = self.ranked_sources();
        let Some(primary) = ranked.first() else {
            debug!(anchor = %verdict.anchor.label, shortfall, "no funding capacity");
            return Some(FundingAdvice::NoCapacity { shortfall });
        };

        let borrow_amount = shortfall.min(self.total_capacity());
        let days = (next_inflow - breach.date()).num_days().max(1);

        let mut remaining = borrow_amount;
        let mut draws = Vec::new();
        for source in &ranked {
            if remaining <= 0.0 {
                break;
            }
            let amount = remaining.min(source.capacity);
            draws.push(Draw {
                source: (*source).clone(),
                amount,
                interest: simple_interest(amount, source.rate_percent, days),
            });
            remaining -= amount;
        }

        let estimated_interest = draws.iter().map(|d| d.interest).sum();
        let rate_missing = draws.iter().any(|d| !d.source.has_rate());
        let unfunded_remainder = (borrow_amount < shortfall).then(|| shortfall - borrow_amount);

        debug!(
            anchor = %verdict.anchor.label,
            shortfall,
            borrow_amount,
            days,
            draws = draws.len(),
            "funding recommended"
        );

        Some(FundingAdvice::Borrow(FundingRecommendation {
            shortfall,
            borrow_amount,
            primary: (*primary).clone(),
            draws,
            days,
            estimated_interest,
            unfunded_remainder,
            rate_missing,
        }))
    }
}
