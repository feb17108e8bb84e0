//! Funding recommendation types
//!
//! When an anchor is unsafe, the advisor proposes borrowing from unused
//! revolving credit. These are the shapes of that proposal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ObligationId;
use super::money::Money;
use super::obligation::Obligation;

/// Unused credit on a revolving obligation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevolvingSource {
    pub obligation: ObligationId,
    pub label: String,
    pub rate_percent: f64,
    pub capacity: f64,
}

impl RevolvingSource {
    /// Build a source from a revolving obligation, `None` for anything else
    pub fn from_obligation(obligation: &Obligation) -> Option<Self> {
        obligation.is_revolving().then(|| Self {
            obligation: obligation.id,
            label: obligation.label.clone(),
            rate_percent: obligation.annual_rate_percent,
            capacity: obligation.available_credit(),
        })
    }

    pub fn has_rate(&self) -> bool {
        self.rate_percent > 0.0
    }
}

/// The part of a loan taken from one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    pub source: RevolvingSource,
    pub amount: f64,
    pub interest: f64,
}

/// A proposal to borrow enough to cover a shortfall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRecommendation {
    pub shortfall: f64,
    pub borrow_amount: f64,
    /// Lowest-rate source with capacity; the first one drawn from
    pub primary: RevolvingSource,
    /// Per-source allocation in draw order, each capped at its own capacity
    pub draws: Vec<Draw>,
    /// Days the money is outstanding (breach until next inflow)
    pub days: i64,
    /// Simple, non-compounding estimate summed over all draws
    pub estimated_interest: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unfunded_remainder: Option<f64>,
    /// Some drawn source has no rate, so the estimate is understated
    pub rate_missing: bool,
}

/// What to do about an unsafe anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "advice", rename_all = "snake_case")]
pub enum FundingAdvice {
    Borrow(FundingRecommendation),
    /// No revolving source has room; the obligation must be reduced or delayed
    NoCapacity { shortfall: f64 },
}

impl FundingAdvice {
    pub fn shortfall(&self) -> f64 {
        match self {
            Self::Borrow(rec) => rec.shortfall,
            Self::NoCapacity { shortfall } => *shortfall,
        }
    }
}

impl fmt::Display for FundingAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow(rec) => {
                write!(
                    f,
                    "Borrow {} from {}",
                    Money::from_amount(rec.borrow_amount),
                    rec.primary.label
                )?;
                if rec.draws.len() > 1 {
                    write!(f, " and {} other source(s)", rec.draws.len() - 1)?;
                }
                if let Some(remainder) = rec.unfunded_remainder {
                    write!(
                        f,
                        "; credit is not enough, {} remains unfunded",
                        Money::from_amount(remainder)
                    )?;
                }
                Ok(())
            }
            Self::NoCapacity { .. } => write!(
                f,
                "No automated funding option: reduce or delay the obligation"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(label: &str, rate: f64, capacity: f64) -> RevolvingSource {
        RevolvingSource {
            obligation: ObligationId::new(),
            label: label.into(),
            rate_percent: rate,
            capacity,
        }
    }

    #[test]
    fn test_from_obligation_only_revolving() {
        let card = Obligation::fixed_full("AMEX", 16, 500.0);
        assert!(RevolvingSource::from_obligation(&card).is_none());

        let loc = Obligation::revolving_minimum("LOC", 8, 1000.0, 9.0, 1500.0);
        let src = RevolvingSource::from_obligation(&loc).unwrap();
        assert_eq!(src.capacity, 500.0);
        assert_eq!(src.obligation, loc.id);
        assert!(src.has_rate());
    }

    #[test]
    fn test_advice_display() {
        let primary = source("LOC B", 9.0, 500.0);
        let rec = FundingRecommendation {
            shortfall: 900.0,
            borrow_amount: 700.0,
            primary: primary.clone(),
            draws: vec![
                Draw {
                    source: primary,
                    amount: 500.0,
                    interest: 1.23,
                },
                Draw {
                    source: source("LOC A", 12.0, 200.0),
                    amount: 200.0,
                    interest: 0.66,
                },
            ],
            days: 10,
            estimated_interest: 1.89,
            unfunded_remainder: Some(200.0),
            rate_missing: false,
        };
        let advice = FundingAdvice::Borrow(rec);
        assert_eq!(
            advice.to_string(),
            "Borrow $700.00 from LOC B and 1 other source(s); credit is not enough, $200.00 remains unfunded"
        );
        assert_eq!(advice.shortfall(), 900.0);

        let none = FundingAdvice::NoCapacity { shortfall: 50.0 };
        assert!(none.to_string().starts_with("No automated funding option"));
    }
}
