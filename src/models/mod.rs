//! Core data models for the cashflow engine
//!
//! This module contains the household profile (income, obligations, planned
//! items) and everything the engine derives from it: events, the ledger,
//! anchor verdicts and funding advice.

pub mod anchor;
pub mod event;
pub mod funding;
pub mod ids;
pub mod income;
pub mod ledger;
pub mod money;
pub mod obligation;
pub mod planned;
pub mod profile;
pub mod warning;

pub use anchor::{Anchor, AnchorVerdict, Breach};
pub use event::{Event, EventSource};
pub use funding::{Draw, FundingAdvice, FundingRecommendation, RevolvingSource};
pub use ids::{IncomeStreamId, ObligationId, PlannedItemId};
pub use income::{IncomeStream, PerPayDeduction};
pub use ledger::{Ledger, LedgerRow};
pub use money::Money;
pub use obligation::{Obligation, ObligationKind, Rent};
pub use planned::PlannedItem;
pub use profile::{CashHolding, Profile, RunOptions};
pub use warning::ScheduleWarning;
