//! Engine services for the cashflow CLI
//!
//! Each stage is a pure function of its inputs: the scheduler expands a
//! profile into dated events, the simulator folds them into a ledger, anchor
//! analysis reads verdicts off the ledger and the funding advisor prices a
//! loan for any breach. The decision engine strings them together.

pub mod anchors;
pub mod calendar;
pub mod decision;
pub mod funding;
pub mod scheduler;
pub mod simulator;

pub use anchors::{analyze, derive_anchors, evaluate};
pub use decision::{decide, AnchorDecision, Decision, DecisionEngine, Headline};
pub use funding::{simple_interest, FundingAdvisor};
pub use scheduler::{next_income_after, order_events, EventScheduler, Schedule};
pub use simulator::simulate;
