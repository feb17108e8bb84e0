//! Non-fatal scheduling warnings
//!
//! The scheduler never fails. Inputs it cannot use are left out of the
//! projection and reported here so the caller can show them next to the
//! decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A problem with one profile entity that caused it to be skipped or
/// assumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleWarning {
    /// Income stream has no last occurrence to count from
    MissingAnchorDate { stream: String },
    /// Income stream cadence is zero or negative
    NonPositiveCadence { stream: String, cadence_days: i64 },
    /// Revolving obligation has no positive rate, so its minimum is zero
    RateMissing { obligation: String },
    /// Due day is outside 1-31
    InvalidDueDay { obligation: String, due_day: u32 },
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchorDate { stream } => {
                write!(f, "{}: missing last pay date, stream skipped", stream)
            }
            Self::NonPositiveCadence {
                stream,
                cadence_days,
            } => write!(
                f,
                "{}: cadence of {} days is not positive, stream skipped",
                stream, cadence_days
            ),
            Self::RateMissing { obligation } => {
                write!(f, "{}: rate missing, minimum assumed zero", obligation)
            }
            Self::InvalidDueDay {
                obligation,
                due_day,
            } => write!(
                f,
                "{}: due day {} is out of range (1-31), obligation skipped",
                obligation, due_day
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let w = ScheduleWarning::RateMissing {
            obligation: "CIBC LOC".into(),
        };
        assert_eq!(w.to_string(), "CIBC LOC: rate missing, minimum assumed zero");

        let w = ScheduleWarning::NonPositiveCadence {
            stream: "Alex pay".into(),
            cadence_days: 0,
        };
        assert!(w.to_string().contains("not positive"));
    }
}
