//! # Curing Countdown
//!
//! Tracks how long a poured slab still has to cure before it can take
//! load. Concrete reaches usable strength after about a week and full
//! design strength at 28 days; we track the 7-day window by default.
//!
//! All time arithmetic takes the clock as a parameter so callers (and
//! tests) control "now".
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use quote_core::curing::{CuringStatus, Pour};
//!
//! let pour = Pour::new("Smith Driveway", Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap());
//! let now = Utc.with_ymd_and_hms(2024, 2, 14, 8, 0, 0).unwrap();
//!
//! assert_eq!(pour.status(now), CuringStatus::Curing);
//! assert_eq!(pour.remaining(now).days, 3);
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days before a fresh pour can take normal traffic
pub const DEFAULT_CURING_DAYS: i64 = 7;

/// A poured slab being tracked through its curing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pour {
    /// Stable identifier for this pour
    pub id: Uuid,

    /// Job label (e.g., "Smith Driveway")
    pub name: String,

    /// When the pour was placed
    pub start_date: DateTime<Utc>,

    /// Length of the curing window in days
    pub curing_days: i64,
}

impl Pour {
    /// Track a new pour with the default 7-day window.
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Pour {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            curing_days: DEFAULT_CURING_DAYS,
        }
    }

    /// Override the curing window (e.g., 28 days for full design strength).
    pub fn with_curing_days(mut self, days: i64) -> Self {
        self.curing_days = days;
        self
    }

    /// When the curing window closes.
    pub fn end_date(&self) -> DateTime<Utc> {
        self.start_date + Duration::days(self.curing_days)
    }

    /// Time left in the curing window at `now`.
    ///
    /// Once the window has passed, the countdown clamps to zero and
    /// reports complete - a pour is never "overdue", it's ready for use.
    pub fn remaining(&self, now: DateTime<Utc>) -> Remaining {
        let left = self.end_date() - now;
        if left <= Duration::zero() {
            return Remaining {
                days: 0,
                hours: 0,
                minutes: 0,
                complete: true,
            };
        }

        let days = left.num_days();
        let hours = (left - Duration::days(days)).num_hours();
        let minutes = (left - Duration::days(days) - Duration::hours(hours)).num_minutes();
        Remaining {
            days,
            hours,
            minutes,
            complete: false,
        }
    }

    /// Curing status at `now`.
    pub fn status(&self, now: DateTime<Utc>) -> CuringStatus {
        if self.remaining(now).complete {
            CuringStatus::Ready
        } else {
            CuringStatus::Curing
        }
    }
}

/// Whether a pour is still in its curing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CuringStatus {
    /// Still curing, keep loads off
    Curing,
    /// Curing window complete, ready for use
    Ready,
}

impl std::fmt::Display for CuringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CuringStatus::Curing => "Curing",
            CuringStatus::Ready => "Ready",
        };
        write!(f, "{}", label)
    }
}

/// Countdown components for display: `3d 14h 22m remaining`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    /// True once the curing window has fully elapsed
    pub complete: bool,
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.complete {
            write!(f, "complete")
        } else {
            write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_countdown_mid_window() {
        let pour = Pour::new("Johnson Patio", utc(2024, 2, 8, 12, 0));
        let remaining = pour.remaining(utc(2024, 2, 12, 9, 30));
        assert_eq!((remaining.days, remaining.hours, remaining.minutes), (3, 2, 30));
        assert!(!remaining.complete);
        assert_eq!(pour.status(utc(2024, 2, 12, 9, 30)), CuringStatus::Curing);
    }

    #[test]
    fn test_window_elapsed_clamps_to_zero() {
        let pour = Pour::new("Garcia Foundation", utc(2024, 2, 6, 12, 0));
        let remaining = pour.remaining(utc(2024, 2, 20, 12, 0));
        assert_eq!((remaining.days, remaining.hours, remaining.minutes), (0, 0, 0));
        assert!(remaining.complete);
        assert_eq!(pour.status(utc(2024, 2, 20, 12, 0)), CuringStatus::Ready);
    }

    #[test]
    fn test_exact_end_is_ready() {
        let pour = Pour::new("Edge", utc(2024, 3, 1, 0, 0));
        assert_eq!(pour.end_date(), utc(2024, 3, 8, 0, 0));
        assert_eq!(pour.status(utc(2024, 3, 8, 0, 0)), CuringStatus::Ready);
    }

    #[test]
    fn test_custom_window() {
        let pour = Pour::new("Full Strength", utc(2024, 2, 1, 0, 0)).with_curing_days(28);
        assert_eq!(pour.end_date(), utc(2024, 2, 29, 0, 0));
        assert_eq!(pour.status(utc(2024, 2, 14, 0, 0)), CuringStatus::Curing);
    }

    #[test]
    fn test_display() {
        let pour = Pour::new("Display", utc(2024, 2, 1, 0, 0));
        assert_eq!(pour.remaining(utc(2024, 2, 6, 22, 45)).to_string(), "1d 1h 15m");
        assert_eq!(pour.remaining(utc(2024, 3, 1, 0, 0)).to_string(), "complete");
    }
}
