//! # Unit Types
//!
//! Type-safe wrappers for the quantities the quoting engine trades in.
//! These provide compile-time safety against mixing up areas, rates, and
//! dollar amounts while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a money/units library because:
//! - The domain uses exactly three quantities
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Display amounts are whole US dollars; sub-dollar precision only exists
//! transiently inside a calculation.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{Dollars, RatePerSqFt, SqFt};
//!
//! let area = SqFt(1000.0);
//! let rate = RatePerSqFt(18.0);
//! let cost: Dollars = area * rate;
//! assert_eq!(cost.value(), 18000.0);
//! assert_eq!(cost.to_string(), "$18,000");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Base rate in US dollars per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatePerSqFt(pub f64);

/// Amount in US dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

impl Mul<RatePerSqFt> for SqFt {
    type Output = Dollars;
    fn mul(self, rhs: RatePerSqFt) -> Self::Output {
        Dollars(self.0 * rhs.0)
    }
}

impl Dollars {
    /// Round to the nearest whole dollar
    pub fn rounded(self) -> Dollars {
        Dollars(self.0.round())
    }
}

impl std::fmt::Display for Dollars {
    /// Renders as whole dollars with thousands separators: `$16,200`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0.round() as i64;
        let digits = whole.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if whole < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, grouped)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SqFt);
impl_arithmetic!(RatePerSqFt);
impl_arithmetic!(Dollars);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_times_rate() {
        let cost = SqFt(500.0) * RatePerSqFt(8.0);
        assert_eq!(cost, Dollars(4000.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Dollars(100.0);
        let b = Dollars(40.0);
        assert_eq!((a + b).0, 140.0);
        assert_eq!((a - b).0, 60.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Dollars(16199.5).rounded(), Dollars(16200.0));
        assert_eq!(Dollars(16199.4).rounded(), Dollars(16199.0));
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Dollars(0.0).to_string(), "$0");
        assert_eq!(Dollars(950.0).to_string(), "$950");
        assert_eq!(Dollars(6400.0).to_string(), "$6,400");
        assert_eq!(Dollars(19800.0).to_string(), "$19,800");
        assert_eq!(Dollars(1250000.0).to_string(), "$1,250,000");
        assert_eq!(Dollars(-5760.0).to_string(), "-$5,760");
    }

    #[test]
    fn test_serialization() {
        let area = SqFt(1250.5);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "1250.5");

        let roundtrip: SqFt = serde_json::from_str(&json).unwrap();
        assert_eq!(area, roundtrip);
    }
}
