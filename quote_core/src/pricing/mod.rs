//! # Estimate Calculator
//!
//! The pricing core: a pure function mapping a project's declared
//! attributes to a displayed price range. The calculation follows the
//! pattern used throughout this crate:
//!
//! - `EstimateInput` - input parameters (JSON-serializable)
//! - `Estimate` - result (JSON-serializable)
//! - `estimate(input, schedule) -> Option<Estimate>` - pure function
//!
//! ## Formula
//!
//! ```text
//! midpoint = area × base_rate × complexity × timeline
//! low      = round(midpoint × 0.9)
//! high     = round(midpoint × 1.1)
//! ```
//!
//! The base rate comes from the selected [`RateSchedule`]; complexity and
//! timeline are discrete multiplier tiers. The quick-quote call site has
//! no timeline dimension, so `timeline` is optional and absent means ×1.0.
//!
//! ## No-estimate sentinel
//!
//! A square footage that is empty, non-numeric, zero, or negative yields
//! `None` - the caller simply shows nothing. This is the one failure mode
//! and it is deliberately silent; it is never an error.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::pricing::{estimate, Complexity, EstimateInput, RateSchedule};
//!
//! let input = EstimateInput {
//!     service: Some("stamped-concrete".to_string()),
//!     square_footage: 1000.0,
//!     complexity: Complexity::Standard,
//!     timeline: None,
//! };
//!
//! let quote = estimate(&input, RateSchedule::FullIntake).unwrap();
//! assert_eq!(quote.range_label(), "$16,200 - $19,800");
//! ```

pub mod rates;

pub use rates::{RateSchedule, ServiceType};

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::units::{Dollars, SqFt};

/// Fraction of the midpoint shaved off for the low end of the range
const RANGE_LOW_FACTOR: f64 = 0.9;

/// Fraction of the midpoint added for the high end of the range
const RANGE_HIGH_FACTOR: f64 = 1.1;

/// Complexity tier scaling cost for finish sophistication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Basic finish: ×0.8
    Simple,

    /// Stamped or standard options: ×1.0
    #[default]
    Standard,

    /// Decorative or advanced features: ×1.3
    Complex,

    /// Custom design work: ×1.6
    Premium,
}

impl Complexity {
    /// All complexity tiers for UI selection
    pub const ALL: [Complexity; 4] = [
        Complexity::Simple,
        Complexity::Standard,
        Complexity::Complex,
        Complexity::Premium,
    ];

    /// Get the cost multiplier
    pub fn factor(&self) -> f64 {
        match self {
            Complexity::Simple => 0.8,
            Complexity::Standard => 1.0,
            Complexity::Complex => 1.3,
            Complexity::Premium => 1.6,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple (Basic finish)",
            Complexity::Standard => "Standard (Stamped)",
            Complexity::Complex => "Complex (Decorative)",
            Complexity::Premium => "Premium (Custom design)",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "standard" => Ok(Complexity::Standard),
            "complex" => Ok(Complexity::Complex),
            "premium" => Ok(Complexity::Premium),
            _ => Err(QuoteError::invalid_input(
                "complexity",
                s,
                "Expected one of: simple, standard, complex, premium",
            )),
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Urgency tier scaling cost for scheduling pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    /// Within 2 weeks: ×1.2 (intake forms also send this as "asap")
    #[serde(alias = "asap")]
    Urgent,

    /// 4-6 weeks out: ×1.0
    #[default]
    Standard,

    /// No rush: ×0.9
    Flexible,
}

impl Timeline {
    /// All timeline tiers for UI selection
    pub const ALL: [Timeline; 3] = [
        Timeline::Urgent,
        Timeline::Standard,
        Timeline::Flexible,
    ];

    /// Get the cost multiplier
    pub fn factor(&self) -> f64 {
        match self {
            Timeline::Urgent => 1.2,
            Timeline::Standard => 1.0,
            Timeline::Flexible => 0.9,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Timeline::Urgent => "Urgent (Within 2 weeks)",
            Timeline::Standard => "Standard (4-6 weeks)",
            Timeline::Flexible => "Flexible (No rush)",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "urgent" | "asap" => Ok(Timeline::Urgent),
            "standard" => Ok(Timeline::Standard),
            "flexible" => Ok(Timeline::Flexible),
            _ => Err(QuoteError::invalid_input(
                "timeline",
                s,
                "Expected one of: urgent, standard, flexible",
            )),
        }
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for an estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "service": "patios-pool-decks",
///   "square_footage": 750.0,
///   "complexity": "complex",
///   "timeline": "flexible"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Service slug as submitted by the form. Unknown slugs price at the
    /// schedule's default rate; the quick widget passes `None`.
    #[serde(default)]
    pub service: Option<String>,

    /// Project area in square feet; must be positive and finite for an
    /// estimate to be produced
    pub square_footage: f64,

    /// Finish complexity tier
    #[serde(default)]
    pub complexity: Complexity,

    /// Scheduling urgency tier; `None` (the quick widget) means ×1.0
    #[serde(default)]
    pub timeline: Option<Timeline>,
}

/// A computed price range, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Midpoint of the range, before the ±10% band is applied
    pub midpoint: Dollars,
    /// Low end of the band: round(midpoint × 0.9)
    pub low: Dollars,
    /// High end of the band: round(midpoint × 1.1)
    pub high: Dollars,
}

impl Estimate {
    /// Build the ±10% display band around a midpoint.
    pub fn from_midpoint(midpoint: Dollars) -> Self {
        Estimate {
            midpoint,
            low: (midpoint * RANGE_LOW_FACTOR).rounded(),
            high: (midpoint * RANGE_HIGH_FACTOR).rounded(),
        }
    }

    /// Range formatted for display: `"$16,200 - $19,800"`
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.low, self.high)
    }
}

/// Compute an estimate, or decline.
///
/// Pure and total: identical input always yields identical output, and a
/// non-positive or non-finite square footage yields `None` rather than an
/// error. Everything else degrades gracefully (unknown service → default
/// rate, absent timeline → ×1.0).
pub fn estimate(input: &EstimateInput, schedule: RateSchedule) -> Option<Estimate> {
    if !input.square_footage.is_finite() || input.square_footage <= 0.0 {
        return None;
    }

    let area = SqFt(input.square_footage);
    let base_rate = schedule.base_rate_for_slug(input.service.as_deref());
    let timeline_factor = input.timeline.map_or(1.0, |t| t.factor());

    let midpoint = (area * base_rate) * input.complexity.factor() * timeline_factor;
    Some(Estimate::from_midpoint(midpoint))
}

/// Parse a square-footage form field.
///
/// Empty, non-numeric, non-finite, zero, and negative entries all yield
/// `None` - the same sentinel [`estimate`] uses.
pub fn parse_square_footage(raw: &str) -> Option<SqFt> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(SqFt(value))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input(sqft: f64, service: &str, complexity: Complexity, timeline: Timeline) -> EstimateInput {
        EstimateInput {
            service: Some(service.to_string()),
            square_footage: sqft,
            complexity,
            timeline: Some(timeline),
        }
    }

    #[test]
    fn test_full_intake_worked_example() {
        // 1000 sq ft of stamped concrete at 18/sq ft, no multipliers
        let input = full_input(1000.0, "stamped-concrete", Complexity::Standard, Timeline::Standard);
        let quote = estimate(&input, RateSchedule::FullIntake).unwrap();
        assert_eq!(quote.midpoint, Dollars(18000.0));
        assert_eq!(quote.low, Dollars(16200.0));
        assert_eq!(quote.high, Dollars(19800.0));
        assert_eq!(quote.range_label(), "$16,200 - $19,800");
    }

    #[test]
    fn test_quick_quote_worked_example() {
        // 500 sq ft premium at the flat rate of 8: 500 × 8 × 1.6 = 6400
        let input = EstimateInput {
            service: None,
            square_footage: 500.0,
            complexity: Complexity::Premium,
            timeline: None,
        };
        let quote = estimate(&input, RateSchedule::QuickQuote).unwrap();
        assert_eq!(quote.midpoint, Dollars(6400.0));
        assert_eq!(quote.range_label(), "$5,760 - $7,040");
    }

    #[test]
    fn test_no_estimate_for_bad_footage() {
        for sqft in [0.0, -250.0, f64::NAN, f64::INFINITY] {
            let input = full_input(sqft, "stamped-concrete", Complexity::Standard, Timeline::Standard);
            assert!(estimate(&input, RateSchedule::FullIntake).is_none());
        }
    }

    #[test]
    fn test_unknown_service_uses_default_rate() {
        let input = full_input(100.0, "heated-floors", Complexity::Standard, Timeline::Standard);
        let quote = estimate(&input, RateSchedule::FullIntake).unwrap();
        assert_eq!(quote.midpoint, Dollars(1500.0));
    }

    #[test]
    fn test_band_brackets_midpoint() {
        let input = full_input(730.0, "concrete-repairs", Complexity::Complex, Timeline::Urgent);
        let quote = estimate(&input, RateSchedule::FullIntake).unwrap();
        assert!(quote.low.value() <= quote.midpoint.value());
        assert!(quote.midpoint.value() <= quote.high.value());
        // 1.1/0.9 within a dollar of rounding on each end
        let ratio = quote.high.value() / quote.low.value();
        assert!((ratio - 1.1 / 0.9).abs() < 0.001);
    }

    #[test]
    fn test_monotone_in_area() {
        let mut last = 0.0;
        for sqft in [10.0, 100.0, 550.0, 1000.0, 5000.0] {
            let input = full_input(sqft, "epoxy-flooring", Complexity::Simple, Timeline::Flexible);
            let quote = estimate(&input, RateSchedule::FullIntake).unwrap();
            assert!(quote.midpoint.value() > last);
            last = quote.midpoint.value();
        }
    }

    #[test]
    fn test_idempotent() {
        let input = full_input(420.0, "patios-pool-decks", Complexity::Premium, Timeline::Flexible);
        let a = estimate(&input, RateSchedule::FullIntake).unwrap();
        let b = estimate(&input, RateSchedule::FullIntake).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_timeline_is_neutral() {
        let mut input = full_input(1000.0, "driveways-walkways", Complexity::Standard, Timeline::Standard);
        let with_standard = estimate(&input, RateSchedule::FullIntake).unwrap();
        input.timeline = None;
        let without = estimate(&input, RateSchedule::FullIntake).unwrap();
        assert_eq!(with_standard, without);
    }

    #[test]
    fn test_parse_square_footage() {
        assert_eq!(parse_square_footage(" 1000 "), Some(SqFt(1000.0)));
        assert_eq!(parse_square_footage("250.5"), Some(SqFt(250.5)));
        assert_eq!(parse_square_footage(""), None);
        assert_eq!(parse_square_footage("abc"), None);
        assert_eq!(parse_square_footage("1000abc"), None);
        assert_eq!(parse_square_footage("0"), None);
        assert_eq!(parse_square_footage("-40"), None);
        assert_eq!(parse_square_footage("inf"), None);
    }

    #[test]
    fn test_timeline_serde_alias() {
        let urgent: Timeline = serde_json::from_str("\"asap\"").unwrap();
        assert_eq!(urgent, Timeline::Urgent);
        assert_eq!(serde_json::to_string(&Timeline::Urgent).unwrap(), "\"urgent\"");
    }

    #[test]
    fn test_tier_factors() {
        assert_eq!(Complexity::Simple.factor(), 0.8);
        assert_eq!(Complexity::Premium.factor(), 1.6);
        assert_eq!(Timeline::Urgent.factor(), 1.2);
        assert_eq!(Timeline::Flexible.factor(), 0.9);
    }

    #[test]
    fn test_flexible_parse() {
        assert_eq!(Complexity::from_str_flexible(" Premium "), Ok(Complexity::Premium));
        assert_eq!(Timeline::from_str_flexible("ASAP"), Ok(Timeline::Urgent));
        assert!(Complexity::from_str_flexible("luxury").is_err());
    }
}
