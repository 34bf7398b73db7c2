//! # Rate Schedules
//!
//! Base rates in dollars per square foot, before complexity and timeline
//! multipliers are applied.
//!
//! ## Schedule Summary
//!
//! | Service             | Full intake | Quick quote |
//! |---------------------|-------------|-------------|
//! | Driveways/Walkways  | 12          | 8 (flat)    |
//! | Stamped Concrete    | 18          | 8 (flat)    |
//! | Patios/Pool Decks   | 20          | 8 (flat)    |
//! | Concrete Repairs    | 10          | 8 (flat)    |
//! | Epoxy Flooring      | 8           | 8 (flat)    |
//! | (anything else)     | 15          | 8 (flat)    |
//!
//! The two schedules were tuned independently and disagree where they
//! overlap (stamped concrete books at 18 under the full intake but the
//! quick quote prices everything at a flat 8). Both are preserved as
//! found; reconcile with sales before treating either as authoritative.

use serde::{Deserialize, Serialize};

use crate::units::RatePerSqFt;

/// Services the estimator can price individually.
///
/// Slugs match the catalog and intake form values (`driveways-walkways`,
/// `stamped-concrete`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Custom concrete driveways and walkways
    DrivewaysWalkways,
    /// Stamped decorative concrete
    StampedConcrete,
    /// Patios and pool decks
    PatiosPoolDecks,
    /// Repair and restoration work
    ConcreteRepairs,
    /// Epoxy floor coatings
    EpoxyFlooring,
}

impl ServiceType {
    /// All service types for UI selection
    pub const ALL: [ServiceType; 5] = [
        ServiceType::DrivewaysWalkways,
        ServiceType::StampedConcrete,
        ServiceType::PatiosPoolDecks,
        ServiceType::ConcreteRepairs,
        ServiceType::EpoxyFlooring,
    ];

    /// URL/form slug for this service (e.g., "stamped-concrete")
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceType::DrivewaysWalkways => "driveways-walkways",
            ServiceType::StampedConcrete => "stamped-concrete",
            ServiceType::PatiosPoolDecks => "patios-pool-decks",
            ServiceType::ConcreteRepairs => "concrete-repairs",
            ServiceType::EpoxyFlooring => "epoxy-flooring",
        }
    }

    /// Parse a form slug. Unknown slugs return `None`; pricing falls back
    /// to the schedule default rather than failing (see [`RateSchedule`]).
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_lowercase().as_str() {
            "driveways-walkways" => Some(ServiceType::DrivewaysWalkways),
            "stamped-concrete" => Some(ServiceType::StampedConcrete),
            "patios-pool-decks" => Some(ServiceType::PatiosPoolDecks),
            "concrete-repairs" => Some(ServiceType::ConcreteRepairs),
            "epoxy-flooring" => Some(ServiceType::EpoxyFlooring),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::DrivewaysWalkways => "Driveways & Walkways",
            ServiceType::StampedConcrete => "Stamped Concrete",
            ServiceType::PatiosPoolDecks => "Patios & Pool Decks",
            ServiceType::ConcreteRepairs => "Concrete Repairs",
            ServiceType::EpoxyFlooring => "Epoxy Flooring",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which base-rate schedule an estimate runs against.
///
/// `FullIntake` is the multi-step estimator's per-service table;
/// `QuickQuote` is the floating widget's single flat rate (no service
/// dimension at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RateSchedule {
    /// Per-service rates with a fixed fallback for unrecognized services
    #[default]
    FullIntake,
    /// Flat teaser rate, service-agnostic
    QuickQuote,
}

impl RateSchedule {
    /// Fallback rate when the full intake sees a service it doesn't price
    pub const FULL_INTAKE_DEFAULT: RatePerSqFt = RatePerSqFt(15.0);

    /// The quick widget's flat rate
    pub const QUICK_QUOTE_RATE: RatePerSqFt = RatePerSqFt(8.0);

    /// Base rate for a service under this schedule.
    ///
    /// Total over its input: an unknown or absent service degrades to the
    /// schedule's default rate, never an error.
    pub fn base_rate(&self, service: Option<ServiceType>) -> RatePerSqFt {
        match self {
            RateSchedule::QuickQuote => Self::QUICK_QUOTE_RATE,
            RateSchedule::FullIntake => match service {
                Some(ServiceType::DrivewaysWalkways) => RatePerSqFt(12.0),
                Some(ServiceType::StampedConcrete) => RatePerSqFt(18.0),
                Some(ServiceType::PatiosPoolDecks) => RatePerSqFt(20.0),
                Some(ServiceType::ConcreteRepairs) => RatePerSqFt(10.0),
                Some(ServiceType::EpoxyFlooring) => RatePerSqFt(8.0),
                None => Self::FULL_INTAKE_DEFAULT,
            },
        }
    }

    /// Base rate for a raw form slug (unrecognized slug → schedule default)
    pub fn base_rate_for_slug(&self, slug: Option<&str>) -> RatePerSqFt {
        self.base_rate(slug.and_then(ServiceType::from_slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_slug(service.slug()), Some(service));
        }
    }

    #[test]
    fn test_slug_serde_matches_slug() {
        for service in ServiceType::ALL {
            let json = serde_json::to_string(&service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.slug()));
        }
    }

    #[test]
    fn test_full_intake_rates() {
        let schedule = RateSchedule::FullIntake;
        assert_eq!(schedule.base_rate(Some(ServiceType::StampedConcrete)), RatePerSqFt(18.0));
        assert_eq!(schedule.base_rate(Some(ServiceType::PatiosPoolDecks)), RatePerSqFt(20.0));
        assert_eq!(schedule.base_rate(None), RatePerSqFt(15.0));
    }

    #[test]
    fn test_unknown_slug_falls_back() {
        let schedule = RateSchedule::FullIntake;
        assert_eq!(schedule.base_rate_for_slug(Some("heated-floors")), RatePerSqFt(15.0));
        assert_eq!(schedule.base_rate_for_slug(None), RatePerSqFt(15.0));
    }

    #[test]
    fn test_quick_quote_is_flat() {
        let schedule = RateSchedule::QuickQuote;
        for service in ServiceType::ALL {
            assert_eq!(schedule.base_rate(Some(service)), RatePerSqFt(8.0));
        }
        assert_eq!(schedule.base_rate(None), RatePerSqFt(8.0));
    }
}
