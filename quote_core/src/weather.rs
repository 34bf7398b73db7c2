//! # Pour-Day Conditions
//!
//! Rates a weather snapshot for concrete placement. Thresholds follow the
//! ACI hot- and cold-weather concreting guides: placement gets difficult
//! below 40°F (ACI 306R) and above 90°F (ACI 305R), with marginal bands
//! on either side where extra measures are needed.

use serde::{Deserialize, Serialize};

/// ACI guide references for the placement thresholds used here.
pub mod aci_ref {
    /// Cold weather concreting
    pub const COLD_WEATHER: &str = "ACI 306R";
    /// Hot weather concreting
    pub const HOT_WEATHER: &str = "ACI 305R";
}

/// Sky condition from the forecast feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyCondition {
    Sunny,
    Cloudy,
    Rainy,
}

/// A point-in-time weather reading for the job site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in degrees Fahrenheit
    pub temperature_f: f64,
    /// Relative humidity, 0-100
    pub humidity_pct: f64,
    /// Sustained wind in miles per hour
    pub wind_speed_mph: f64,
    pub condition: SkyCondition,
}

impl WeatherSnapshot {
    /// Rate this snapshot for concrete placement.
    ///
    /// Rain or temperatures outside 40-90°F rule a pour out; marginal
    /// temperatures or high wind (rapid surface drying) make it workable
    /// with precautions.
    pub fn pouring_conditions(&self) -> PouringConditions {
        if self.condition == SkyCondition::Rainy {
            return PouringConditions::Poor;
        }
        if self.temperature_f < 40.0 || self.temperature_f > 90.0 {
            return PouringConditions::Poor;
        }
        if self.temperature_f < 50.0 || self.temperature_f > 85.0 || self.wind_speed_mph > 20.0 {
            return PouringConditions::Fair;
        }
        PouringConditions::Good
    }
}

/// Suitability rating for placing concrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PouringConditions {
    /// Pour as planned
    Good,
    /// Workable with precautions (blankets, windbreaks, retarders)
    Fair,
    /// Reschedule the pour
    Poor,
}

impl std::fmt::Display for PouringConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PouringConditions::Good => "Good",
            PouringConditions::Fair => "Fair",
            PouringConditions::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temperature_f: f64, wind_speed_mph: f64, condition: SkyCondition) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_f,
            humidity_pct: 45.0,
            wind_speed_mph,
            condition,
        }
    }

    #[test]
    fn test_mild_day_is_good() {
        // 72°F, light wind, clear - textbook pour day
        let reading = snapshot(72.0, 8.0, SkyCondition::Sunny);
        assert_eq!(reading.pouring_conditions(), PouringConditions::Good);
    }

    #[test]
    fn test_rain_rules_out_pour() {
        let reading = snapshot(72.0, 8.0, SkyCondition::Rainy);
        assert_eq!(reading.pouring_conditions(), PouringConditions::Poor);
    }

    #[test]
    fn test_temperature_limits() {
        assert_eq!(snapshot(35.0, 5.0, SkyCondition::Cloudy).pouring_conditions(), PouringConditions::Poor);
        assert_eq!(snapshot(95.0, 5.0, SkyCondition::Sunny).pouring_conditions(), PouringConditions::Poor);
        assert_eq!(snapshot(45.0, 5.0, SkyCondition::Sunny).pouring_conditions(), PouringConditions::Fair);
        assert_eq!(snapshot(88.0, 5.0, SkyCondition::Sunny).pouring_conditions(), PouringConditions::Fair);
    }

    #[test]
    fn test_high_wind_downgrades() {
        let reading = snapshot(70.0, 25.0, SkyCondition::Sunny);
        assert_eq!(reading.pouring_conditions(), PouringConditions::Fair);
    }
}
