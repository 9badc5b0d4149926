//! Voyage impact of average conditions.

use crate::synthetic::WeatherField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vo_core::Real;

/// Wind above this speed starts slowing the vessel, 0.5 % per knot.
const WIND_THRESHOLD_KN: Real = 15.0;
/// Waves above this height start slowing the vessel, 3 % per meter.
const WAVE_THRESHOLD_M: Real = 2.0;
/// Speed reduction is capped here regardless of conditions.
const MAX_SPEED_REDUCTION_PCT: Real = 30.0;
/// Fuel burn rises this much faster than speed falls.
const FUEL_INCREASE_RATIO: Real = 1.5;
/// Waves above this height mark a high-risk area.
const HIGH_RISK_WAVE_M: Real = 4.0;
/// At most this many risk areas are reported.
const MAX_RISK_AREAS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageConditions {
    pub wind_speed_kn: Option<Real>,
    pub current_speed_kn: Option<Real>,
    pub wave_height_m: Option<Real>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskArea {
    pub lat: Real,
    pub lon: Real,
    pub wave_height_m: Real,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub speed_reduction_pct: Real,
    pub fuel_increase_pct: Real,
    pub high_risk_areas: Vec<HighRiskArea>,
}

impl WeatherField {
    /// Mean wind/current/wave values, `None` for an empty series.
    pub fn average_conditions(&self) -> AverageConditions {
        AverageConditions {
            wind_speed_kn: mean(self.winds.iter().map(|w| w.speed_kn)),
            current_speed_kn: mean(self.currents.iter().map(|c| c.speed_kn)),
            wave_height_m: mean(self.waves.iter().map(|w| w.height_m)),
        }
    }

    /// Estimated speed and fuel penalties from the average conditions.
    pub fn voyage_impact(&self) -> WeatherImpact {
        let avg = self.average_conditions();
        let wind = avg.wind_speed_kn.unwrap_or(0.0);
        let wave = avg.wave_height_m.unwrap_or(0.0);

        let wind_reduction = ((wind - WIND_THRESHOLD_KN) * 0.5).max(0.0);
        let wave_reduction = ((wave - WAVE_THRESHOLD_M) * 3.0).max(0.0);
        let speed_reduction_pct = (wind_reduction + wave_reduction).min(MAX_SPEED_REDUCTION_PCT);

        let high_risk_areas = self
            .waves
            .iter()
            .filter(|w| w.height_m > HIGH_RISK_WAVE_M)
            .take(MAX_RISK_AREAS)
            .map(|w| HighRiskArea {
                lat: w.lat,
                lon: w.lon,
                wave_height_m: w.height_m,
                timestamp: w.timestamp,
            })
            .collect();

        WeatherImpact {
            speed_reduction_pct,
            fuel_increase_pct: speed_reduction_pct * FUEL_INCREASE_RATIO,
            high_risk_areas,
        }
    }
}

fn mean(values: impl Iterator<Item = Real>) -> Option<Real> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { None } else { Some(sum / count as Real) }
}
