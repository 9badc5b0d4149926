//! Synthetic weather field generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use vo_core::{Real, VoError, VoResult};
use vo_vessel::RouteSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub timestamp: DateTime<Utc>,
    pub lat: Real,
    pub lon: Real,
    pub speed_kn: Real,
    pub direction_deg: Real,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSample {
    pub timestamp: DateTime<Utc>,
    pub lat: Real,
    pub lon: Real,
    pub speed_kn: Real,
    pub direction_deg: Real,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveSample {
    pub timestamp: DateTime<Utc>,
    pub lat: Real,
    pub lon: Real,
    pub height_m: Real,
    pub period_s: Real,
    pub direction_deg: Real,
}

/// Hourly wind/current/wave samples at every route waypoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherField {
    pub winds: Vec<WindSample>,
    pub currents: Vec<CurrentSample>,
    pub waves: Vec<WaveSample>,
}

/// Generate `days` of hourly synthetic conditions along `route`.
///
/// Draw ranges: wind 5-25 kn, current 0-3 kn, wave height 0-5 m, wave
/// period 5-15 s, directions 0-360 deg. Deterministic for a seeded `rng`.
pub fn synthetic_weather<R: Rng>(
    route: &RouteSpec,
    start: DateTime<Utc>,
    days: u32,
    rng: &mut R,
) -> VoResult<WeatherField> {
    if days == 0 {
        return Err(VoError::InvalidArg { what: "days" });
    }

    let hours = (days as i64) * 24;
    let capacity = route.waypoint_count() * hours as usize;
    let mut field = WeatherField {
        winds: Vec::with_capacity(capacity),
        currents: Vec::with_capacity(capacity),
        waves: Vec::with_capacity(capacity),
    };

    for wp in route.waypoints() {
        for hour in 0..hours {
            let timestamp = start + Duration::hours(hour);

            field.winds.push(WindSample {
                timestamp,
                lat: wp.lat,
                lon: wp.lon,
                speed_kn: rng.random_range(5.0..25.0),
                direction_deg: rng.random_range(0.0..360.0),
            });
            field.currents.push(CurrentSample {
                timestamp,
                lat: wp.lat,
                lon: wp.lon,
                speed_kn: rng.random_range(0.0..3.0),
                direction_deg: rng.random_range(0.0..360.0),
            });
            field.waves.push(WaveSample {
                timestamp,
                lat: wp.lat,
                lon: wp.lon,
                height_m: rng.random_range(0.0..5.0),
                period_s: rng.random_range(5.0..15.0),
                direction_deg: rng.random_range(0.0..360.0),
            });
        }
    }

    Ok(field)
}
