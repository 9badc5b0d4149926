//! Route specification: named waypoint sequence plus total distance.

use crate::error::{SpecError, SpecResult, finite, positive};
use serde::{Deserialize, Serialize};
use vo_core::{Real, transit_time_days};

/// Serde-facing waypoint record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointDef {
    pub name: Option<String>,
    pub lat: Real,
    pub lon: Real,
}

/// Serde-facing route record; [`RouteSpec::from_def`] validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteDef {
    pub name: Option<String>,
    pub distance_nm: Option<Real>,
    pub waypoints: Vec<WaypointDef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: Real,
    pub lon: Real,
}

/// Validated, immutable route. Replaced wholesale when a new route is
/// loaded; never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSpec {
    name: String,
    distance_nm: Real,
    waypoints: Vec<Waypoint>,

    // Derived, computed once at construction
    waypoint_count: usize,
    avg_leg_distance_nm: Real,
}

impl RouteSpec {
    /// Validate a route definition: positive distance, at least two
    /// waypoints, each within latitude/longitude bounds.
    pub fn from_def(def: RouteDef) -> SpecResult<Self> {
        let distance_nm = positive("distance_nm", def.distance_nm.unwrap_or(0.0))?;

        if def.waypoints.len() < 2 {
            return Err(SpecError::TooFewWaypoints {
                count: def.waypoints.len(),
            });
        }

        let mut waypoints = Vec::with_capacity(def.waypoints.len());
        for (index, wp) in def.waypoints.into_iter().enumerate() {
            finite("lat", wp.lat).map_err(|_| SpecError::WaypointOutOfRange {
                index,
                field: "lat",
                value: wp.lat,
            })?;
            finite("lon", wp.lon).map_err(|_| SpecError::WaypointOutOfRange {
                index,
                field: "lon",
                value: wp.lon,
            })?;
            if !(-90.0..=90.0).contains(&wp.lat) {
                return Err(SpecError::WaypointOutOfRange {
                    index,
                    field: "lat",
                    value: wp.lat,
                });
            }
            if !(-180.0..=180.0).contains(&wp.lon) {
                return Err(SpecError::WaypointOutOfRange {
                    index,
                    field: "lon",
                    value: wp.lon,
                });
            }
            waypoints.push(Waypoint {
                name: wp.name.unwrap_or_else(|| format!("Waypoint {}", index + 1)),
                lat: wp.lat,
                lon: wp.lon,
            });
        }

        let waypoint_count = waypoints.len();
        let avg_leg_distance_nm = distance_nm / (waypoint_count - 1) as Real;

        Ok(Self {
            name: def.name.unwrap_or_else(|| "Unknown Route".to_string()),
            distance_nm,
            waypoints,
            waypoint_count,
            avg_leg_distance_nm,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance_nm(&self) -> Real {
        self.distance_nm
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoint_count
    }

    pub fn avg_leg_distance_nm(&self) -> Real {
        self.avg_leg_distance_nm
    }

    /// First and last waypoints; both exist by construction.
    pub fn origin_destination(&self) -> (&Waypoint, &Waypoint) {
        (
            self.waypoints.first().expect("validated: >= 2 waypoints"),
            self.waypoints.last().expect("validated: >= 2 waypoints"),
        )
    }

    /// Days to sail the full route at `speed_kn`. Non-positive speed is an
    /// error, not an infinite transit.
    pub fn transit_time_days(&self, speed_kn: Real) -> SpecResult<Real> {
        let speed_kn = positive("speed_kn", speed_kn)?;
        Ok(transit_time_days(self.distance_nm, speed_kn))
    }
}
