//! Built-in sample data, used when no file is supplied.

use vo_vessel::{RouteDef, VesselDef, WaypointDef};

/// A representative post-panamax container ship.
pub fn sample_vessel_def() -> VesselDef {
    VesselDef {
        name: Some("Example Vessel".to_string()),
        vessel_type: Some("Container Ship".to_string()),
        length_m: Some(300.0),
        beam_m: Some(40.0),
        draft_m: Some(14.5),
        deadweight_tons: Some(100_000.0),
        engine_type: Some("MAN B&W 12K98ME-C".to_string()),
        max_speed_kn: Some(25.0),
        max_power_kw: Some(68_000.0),
        design_speed_kn: Some(20.0),
        design_consumption_tpd: Some(180.0),
        year_built: Some(2010),
    }
}

/// The Asia-Europe benchmark route via Suez.
pub fn sample_route_def() -> RouteDef {
    RouteDef {
        name: Some("Singapore to Rotterdam".to_string()),
        distance_nm: Some(8352.0),
        waypoints: vec![
            WaypointDef {
                name: Some("Singapore".to_string()),
                lat: 1.264,
                lon: 103.825,
            },
            WaypointDef {
                name: Some("Suez Canal".to_string()),
                lat: 30.028,
                lon: 32.552,
            },
            WaypointDef {
                name: Some("Gibraltar".to_string()),
                lat: 36.144,
                lon: -5.353,
            },
            WaypointDef {
                name: Some("Rotterdam".to_string()),
                lat: 51.949,
                lon: 4.138,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vo_vessel::{RouteSpec, VesselSpec};

    #[test]
    fn sample_vessel_validates() {
        let vessel = VesselSpec::from_def(sample_vessel_def()).unwrap();
        assert_eq!(vessel.name(), "Example Vessel");
        assert_eq!(vessel.design_speed_kn(), 20.0);
        assert_eq!(vessel.sfc_g_per_kwh(), 185.0);
    }

    #[test]
    fn sample_route_validates() {
        let route = RouteSpec::from_def(sample_route_def()).unwrap();
        assert_eq!(route.waypoint_count(), 4);
        assert!((route.avg_leg_distance_nm() - 8352.0 / 3.0).abs() < 1e-9);
        let (origin, destination) = route.origin_destination();
        assert_eq!(origin.name, "Singapore");
        assert_eq!(destination.name, "Rotterdam");
    }
}
