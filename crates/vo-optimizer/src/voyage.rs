//! The shared voyage evaluation pipeline.

use crate::error::{OptimizeResult, non_negative, positive};
use serde::{Deserialize, Serialize};
use vo_core::{Real, transit_time_days};
use vo_cost::voyage_cost;
use vo_emissions::voyage_emissions;
use vo_vessel::VesselSpec;

/// One fully-evaluated speed: times, fuel, costs, and emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedPoint {
    pub speed_kn: Real,
    pub transit_time_days: Real,
    pub daily_fuel_tons: Real,
    pub total_fuel_tons: Real,
    pub fuel_cost_usd: Real,
    pub time_cost_usd: Real,
    pub total_cost_usd: Real,
    pub co2_tons: Real,
    pub sox_tons: Real,
    pub nox_tons: Real,
}

/// Evaluate the full pipeline at one speed.
///
/// The optimum, the design-speed baseline, and every profile sample go
/// through this exact function; nothing is special-cased.
pub fn evaluate_speed_point(
    vessel: &VesselSpec,
    distance_nm: Real,
    speed_kn: Real,
    fuel_price_usd_per_ton: Real,
    day_rate_usd: Real,
) -> OptimizeResult<SpeedPoint> {
    let distance_nm = positive("distance_nm", distance_nm)?;
    non_negative("fuel_price_usd_per_ton", fuel_price_usd_per_ton)?;
    non_negative("day_rate_usd", day_rate_usd)?;

    // Rejects non-positive speed before anything else is computed
    let daily_fuel_tons = vessel.fuel_consumption_tpd(speed_kn)?;

    let transit_time = transit_time_days(distance_nm, speed_kn);
    let total_fuel_tons = daily_fuel_tons * transit_time;
    let cost = voyage_cost(
        total_fuel_tons,
        fuel_price_usd_per_ton,
        transit_time,
        day_rate_usd,
    )?;
    let emissions = voyage_emissions(total_fuel_tons)?;

    Ok(SpeedPoint {
        speed_kn,
        transit_time_days: transit_time,
        daily_fuel_tons,
        total_fuel_tons,
        fuel_cost_usd: cost.fuel_cost_usd,
        time_cost_usd: cost.time_cost_usd,
        total_cost_usd: cost.total_usd,
        co2_tons: emissions.co2_tons,
        sox_tons: emissions.sox_tons,
        nox_tons: emissions.nox_tons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vo_vessel::VesselDef;

    fn vessel() -> VesselSpec {
        VesselSpec::from_def(VesselDef::default()).unwrap()
    }

    #[test]
    fn design_speed_point() {
        let p = evaluate_speed_point(&vessel(), 8200.0, 20.0, 600.0, 25_000.0).unwrap();
        let expected_days = 8200.0 / (20.0 * 24.0);
        assert!((p.transit_time_days - expected_days).abs() < 1e-9);
        assert_eq!(p.daily_fuel_tons, 180.0);
        assert!((p.total_fuel_tons - 180.0 * expected_days).abs() < 1e-9);
        assert!((p.total_cost_usd - (p.fuel_cost_usd + p.time_cost_usd)).abs() < 1e-6);
        // flat voyage factor: 3.114 t CO2 per t fuel
        assert!((p.co2_tons - p.total_fuel_tons * 3.114).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_inputs() {
        let v = vessel();
        assert!(evaluate_speed_point(&v, 0.0, 20.0, 600.0, 25_000.0).is_err());
        assert!(evaluate_speed_point(&v, 8200.0, 0.0, 600.0, 25_000.0).is_err());
        assert!(evaluate_speed_point(&v, 8200.0, 20.0, -1.0, 25_000.0).is_err());
        assert!(evaluate_speed_point(&v, 8200.0, 20.0, 600.0, -1.0).is_err());
    }
}
