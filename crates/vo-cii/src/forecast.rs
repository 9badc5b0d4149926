//! Compliance forecast: rate two candidate operating speeds.

use crate::error::{CiiError, CiiResult, positive};
use crate::rating::{CiiReport, DEFAULT_UTILIZATION, cii_rating};
use serde::{Deserialize, Serialize};
use vo_core::{Real, transit_time_days};
use vo_vessel::VesselSpec;

/// One operating scenario: a speed, its annual fuel, and the CII outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScenario {
    pub speed_kn: Real,
    pub annual_fuel_tons: Real,
    pub cii: CiiReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSavings {
    pub fuel_savings_tons: Real,
    pub emission_savings_tons: Real,
    pub percentage_reduction: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceForecast {
    pub current: ComplianceScenario,
    pub proposed: ComplianceScenario,
    pub savings: ComplianceSavings,
}

/// Project the CII effect of changing operating speed.
///
/// Each scenario sails `annual_distance_nm` at its speed; the cubic fuel
/// law plus the shorter sailing time at higher speed make annual fuel
/// scale with speed squared. Fails on non-positive speeds and on a zero
/// current fuel denominator rather than emitting a meaningless percentage.
pub fn compliance_forecast(
    vessel: &VesselSpec,
    current_speed_kn: Real,
    proposed_speed_kn: Real,
    annual_distance_nm: Real,
) -> CiiResult<ComplianceForecast> {
    positive("current_speed_kn", current_speed_kn)?;
    positive("proposed_speed_kn", proposed_speed_kn)?;
    positive("annual_distance_nm", annual_distance_nm)?;

    let current = scenario(vessel, current_speed_kn, annual_distance_nm)?;
    let proposed = scenario(vessel, proposed_speed_kn, annual_distance_nm)?;

    if current.annual_fuel_tons <= 0.0 {
        return Err(CiiError::ZeroAnnualFuel);
    }

    let fuel_savings_tons = current.annual_fuel_tons - proposed.annual_fuel_tons;
    let emission_savings_tons = current.cii.co2_tons_per_year - proposed.cii.co2_tons_per_year;
    let percentage_reduction = fuel_savings_tons / current.annual_fuel_tons * 100.0;

    Ok(ComplianceForecast {
        current,
        proposed,
        savings: ComplianceSavings {
            fuel_savings_tons,
            emission_savings_tons,
            percentage_reduction,
        },
    })
}

fn scenario(
    vessel: &VesselSpec,
    speed_kn: Real,
    annual_distance_nm: Real,
) -> CiiResult<ComplianceScenario> {
    let annual_time_days = transit_time_days(annual_distance_nm, speed_kn);
    let daily_fuel_tons = vessel.fuel_consumption_tpd(speed_kn)?;
    let annual_fuel_tons = daily_fuel_tons * annual_time_days;
    let cii = cii_rating(vessel, annual_distance_nm, annual_fuel_tons, DEFAULT_UTILIZATION)?;

    Ok(ComplianceScenario {
        speed_kn,
        annual_fuel_tons,
        cii,
    })
}
