//! Cost-benefit analysis: extended economic terms over a speed profile.

use crate::error::OptimizeResult;
use crate::profile::generate_speed_profile;
use crate::voyage::SpeedPoint;
use serde::{Deserialize, Serialize};
use vo_core::{Real, transit_time_days};
use vo_cost::{CostContributor, EconomicContext, total_economic_cost, voyage_cost};
use vo_vessel::VesselSpec;

/// One named contribution in a point's breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionEntry {
    pub name: String,
    pub usd: Real,
}

/// A profile row extended with the selected economic terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicPoint {
    pub point: SpeedPoint,
    pub contributions: Vec<ContributionEntry>,
    pub total_economic_cost_usd: Real,
}

/// Extended profile plus its minimum-cost row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicAnalysis {
    pub profile: Vec<EconomicPoint>,
    pub optimal: EconomicPoint,
}

/// Layer the given contributors over a base speed profile and pick the
/// economically optimal speed (ties go to the lower speed).
///
/// The market-rate term measures transit time against the design-speed
/// baseline, evaluated through the same transit formula as everything
/// else.
pub fn economic_profile(
    vessel: &VesselSpec,
    distance_nm: Real,
    fuel_price_usd_per_ton: Real,
    day_rate_usd: Real,
    speed_range: (Real, Real),
    step_kn: Real,
    contributors: &[Box<dyn CostContributor>],
) -> OptimizeResult<EconomicAnalysis> {
    let base = generate_speed_profile(
        vessel,
        distance_nm,
        fuel_price_usd_per_ton,
        day_rate_usd,
        speed_range,
        step_kn,
    )?;

    let baseline_time_days = transit_time_days(distance_nm, vessel.design_speed_kn());

    let mut profile = Vec::with_capacity(base.len());
    for point in base {
        let ctx = EconomicContext::new(point.transit_time_days, baseline_time_days, point.co2_tons)?;
        let base_cost = voyage_cost(
            point.total_fuel_tons,
            fuel_price_usd_per_ton,
            point.transit_time_days,
            day_rate_usd,
        )?;
        let contributions: Vec<ContributionEntry> = contributors
            .iter()
            .map(|c| ContributionEntry {
                name: c.name().to_string(),
                usd: c.contribution_usd(&ctx),
            })
            .collect();
        let total_economic_cost_usd = total_economic_cost(&base_cost, &ctx, contributors);
        profile.push(EconomicPoint {
            point,
            contributions,
            total_economic_cost_usd,
        });
    }

    let optimal = profile
        .iter()
        .min_by(|a, b| {
            a.total_economic_cost_usd
                .partial_cmp(&b.total_economic_cost_usd)
                .expect("economic costs are finite")
        })
        .expect("profile has at least one row")
        .clone();

    Ok(EconomicAnalysis { profile, optimal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vo_cost::{CarbonPrice, InventoryCarrying, MaintenanceSavings, MarketImpact, MarketRateImpact};
    use vo_vessel::VesselDef;

    fn vessel() -> VesselSpec {
        VesselSpec::from_def(VesselDef::default()).unwrap()
    }

    fn all_contributors() -> Vec<Box<dyn CostContributor>> {
        vec![
            Box::new(InventoryCarrying::new(50_000_000.0, 8.0).unwrap()),
            Box::new(CarbonPrice::new(25.0).unwrap()),
            Box::new(MaintenanceSavings::new(25_000.0, 5.0).unwrap()),
            Box::new(MarketRateImpact::new(50_000_000.0, MarketImpact::Medium).unwrap()),
        ]
    }

    #[test]
    fn breakdown_matches_total() {
        let analysis = economic_profile(
            &vessel(),
            8200.0,
            600.0,
            25_000.0,
            (12.0, 24.0),
            0.5,
            &all_contributors(),
        )
        .unwrap();
        for row in &analysis.profile {
            let sum: Real = row.contributions.iter().map(|c| c.usd).sum();
            let expected = row.point.total_cost_usd + sum;
            assert!((row.total_economic_cost_usd - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_contributor_set_reduces_to_base_profile() {
        let analysis = economic_profile(
            &vessel(),
            8200.0,
            600.0,
            25_000.0,
            (12.0, 24.0),
            0.5,
            &[],
        )
        .unwrap();
        for row in &analysis.profile {
            assert!((row.total_economic_cost_usd - row.point.total_cost_usd).abs() < 1e-9);
        }
    }

    #[test]
    fn inventory_pressure_raises_optimal_speed() {
        // A huge inventory carrying cost penalizes long transits, so the
        // economic optimum cannot be slower than the bare-cost optimum.
        let bare = economic_profile(&vessel(), 8200.0, 600.0, 25_000.0, (12.0, 24.0), 0.5, &[])
            .unwrap();
        let heavy: Vec<Box<dyn CostContributor>> =
            vec![Box::new(InventoryCarrying::new(2_000_000_000.0, 20.0).unwrap())];
        let pressured =
            economic_profile(&vessel(), 8200.0, 600.0, 25_000.0, (12.0, 24.0), 0.5, &heavy)
                .unwrap();
        assert!(pressured.optimal.point.speed_kn >= bare.optimal.point.speed_kn);
    }

    #[test]
    fn optimal_row_is_profile_minimum() {
        let analysis = economic_profile(
            &vessel(),
            8200.0,
            600.0,
            25_000.0,
            (12.0, 24.0),
            0.5,
            &all_contributors(),
        )
        .unwrap();
        for row in &analysis.profile {
            assert!(analysis.optimal.total_economic_cost_usd <= row.total_economic_cost_usd + 1e-9);
        }
    }
}
