//! Bounded speed optimization with a design-speed baseline.

use crate::error::{OptimizeError, OptimizeResult, non_negative, positive};
use crate::search::{SearchConfig, golden_section_min};
use crate::voyage::{SpeedPoint, evaluate_speed_point};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vo_core::{Real, nearly_equal};
use vo_vessel::VesselSpec;

/// Result of one optimization run. Savings are baseline minus optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimal: SpeedPoint,
    /// The same pipeline evaluated at design speed.
    pub baseline: SpeedPoint,
    pub fuel_savings_tons: Real,
    pub cost_savings_usd: Real,
    pub co2_reduction_tons: Real,
    pub iterations: usize,
}

/// Find the speed in `[min_speed_kn, max_speed_kn]` minimizing total
/// voyage cost.
///
/// The search is golden-section over the bounds; the classic slow-steaming
/// starting guess of 0.8 x design speed (clamped into bounds) and both
/// bounds are checked as extra candidates, and any candidates whose costs
/// tie within tolerance resolve to the lowest speed.
pub fn optimize_speed(
    vessel: &VesselSpec,
    distance_nm: Real,
    fuel_price_usd_per_ton: Real,
    day_rate_usd: Real,
    min_speed_kn: Real,
    max_speed_kn: Real,
    config: Option<SearchConfig>,
) -> OptimizeResult<OptimizationResult> {
    let min_speed_kn = positive("min_speed_kn", min_speed_kn)?;
    if !max_speed_kn.is_finite() || max_speed_kn < min_speed_kn {
        return Err(OptimizeError::InvalidInput {
            field: "max_speed_kn",
            value: max_speed_kn,
            reason: "must be finite and at least min_speed_kn",
        });
    }
    positive("distance_nm", distance_nm)?;
    non_negative("fuel_price_usd_per_ton", fuel_price_usd_per_ton)?;
    non_negative("day_rate_usd", day_rate_usd)?;

    let cfg = config.unwrap_or_default();
    let objective = |speed_kn: Real| -> OptimizeResult<Real> {
        Ok(evaluate_speed_point(
            vessel,
            distance_nm,
            speed_kn,
            fuel_price_usd_per_ton,
            day_rate_usd,
        )?
        .total_cost_usd)
    };

    let found = golden_section_min(&objective, min_speed_kn, max_speed_kn, &cfg)?;

    let mut best_x = found.x;
    let mut best_f = found.fx;
    let seed = (vessel.design_speed_kn() * 0.8).clamp(min_speed_kn, max_speed_kn);
    for candidate in [min_speed_kn, seed, max_speed_kn] {
        let fx = objective(candidate)?;
        if nearly_equal(fx, best_f, cfg.cost_tie) {
            // tied: prefer the lower speed
            if candidate < best_x {
                best_x = candidate;
                best_f = fx;
            }
        } else if fx < best_f {
            best_x = candidate;
            best_f = fx;
        }
    }

    debug!(
        optimal_speed_kn = best_x,
        iterations = found.iterations,
        "speed search converged"
    );

    let optimal = evaluate_speed_point(
        vessel,
        distance_nm,
        best_x,
        fuel_price_usd_per_ton,
        day_rate_usd,
    )?;
    let baseline = evaluate_speed_point(
        vessel,
        distance_nm,
        vessel.design_speed_kn(),
        fuel_price_usd_per_ton,
        day_rate_usd,
    )?;

    Ok(OptimizationResult {
        optimal,
        baseline,
        fuel_savings_tons: baseline.total_fuel_tons - optimal.total_fuel_tons,
        cost_savings_usd: baseline.total_cost_usd - optimal.total_cost_usd,
        co2_reduction_tons: baseline.co2_tons - optimal.co2_tons,
        iterations: found.iterations,
    })
}
