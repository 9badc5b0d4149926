//! Base voyage cost: fuel plus time charter.

use crate::error::{CostResult, non_negative};
use serde::{Deserialize, Serialize};
use vo_core::Real;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoyageCost {
    pub fuel_cost_usd: Real,
    pub time_cost_usd: Real,
    pub total_usd: Real,
}

/// Fuel cost plus time cost for one voyage.
///
/// All inputs are non-negative; a zero fuel price or day rate is a valid
/// degenerate case (the corresponding term vanishes).
pub fn voyage_cost(
    fuel_tons: Real,
    fuel_price_usd_per_ton: Real,
    transit_days: Real,
    day_rate_usd: Real,
) -> CostResult<VoyageCost> {
    let fuel_tons = non_negative("fuel_tons", fuel_tons)?;
    let fuel_price = non_negative("fuel_price_usd_per_ton", fuel_price_usd_per_ton)?;
    let transit_days = non_negative("transit_days", transit_days)?;
    let day_rate = non_negative("day_rate_usd", day_rate_usd)?;

    let fuel_cost_usd = fuel_tons * fuel_price;
    let time_cost_usd = transit_days * day_rate;

    Ok(VoyageCost {
        fuel_cost_usd,
        time_cost_usd,
        total_usd: fuel_cost_usd + time_cost_usd,
    })
}
