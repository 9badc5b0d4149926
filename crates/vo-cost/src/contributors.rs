//! Composable extended cost terms.
//!
//! Each contributor maps voyage facts to a signed USD adjustment layered
//! on top of the base [`crate::VoyageCost`] total. Savings contribute
//! negative amounts. Callers pick the subset that applies to their
//! analysis.

use crate::error::{CostResult, non_negative, positive};
use crate::voyage::VoyageCost;
use serde::{Deserialize, Serialize};
use vo_core::Real;
use vo_core::constants::DAYS_PER_YEAR;

/// Voyage facts the contributors evaluate against.
#[derive(Debug, Clone, Copy)]
pub struct EconomicContext {
    transit_time_days: Real,
    baseline_time_days: Real,
    co2_tons: Real,
}

impl EconomicContext {
    /// `baseline_time_days` is the design-speed transit time the
    /// market-rate term compares against; it must be positive.
    pub fn new(
        transit_time_days: Real,
        baseline_time_days: Real,
        co2_tons: Real,
    ) -> CostResult<Self> {
        Ok(Self {
            transit_time_days: non_negative("transit_time_days", transit_time_days)?,
            baseline_time_days: positive("baseline_time_days", baseline_time_days)?,
            co2_tons: non_negative("co2_tons", co2_tons)?,
        })
    }

    pub fn transit_time_days(&self) -> Real {
        self.transit_time_days
    }

    pub fn baseline_time_days(&self) -> Real {
        self.baseline_time_days
    }

    pub fn co2_tons(&self) -> Real {
        self.co2_tons
    }
}

/// One extended economic term.
///
/// Contributors are deterministic functions of the context; positive
/// values are costs, negative values are savings.
pub trait CostContributor {
    /// Term name for reporting and breakdowns.
    fn name(&self) -> &'static str;

    /// Signed USD adjustment for this voyage.
    fn contribution_usd(&self, ctx: &EconomicContext) -> Real;
}

/// Capital tied up in cargo while it is at sea.
#[derive(Debug, Clone, Copy)]
pub struct InventoryCarrying {
    cargo_value_usd: Real,
    annual_pct: Real,
}

impl InventoryCarrying {
    pub fn new(cargo_value_usd: Real, annual_pct: Real) -> CostResult<Self> {
        Ok(Self {
            cargo_value_usd: non_negative("cargo_value_usd", cargo_value_usd)?,
            annual_pct: non_negative("annual_pct", annual_pct)?,
        })
    }
}

impl CostContributor for InventoryCarrying {
    fn name(&self) -> &'static str {
        "inventory_cost"
    }

    fn contribution_usd(&self, ctx: &EconomicContext) -> Real {
        let daily = self.cargo_value_usd * (self.annual_pct / 100.0) / DAYS_PER_YEAR;
        daily * ctx.transit_time_days()
    }
}

/// Carbon price applied to voyage CO2.
#[derive(Debug, Clone, Copy)]
pub struct CarbonPrice {
    usd_per_ton_co2: Real,
}

impl CarbonPrice {
    pub fn new(usd_per_ton_co2: Real) -> CostResult<Self> {
        Ok(Self {
            usd_per_ton_co2: non_negative("usd_per_ton_co2", usd_per_ton_co2)?,
        })
    }
}

impl CostContributor for CarbonPrice {
    fn name(&self) -> &'static str {
        "carbon_cost"
    }

    fn contribution_usd(&self, ctx: &EconomicContext) -> Real {
        ctx.co2_tons() * self.usd_per_ton_co2
    }
}

/// Reduced engine wear from running below design load; enters as a
/// saving (negative contribution).
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceSavings {
    day_rate_usd: Real,
    pct: Real,
}

impl MaintenanceSavings {
    pub fn new(day_rate_usd: Real, pct: Real) -> CostResult<Self> {
        Ok(Self {
            day_rate_usd: non_negative("day_rate_usd", day_rate_usd)?,
            pct: non_negative("maintenance_pct", pct)?,
        })
    }
}

impl CostContributor for MaintenanceSavings {
    fn name(&self) -> &'static str {
        "maintenance_savings"
    }

    fn contribution_usd(&self, ctx: &EconomicContext) -> Real {
        -(self.day_rate_usd * (self.pct / 100.0) * ctx.transit_time_days())
    }
}

/// Qualitative impact of slower service on market freight rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketImpact {
    None,
    Low,
    Medium,
    High,
}

impl MarketImpact {
    /// Percentage of cargo value per 20 % transit-time increase.
    pub fn factor_pct(&self) -> Real {
        match self {
            Self::None => 0.0,
            Self::Low => -2.0,
            Self::Medium => -5.0,
            Self::High => -10.0,
        }
    }

    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for MarketImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

/// Freight-rate adjustment proportional to the transit-time increase over
/// the design-speed baseline, scaled by the qualitative impact level.
/// Zero whenever transit time does not exceed the baseline.
#[derive(Debug, Clone, Copy)]
pub struct MarketRateImpact {
    cargo_value_usd: Real,
    level: MarketImpact,
}

impl MarketRateImpact {
    pub fn new(cargo_value_usd: Real, level: MarketImpact) -> CostResult<Self> {
        Ok(Self {
            cargo_value_usd: non_negative("cargo_value_usd", cargo_value_usd)?,
            level,
        })
    }
}

impl CostContributor for MarketRateImpact {
    fn name(&self) -> &'static str {
        "market_rate_impact"
    }

    fn contribution_usd(&self, ctx: &EconomicContext) -> Real {
        let factor = self.level.factor_pct();
        if factor == 0.0 {
            return 0.0;
        }
        let time_increase_pct = (ctx.transit_time_days() - ctx.baseline_time_days())
            / ctx.baseline_time_days()
            * 100.0;
        if time_increase_pct <= 0.0 {
            return 0.0;
        }
        (self.cargo_value_usd * factor / 100.0) * (time_increase_pct / 20.0)
    }
}

/// Base total plus every selected contribution.
pub fn total_economic_cost(
    base: &VoyageCost,
    ctx: &EconomicContext,
    contributors: &[Box<dyn CostContributor>],
) -> Real {
    base.total_usd
        + contributors
            .iter()
            .map(|c| c.contribution_usd(ctx))
            .sum::<Real>()
}
