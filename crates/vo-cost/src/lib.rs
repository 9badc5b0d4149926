//! vo-cost: monetary cost of a voyage.
//!
//! The base model is fuel plus time charter cost. Extended economic terms
//! (inventory carrying, carbon price, maintenance savings, market-rate
//! impact) are modeled as composable [`CostContributor`]s so that callers
//! can layer exactly the subset they need over the base total.

pub mod contributors;
pub mod error;
pub mod voyage;

pub use contributors::{
    CarbonPrice, CostContributor, EconomicContext, InventoryCarrying, MaintenanceSavings,
    MarketImpact, MarketRateImpact, total_economic_cost,
};
pub use error::{CostError, CostResult};
pub use voyage::{VoyageCost, voyage_cost};
