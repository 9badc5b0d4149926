//! vo-emissions: fuel-to-pollutant conversion.
//!
//! Two deliberately separate models live here:
//!
//! - [`detailed_emissions`]: four pollutants (CO2, SOx, NOx, PM) with
//!   factors that depend on the fuel grade; used by the emissions
//!   calculator.
//! - [`voyage_emissions`]: three pollutants with one flat factor set,
//!   independent of fuel grade; this is the model the speed optimizer
//!   runs on.
//!
//! Their outputs differ by design (SOx especially); do not unify them.

pub mod emissions;
pub mod factors;
pub mod fuel;

pub use emissions::{DetailedEmissions, VoyageEmissions, detailed_emissions, voyage_emissions};
pub use factors::{CO2_TONS_PER_TON_FUEL, EmissionFactors};
pub use fuel::FuelType;
