//! Emission factor tables, g of pollutant per ton of fuel burned.
//!
//! Per-fuel values follow IMO guideline figures for each grade's sulfur
//! content; the flat voyage set assumes 0.5 % sulfur fuel and Tier II
//! engines.

use crate::fuel::FuelType;
use vo_core::Real;

/// Fuel-to-CO2 mass ratio (tons CO2 per ton of fuel). The CII model uses
/// this same factor, so carbon intensity and detailed emissions agree on
/// CO2.
pub const CO2_TONS_PER_TON_FUEL: Real = 3.114;

/// Factor set for one fuel grade, g per ton of fuel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactors {
    pub co2_g_per_ton: Real,
    pub sox_g_per_ton: Real,
    pub nox_g_per_ton: Real,
    pub pm_g_per_ton: Real,
}

static VLSFO: EmissionFactors = EmissionFactors {
    co2_g_per_ton: 3_114_000.0,
    sox_g_per_ton: 10_000.0,
    nox_g_per_ton: 57_000.0,
    pm_g_per_ton: 1_400.0,
};

static MGO: EmissionFactors = EmissionFactors {
    co2_g_per_ton: 3_206_000.0,
    sox_g_per_ton: 2_000.0,
    nox_g_per_ton: 60_000.0,
    pm_g_per_ton: 1_000.0,
};

static LSFO: EmissionFactors = EmissionFactors {
    co2_g_per_ton: 3_114_000.0,
    sox_g_per_ton: 20_000.0,
    nox_g_per_ton: 57_000.0,
    pm_g_per_ton: 1_800.0,
};

static HFO: EmissionFactors = EmissionFactors {
    co2_g_per_ton: 3_114_000.0,
    sox_g_per_ton: 70_000.0,
    nox_g_per_ton: 57_000.0,
    pm_g_per_ton: 2_400.0,
};

// Flat factors for the optimizer's voyage model, independent of grade.
pub(crate) static VOYAGE_CO2_G_PER_TON: Real = 3_114_000.0;
pub(crate) static VOYAGE_SOX_G_PER_TON: Real = 54_000.0;
pub(crate) static VOYAGE_NOX_G_PER_TON: Real = 57_000.0;

impl FuelType {
    /// Detailed factor set for this grade.
    pub fn factors(&self) -> &'static EmissionFactors {
        match self {
            Self::Vlsfo => &VLSFO,
            Self::Mgo => &MGO,
            Self::Lsfo => &LSFO,
            Self::Hfo => &HFO,
        }
    }
}
