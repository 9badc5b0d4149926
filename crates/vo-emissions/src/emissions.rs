//! The two emissions operations.

use crate::factors::{VOYAGE_CO2_G_PER_TON, VOYAGE_NOX_G_PER_TON, VOYAGE_SOX_G_PER_TON};
use crate::fuel::FuelType;
use serde::{Deserialize, Serialize};
use vo_core::constants::GRAMS_PER_TON;
use vo_core::{Real, VoResult, ensure_non_negative};

/// Four-pollutant inventory from the per-grade factor table, tons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedEmissions {
    pub co2_tons: Real,
    pub sox_tons: Real,
    pub nox_tons: Real,
    pub pm_tons: Real,
}

/// Three-pollutant inventory from the flat voyage factors, tons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoyageEmissions {
    pub co2_tons: Real,
    pub sox_tons: Real,
    pub nox_tons: Real,
}

/// Pollutant masses for `fuel_tons` of the given grade.
pub fn detailed_emissions(fuel_tons: Real, fuel_type: FuelType) -> VoResult<DetailedEmissions> {
    let fuel_tons = ensure_non_negative(fuel_tons, "fuel_tons")?;
    let f = fuel_type.factors();
    Ok(DetailedEmissions {
        co2_tons: fuel_tons * f.co2_g_per_ton / GRAMS_PER_TON,
        sox_tons: fuel_tons * f.sox_g_per_ton / GRAMS_PER_TON,
        nox_tons: fuel_tons * f.nox_g_per_ton / GRAMS_PER_TON,
        pm_tons: fuel_tons * f.pm_g_per_ton / GRAMS_PER_TON,
    })
}

/// Pollutant masses for `fuel_tons` under the grade-independent voyage
/// factors. This is what the speed optimizer reports.
pub fn voyage_emissions(fuel_tons: Real) -> VoResult<VoyageEmissions> {
    let fuel_tons = ensure_non_negative(fuel_tons, "fuel_tons")?;
    Ok(VoyageEmissions {
        co2_tons: fuel_tons * VOYAGE_CO2_G_PER_TON / GRAMS_PER_TON,
        sox_tons: fuel_tons * VOYAGE_SOX_G_PER_TON / GRAMS_PER_TON,
        nox_tons: fuel_tons * VOYAGE_NOX_G_PER_TON / GRAMS_PER_TON,
    })
}
