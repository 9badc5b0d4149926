//! Annual Efficiency Ratio and CII rating bands.

use crate::error::{CiiResult, non_negative, positive};
use serde::{Deserialize, Serialize};
use vo_core::Real;
use vo_core::constants::GRAMS_PER_TON;
use vo_emissions::CO2_TONS_PER_TON_FUEL;
use vo_vessel::{VesselSpec, VesselType};

/// Average cargo capacity utilization assumed when none is given.
pub const DEFAULT_UTILIZATION: Real = 0.7;

/// A-E operational carbon intensity rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CiiRating {
    A,
    B,
    C,
    D,
    E,
}

impl CiiRating {
    /// Map an attained-to-reference AER ratio onto the rating bands.
    pub fn from_ratio(cii_ratio: Real) -> Self {
        if cii_ratio < 0.86 {
            Self::A
        } else if cii_ratio < 0.93 {
            Self::B
        } else if cii_ratio < 1.03 {
            Self::C
        } else if cii_ratio < 1.10 {
            Self::D
        } else {
            Self::E
        }
    }
}

impl std::fmt::Display for CiiRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        };
        f.write_str(letter)
    }
}

/// Reference AER line (g CO2 / ton-nm) for a vessel category.
///
/// Simplified demonstration values, not the IMO regression lines;
/// unclassified vessels use 10.0.
pub fn reference_aer(vessel_type: VesselType) -> Real {
    match vessel_type {
        VesselType::ContainerShip => 11.5,
        VesselType::BulkCarrier => 7.0,
        VesselType::OilTanker => 5.1,
        VesselType::GasCarrier => 8.9,
        VesselType::GeneralCargo => 15.3,
        VesselType::Unclassified => 10.0,
    }
}

/// Full CII calculation for one year of operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CiiReport {
    pub co2_tons_per_year: Real,
    pub transport_work_ton_nm: Real,
    pub aer_g_per_ton_nm: Real,
    pub reference_aer: Real,
    pub cii_ratio: Real,
    pub rating: CiiRating,
}

/// Rate a vessel's annual operation.
///
/// Transport work is deadweight x distance x utilization; all three must
/// be positive or the AER denominator would vanish.
pub fn cii_rating(
    vessel: &VesselSpec,
    annual_distance_nm: Real,
    annual_fuel_tons: Real,
    utilization: Real,
) -> CiiResult<CiiReport> {
    let annual_distance_nm = positive("annual_distance_nm", annual_distance_nm)?;
    let annual_fuel_tons = non_negative("annual_fuel_tons", annual_fuel_tons)?;
    let utilization = positive("utilization", utilization)?;

    let co2_tons_per_year = annual_fuel_tons * CO2_TONS_PER_TON_FUEL;
    let transport_work_ton_nm = vessel.deadweight_tons() * annual_distance_nm * utilization;
    if transport_work_ton_nm <= 0.0 {
        return Err(crate::error::CiiError::ZeroTransportWork {
            deadweight_tons: vessel.deadweight_tons(),
            distance_nm: annual_distance_nm,
            utilization,
        });
    }

    let aer_g_per_ton_nm = co2_tons_per_year * GRAMS_PER_TON / transport_work_ton_nm;
    let reference = reference_aer(vessel.vessel_type());
    let cii_ratio = aer_g_per_ton_nm / reference;

    Ok(CiiReport {
        co2_tons_per_year,
        transport_work_ton_nm,
        aer_g_per_ton_nm,
        reference_aer: reference,
        cii_ratio,
        rating: CiiRating::from_ratio(cii_ratio),
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
    fn rating_band_boundaries() {
        let cases = [
            (0.85999, CiiRating::A),
            (0.86, CiiRating::B),
            (0.92999, CiiRating::B),
            (0.93, CiiRating::C),
            (1.02999, CiiRating::C),
            (1.03, CiiRating::D),
            (1.09999, CiiRating::D),
            (1.10, CiiRating::E),
        ];
        for (ratio, expected) in cases {
            assert_eq!(
                CiiRating::from_ratio(ratio),
                expected,
                "ratio {ratio} misrated"
            );
        }
    }

    #[test]
    fn aer_formula() {
        // 100k dwt, 100k nm, utilization 0.7, 30k t fuel:
        // co2 = 93420 t, work = 7e9 ton-nm, aer = 13.346 g/ton-nm
        let report = cii_rating(&vessel(), 100_000.0, 30_000.0, DEFAULT_UTILIZATION).unwrap();
        assert!((report.co2_tons_per_year - 93_420.0).abs() < 1e-6);
        assert!((report.transport_work_ton_nm - 7.0e9).abs() < 1.0);
        assert!((report.aer_g_per_ton_nm - 93_420.0 * 1e6 / 7.0e9).abs() < 1e-9);
        assert_eq!(report.reference_aer, 11.5);
    }

    #[test]
    fn reference_lines_by_type() {
        assert_eq!(reference_aer(VesselType::OilTanker), 5.1);
        assert_eq!(reference_aer(VesselType::GeneralCargo), 15.3);
        assert_eq!(reference_aer(VesselType::Unclassified), 10.0);
    }

    #[test]
    fn zero_distance_fails() {
        let err = cii_rating(&vessel(), 0.0, 30_000.0, 0.7).unwrap_err();
        assert!(format!("{err}").contains("annual_distance_nm"));
    }

    #[test]
    fn zero_utilization_fails() {
        assert!(cii_rating(&vessel(), 100_000.0, 30_000.0, 0.0).is_err());
    }

    #[test]
    fn zero_fuel_is_a_perfect_rating() {
        let report = cii_rating(&vessel(), 100_000.0, 0.0, 0.7).unwrap();
        assert_eq!(report.co2_tons_per_year, 0.0);
        assert_eq!(report.rating, CiiRating::A);
    }
}
