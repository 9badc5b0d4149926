//! Vessel specification and performance model.
//!
//! ## Model
//!
//! Fuel burn follows the cubic law: consumption scales with the cube of
//! speed, anchored at the design point:
//!
//! ```text
//! fuel(v)  = design_consumption * (v / design_speed)^3     [tons/day]
//! load(v)  = 100 * (v / max_speed)^3                       [% of MCR]
//! ```
//!
//! The engine runs most efficiently between 70 and 85 % of MCR; the
//! corresponding speed band is cached at construction.

use crate::error::{SpecError, SpecResult, positive};
use serde::{Deserialize, Serialize};
use vo_core::Real;

/// Engine load band (% of MCR) where specific fuel consumption is lowest.
static OPTIMAL_LOAD_MIN_PCT: Real = 70.0;
static OPTIMAL_LOAD_MAX_PCT: Real = 85.0;

/// Vessel category, used to pick the CII reference line.
///
/// Serialized under the human-readable names; parsing happens through
/// [`VesselType::from_name`] on the raw string carried by [`VesselDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VesselType {
    #[serde(rename = "Container Ship")]
    ContainerShip,
    #[serde(rename = "Bulk Carrier")]
    BulkCarrier,
    #[serde(rename = "Oil Tanker")]
    OilTanker,
    #[serde(rename = "Gas Carrier")]
    GasCarrier,
    #[serde(rename = "General Cargo")]
    GeneralCargo,
    /// Anything outside the five known categories. Kept explicit so the
    /// default reference line is visible in the type, not hidden in a
    /// lookup fallback.
    Unclassified,
}

impl VesselType {
    /// Parse a human-readable category name. Unknown names map to
    /// [`VesselType::Unclassified`]; this is a documented default, not an
    /// error.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Container Ship" => Self::ContainerShip,
            "Bulk Carrier" => Self::BulkCarrier,
            "Oil Tanker" => Self::OilTanker,
            "Gas Carrier" => Self::GasCarrier,
            "General Cargo" => Self::GeneralCargo,
            _ => Self::Unclassified,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ContainerShip => "Container Ship",
            Self::BulkCarrier => "Bulk Carrier",
            Self::OilTanker => "Oil Tanker",
            Self::GasCarrier => "Gas Carrier",
            Self::GeneralCargo => "General Cargo",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for VesselType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Serde-facing vessel record. Every field is optional; [`VesselSpec::from_def`]
/// applies the documented defaults exactly once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselDef {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub vessel_type: Option<String>,
    pub length_m: Option<Real>,
    pub beam_m: Option<Real>,
    pub draft_m: Option<Real>,
    pub deadweight_tons: Option<Real>,
    pub engine_type: Option<String>,
    pub max_speed_kn: Option<Real>,
    pub max_power_kw: Option<Real>,
    pub design_speed_kn: Option<Real>,
    pub design_consumption_tpd: Option<Real>,
    pub year_built: Option<i32>,
}

/// Validated, immutable vessel specification with cached derived
/// parameters. Constructed only through [`VesselSpec::from_def`].
#[derive(Debug, Clone, Serialize)]
pub struct VesselSpec {
    name: String,
    vessel_type: VesselType,
    length_m: Real,
    beam_m: Real,
    draft_m: Real,
    deadweight_tons: Real,
    engine_type: String,
    max_speed_kn: Real,
    max_power_kw: Real,
    design_speed_kn: Real,
    design_consumption_tpd: Real,
    year_built: i32,

    // Derived, computed once at construction
    sfc_g_per_kwh: Real,
    optimal_load_min_pct: Real,
    optimal_load_max_pct: Real,
    optimal_speed_min_kn: Real,
    optimal_speed_max_kn: Real,
}

impl VesselSpec {
    /// Apply defaults, validate invariants, and cache derived parameters.
    ///
    /// Defaults (applied only for absent fields): name "Unknown Vessel",
    /// type Container Ship, length 300 m, beam 40 m, draft 14.5 m,
    /// deadweight 100 000 t, engine "Unknown", max speed 25 kn, max power
    /// 68 000 kW, design speed 20 kn, design consumption 180 t/day,
    /// year built 2010.
    pub fn from_def(def: VesselDef) -> SpecResult<Self> {
        let length_m = positive("length_m", def.length_m.unwrap_or(300.0))?;
        let beam_m = positive("beam_m", def.beam_m.unwrap_or(40.0))?;
        let draft_m = positive("draft_m", def.draft_m.unwrap_or(14.5))?;
        let deadweight_tons = positive("deadweight_tons", def.deadweight_tons.unwrap_or(100_000.0))?;
        let max_speed_kn = positive("max_speed_kn", def.max_speed_kn.unwrap_or(25.0))?;
        let max_power_kw = positive("max_power_kw", def.max_power_kw.unwrap_or(68_000.0))?;
        let design_speed_kn = positive("design_speed_kn", def.design_speed_kn.unwrap_or(20.0))?;
        let design_consumption_tpd = positive(
            "design_consumption_tpd",
            def.design_consumption_tpd.unwrap_or(180.0),
        )?;

        if max_speed_kn < design_speed_kn {
            return Err(SpecError::InvalidField {
                field: "max_speed_kn",
                value: max_speed_kn,
                reason: "must be at least design_speed_kn",
            });
        }

        let year_built = def.year_built.unwrap_or(2010);
        let vessel_type = match def.vessel_type.as_deref() {
            Some(name) => VesselType::from_name(name),
            None => VesselType::ContainerShip,
        };

        let optimal_speed_min_kn = design_speed_kn * (OPTIMAL_LOAD_MIN_PCT / 100.0).cbrt();
        let optimal_speed_max_kn = design_speed_kn * (OPTIMAL_LOAD_MAX_PCT / 100.0).cbrt();

        Ok(Self {
            name: def.name.unwrap_or_else(|| "Unknown Vessel".to_string()),
            vessel_type,
            length_m,
            beam_m,
            draft_m,
            deadweight_tons,
            engine_type: def.engine_type.unwrap_or_else(|| "Unknown".to_string()),
            max_speed_kn,
            max_power_kw,
            design_speed_kn,
            design_consumption_tpd,
            year_built,
            sfc_g_per_kwh: sfc_for_year(year_built),
            optimal_load_min_pct: OPTIMAL_LOAD_MIN_PCT,
            optimal_load_max_pct: OPTIMAL_LOAD_MAX_PCT,
            optimal_speed_min_kn,
            optimal_speed_max_kn,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vessel_type(&self) -> VesselType {
        self.vessel_type
    }

    pub fn length_m(&self) -> Real {
        self.length_m
    }

    pub fn beam_m(&self) -> Real {
        self.beam_m
    }

    pub fn draft_m(&self) -> Real {
        self.draft_m
    }

    pub fn deadweight_tons(&self) -> Real {
        self.deadweight_tons
    }

    pub fn engine_type(&self) -> &str {
        &self.engine_type
    }

    pub fn max_speed_kn(&self) -> Real {
        self.max_speed_kn
    }

    pub fn max_power_kw(&self) -> Real {
        self.max_power_kw
    }

    pub fn design_speed_kn(&self) -> Real {
        self.design_speed_kn
    }

    pub fn design_consumption_tpd(&self) -> Real {
        self.design_consumption_tpd
    }

    pub fn year_built(&self) -> i32 {
        self.year_built
    }

    /// Specific fuel consumption in g/kWh, a step function of build year.
    pub fn sfc_g_per_kwh(&self) -> Real {
        self.sfc_g_per_kwh
    }

    pub fn optimal_load_min_pct(&self) -> Real {
        self.optimal_load_min_pct
    }

    pub fn optimal_load_max_pct(&self) -> Real {
        self.optimal_load_max_pct
    }

    pub fn optimal_speed_min_kn(&self) -> Real {
        self.optimal_speed_min_kn
    }

    pub fn optimal_speed_max_kn(&self) -> Real {
        self.optimal_speed_max_kn
    }

    /// Daily fuel burn at `speed_kn`, tons per day.
    ///
    /// The cubic law is anchored at the design point, so
    /// `fuel_consumption_tpd(design_speed)` returns the design consumption
    /// exactly. Non-positive speed is rejected; the curve has no physical
    /// meaning there.
    pub fn fuel_consumption_tpd(&self, speed_kn: Real) -> SpecResult<Real> {
        let speed_kn = positive("speed_kn", speed_kn)?;
        let r = speed_kn / self.design_speed_kn;
        Ok(self.design_consumption_tpd * r * r * r)
    }

    /// Engine load at `speed_kn` as a percentage of MCR.
    pub fn engine_load_pct(&self, speed_kn: Real) -> SpecResult<Real> {
        let speed_kn = positive("speed_kn", speed_kn)?;
        let r = speed_kn / self.max_speed_kn;
        Ok(100.0 * r * r * r)
    }

    /// Whether `speed_kn` keeps the engine inside its optimal load band.
    pub fn in_optimal_range(&self, speed_kn: Real) -> SpecResult<bool> {
        let load = self.engine_load_pct(speed_kn)?;
        Ok(load >= self.optimal_load_min_pct && load <= self.optimal_load_max_pct)
    }
}

fn sfc_for_year(year_built: i32) -> Real {
    if year_built >= 2015 {
        175.0
    } else if year_built >= 2000 {
        185.0
    } else {
        195.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spec() -> VesselSpec {
        VesselSpec::from_def(VesselDef::default()).unwrap()
    }

    #[test]
    fn defaults_applied_once() {
        let v = spec();
        assert_eq!(v.name(), "Unknown Vessel");
        assert_eq!(v.vessel_type(), VesselType::ContainerShip);
        assert_eq!(v.design_speed_kn(), 20.0);
        assert_eq!(v.design_consumption_tpd(), 180.0);
        assert_eq!(v.max_speed_kn(), 25.0);
        assert_eq!(v.year_built(), 2010);
    }

    #[test]
    fn sfc_steps_by_build_year() {
        let mk = |year| {
            VesselSpec::from_def(VesselDef {
                year_built: Some(year),
                ..Default::default()
            })
            .unwrap()
            .sfc_g_per_kwh()
        };
        assert_eq!(mk(2020), 175.0);
        assert_eq!(mk(2015), 175.0);
        assert_eq!(mk(2014), 185.0);
        assert_eq!(mk(2000), 185.0);
        assert_eq!(mk(1999), 195.0);
    }

    #[test]
    fn optimal_speed_band_from_load_band() {
        let v = spec();
        let expected_min = 20.0 * (0.70_f64).cbrt();
        let expected_max = 20.0 * (0.85_f64).cbrt();
        assert!((v.optimal_speed_min_kn() - expected_min).abs() < 1e-12);
        assert!((v.optimal_speed_max_kn() - expected_max).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let bad = VesselSpec::from_def(VesselDef {
            length_m: Some(-1.0),
            ..Default::default()
        });
        assert!(matches!(
            bad,
            Err(SpecError::InvalidField {
                field: "length_m",
                ..
            })
        ));
    }

    #[test]
    fn rejects_design_speed_above_max() {
        let bad = VesselSpec::from_def(VesselDef {
            max_speed_kn: Some(18.0),
            design_speed_kn: Some(20.0),
            ..Default::default()
        });
        assert!(bad.is_err());
    }

    #[test]
    fn fuel_at_design_speed_is_design_consumption_exactly() {
        let v = spec();
        assert_eq!(v.fuel_consumption_tpd(20.0).unwrap(), 180.0);
    }

    #[test]
    fn cubic_law_half_and_overspeed() {
        let v = spec();
        assert!((v.fuel_consumption_tpd(10.0).unwrap() - 180.0 * 0.125).abs() < 1e-9);
        assert!((v.fuel_consumption_tpd(24.0).unwrap() - 180.0 * 1.728).abs() < 1e-9);
    }

    #[test]
    fn engine_load_at_bounds() {
        let v = spec();
        assert!((v.engine_load_pct(25.0).unwrap() - 100.0).abs() < 1e-9);
        assert!((v.engine_load_pct(12.5).unwrap() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn optimal_range_check() {
        let v = spec();
        // 70% load at 25 * 0.70^(1/3) ~ 22.19 kn
        let inside = 25.0 * (0.75_f64).cbrt();
        assert!(v.in_optimal_range(inside).unwrap());
        assert!(!v.in_optimal_range(12.0).unwrap());
        assert!(!v.in_optimal_range(25.0).unwrap());
    }

    #[test]
    fn rejects_non_positive_speed() {
        let v = spec();
        assert!(v.fuel_consumption_tpd(0.0).is_err());
        assert!(v.engine_load_pct(-4.0).is_err());
    }

    #[test]
    fn unknown_type_is_unclassified() {
        assert_eq!(VesselType::from_name("Ro-Ro"), VesselType::Unclassified);
        assert_eq!(
            VesselType::from_name("Bulk Carrier"),
            VesselType::BulkCarrier
        );
    }

    proptest! {
        #[test]
        fn cubic_scaling_law(speed in 0.5f64..30.0, factor in 0.1f64..3.0) {
            let v = spec();
            let base = v.fuel_consumption_tpd(speed).unwrap();
            let scaled = v.fuel_consumption_tpd(speed * factor).unwrap();
            let expected = base * factor.powi(3);
            prop_assert!((scaled - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
