//! Step-sampled speed profiles.

use crate::error::{OptimizeError, OptimizeResult, positive};
use crate::voyage::{SpeedPoint, evaluate_speed_point};
use vo_core::Real;
use vo_vessel::VesselSpec;

/// Tolerance for deciding whether a sample already sits on the upper bound.
const STEP_EPS: Real = 1e-9;

/// Evaluate the pipeline at `min, min+step, ...` up to and including the
/// upper bound.
///
/// The final sample is clamped to exactly `max` even when the range is not
/// a whole number of steps, so charts and sanity checks always cover the
/// full interval.
pub fn generate_speed_profile(
    vessel: &VesselSpec,
    distance_nm: Real,
    fuel_price_usd_per_ton: Real,
    day_rate_usd: Real,
    speed_range: (Real, Real),
    step_kn: Real,
) -> OptimizeResult<Vec<SpeedPoint>> {
    let (min_speed_kn, max_speed_kn) = speed_range;
    let min_speed_kn = positive("min_speed_kn", min_speed_kn)?;
    if !max_speed_kn.is_finite() || max_speed_kn < min_speed_kn {
        return Err(OptimizeError::InvalidInput {
            field: "max_speed_kn",
            value: max_speed_kn,
            reason: "must be finite and at least min_speed_kn",
        });
    }
    let step_kn = positive("step_kn", step_kn)?;

    let whole_steps = ((max_speed_kn - min_speed_kn) / step_kn + STEP_EPS).floor() as usize;
    let mut speeds: Vec<Real> = (0..=whole_steps)
        .map(|i| min_speed_kn + i as Real * step_kn)
        .filter(|s| *s <= max_speed_kn + STEP_EPS)
        .collect();

    // Ensure exact endpoint; the sample list is never empty because the
    // zeroth sample is min_speed itself
    let last = speeds.len() - 1;
    if (max_speed_kn - speeds[last]).abs() <= STEP_EPS {
        speeds[last] = max_speed_kn;
    } else {
        speeds.push(max_speed_kn);
    }

    speeds
        .into_iter()
        .map(|speed_kn| {
            evaluate_speed_point(
                vessel,
                distance_nm,
                speed_kn,
                fuel_price_usd_per_ton,
                day_rate_usd,
            )
        })
        .collect()
}

/// Row with the lowest total cost; earlier (slower) rows win ties.
pub fn min_cost_point(profile: &[SpeedPoint]) -> Option<&SpeedPoint> {
    let mut best: Option<&SpeedPoint> = None;
    for point in profile {
        match best {
            Some(b) if point.total_cost_usd >= b.total_cost_usd => {}
            _ => best = Some(point),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use vo_vessel::VesselDef;

    fn vessel() -> VesselSpec {
        VesselSpec::from_def(VesselDef::default()).unwrap()
    }

    #[test]
    fn whole_step_range_is_inclusive() {
        let profile =
            generate_speed_profile(&vessel(), 8200.0, 600.0, 25_000.0, (12.0, 24.0), 0.5).unwrap();
        assert_eq!(profile.len(), 25);
        assert_eq!(profile.first().unwrap().speed_kn, 12.0);
        assert_eq!(profile.last().unwrap().speed_kn, 24.0);
    }

    #[test]
    fn ragged_range_clamps_last_sample_to_max() {
        let profile =
            generate_speed_profile(&vessel(), 8200.0, 600.0, 25_000.0, (12.0, 23.8), 0.5).unwrap();
        // 12.0, 12.5, ..., 23.5, then the clamped 23.8
        assert_eq!(profile.len(), 25);
        assert_eq!(profile.last().unwrap().speed_kn, 23.8);
        let second_last = profile[profile.len() - 2].speed_kn;
        assert_eq!(second_last, 23.5);
    }

    #[test]
    fn speeds_are_strictly_increasing() {
        let profile =
            generate_speed_profile(&vessel(), 8200.0, 600.0, 25_000.0, (8.0, 24.0), 0.7).unwrap();
        for pair in profile.windows(2) {
            assert!(pair[1].speed_kn > pair[0].speed_kn);
        }
    }

    #[test]
    fn single_point_range() {
        let profile =
            generate_speed_profile(&vessel(), 8200.0, 600.0, 25_000.0, (16.0, 16.0), 0.5).unwrap();
        assert_eq!(profile.len(), 1);
        assert_eq!(profile[0].speed_kn, 16.0);
    }

    #[test]
    fn min_cost_row_prefers_lower_speed_on_tie() {
        let profile =
            generate_speed_profile(&vessel(), 8200.0, 0.0, 0.0, (12.0, 14.0), 1.0).unwrap();
        // zero prices: every row costs zero
        let best = min_cost_point(&profile).unwrap();
        assert_eq!(best.speed_kn, 12.0);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(
            generate_speed_profile(&vessel(), 8200.0, 600.0, 25_000.0, (12.0, 24.0), 0.0).is_err()
        );
    }
}
