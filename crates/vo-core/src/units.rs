// vo-core/src/units.rs

use crate::numeric::Real;
use uom::si::f64::{Length as UomLength, Mass as UomMass, Time as UomTime, Velocity as UomVelocity};

// Public canonical unit types (f64). The domain runs on maritime units
// (knots, nautical miles, days, metric tons); uom carries the conversions.
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn nm(v: f64) -> Length {
    use uom::si::length::nautical_mile;
    Length::new::<nautical_mile>(v)
}

#[inline]
pub fn kn(v: f64) -> Velocity {
    use uom::si::velocity::knot;
    Velocity::new::<knot>(v)
}

#[inline]
pub fn days(v: f64) -> Time {
    use uom::si::time::day;
    Time::new::<day>(v)
}

#[inline]
pub fn tons(v: f64) -> Mass {
    use uom::si::mass::ton;
    Mass::new::<ton>(v)
}

/// Time to cover `distance` at `speed`. The one conversion every crate
/// shares; a knot is one nautical mile per hour, so this is
/// distance_nm / (speed_kn * 24) days.
#[inline]
pub fn transit_time(distance: Length, speed: Velocity) -> Time {
    distance / speed
}

/// Convenience wrapper over [`transit_time`] in raw domain units.
///
/// `speed_kn` must be positive; callers validate before conversion.
#[inline]
pub fn transit_time_days(distance_nm: Real, speed_kn: Real) -> Real {
    use uom::si::time::day;
    transit_time(nm(distance_nm), kn(speed_kn)).get::<day>()
}

pub mod constants {
    use super::Real;

    /// Grams per metric ton, for emission factor conversions.
    pub const GRAMS_PER_TON: Real = 1_000_000.0;

    /// Days used to annualize carrying costs.
    pub const DAYS_PER_YEAR: Real = 365.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _d = nm(8352.0);
        let _v = kn(20.0);
        let _t = days(17.4);
        let _m = tons(180.0);
    }

    #[test]
    fn transit_time_matches_hand_formula() {
        // 8200 nm at 20 kn: 8200 / (20 * 24) days
        let t = transit_time_days(8200.0, 20.0);
        let expected = 8200.0 / (20.0 * 24.0);
        assert!((t - expected).abs() < 1e-9);
    }

    #[test]
    fn transit_time_through_uom() {
        use uom::si::time::hour;
        let t = transit_time(nm(100.0), kn(10.0));
        assert!((t.get::<hour>() - 10.0).abs() < 1e-9);
    }
}
