//! Bounded derivative-free 1-D minimization.

use crate::error::{OptimizeError, OptimizeResult, positive};
use vo_core::{Real, Tolerances, ensure_finite};

/// (sqrt(5) - 1) / 2
const INVPHI: Real = 0.618_033_988_749_894_8;

/// Search configuration.
pub struct SearchConfig {
    /// Maximum interval-shrinking iterations
    pub max_iterations: usize,
    /// Interval width (in the search variable) at which to stop
    pub x_abs_tol: Real,
    /// Objective-value tolerance for treating two candidates as tied;
    /// ties resolve to the lower search variable
    pub cost_tie: Tolerances,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            x_abs_tol: 1e-6,
            cost_tie: Tolerances {
                abs: 1e-9,
                rel: 1e-6,
            },
        }
    }
}

/// Search result.
#[derive(Debug)]
pub struct GoldenResult {
    /// Location of the minimum
    pub x: Real,
    /// Objective value at `x`
    pub fx: Real,
    /// Iterations used
    pub iterations: usize,
}

/// Golden-section minimization of `f` over `[lo, hi]`.
///
/// The objective need not be unimodal; the search still terminates within
/// the iteration cap and returns the best bracketed point. When the two
/// interior probes are cost-equal the interval shrinks from the right, so
/// flat regions collapse toward the LOW end of the interval.
///
/// Fails with [`OptimizeError::NonConvergence`] if the interval does not
/// shrink below `x_abs_tol` within `max_iterations`.
pub fn golden_section_min<F>(
    f: F,
    lo: Real,
    hi: Real,
    config: &SearchConfig,
) -> OptimizeResult<GoldenResult>
where
    F: Fn(Real) -> OptimizeResult<Real>,
{
    if !lo.is_finite() || !hi.is_finite() || hi < lo {
        return Err(OptimizeError::InvalidInput {
            field: "search_bounds",
            value: hi - lo,
            reason: "bounds must be finite with hi >= lo",
        });
    }
    positive("x_abs_tol", config.x_abs_tol)?;

    if hi - lo <= config.x_abs_tol {
        let fx = ensure_finite(f(lo)?, "objective")?;
        return Ok(GoldenResult {
            x: lo,
            fx,
            iterations: 0,
        });
    }

    let mut a = lo;
    let mut b = hi;
    let mut c = b - (b - a) * INVPHI;
    let mut d = a + (b - a) * INVPHI;
    let mut fc = ensure_finite(f(c)?, "objective")?;
    let mut fd = ensure_finite(f(d)?, "objective")?;

    for iter in 0..config.max_iterations {
        if b - a <= config.x_abs_tol {
            // c < d by construction, so a tie picks the lower point
            let (x, fx) = if fc <= fd { (c, fc) } else { (d, fd) };
            return Ok(GoldenResult {
                x,
                fx,
                iterations: iter,
            });
        }

        if fc <= fd {
            // minimum is in [a, d]
            b = d;
            d = c;
            fd = fc;
            c = b - (b - a) * INVPHI;
            fc = ensure_finite(f(c)?, "objective")?;
        } else {
            // minimum is in [c, b]
            a = c;
            c = d;
            fc = fd;
            d = a + (b - a) * INVPHI;
            fd = ensure_finite(f(d)?, "objective")?;
        }
    }

    Err(OptimizeError::NonConvergence {
        iterations: config.max_iterations,
    })
}
