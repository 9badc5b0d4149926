//! Session state owned by the frontend.
//!
//! The core crates are pure; everything that persists between user
//! actions lives here. Loading new data replaces the relevant value
//! wholesale and drops results computed against the old one.

use crate::error::AppResult;
use tracing::info;
use vo_optimizer::OptimizationResult;
use vo_vessel::{RouteDef, RouteSpec, VesselDef, VesselSpec};

#[derive(Debug, Default)]
pub struct Session {
    vessel: Option<VesselSpec>,
    route: Option<RouteSpec>,
    last_optimization: Option<OptimizationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and install a new vessel; stale optimization results are
    /// discarded with the old vessel.
    pub fn load_vessel(&mut self, def: VesselDef) -> AppResult<&VesselSpec> {
        let vessel = VesselSpec::from_def(def)?;
        info!(name = vessel.name(), "vessel loaded");
        self.last_optimization = None;
        Ok(self.vessel.insert(vessel))
    }

    /// Validate and install a new route; stale optimization results are
    /// discarded with the old route.
    pub fn load_route(&mut self, def: RouteDef) -> AppResult<&RouteSpec> {
        let route = RouteSpec::from_def(def)?;
        info!(name = route.name(), "route loaded");
        self.last_optimization = None;
        Ok(self.route.insert(route))
    }

    pub fn vessel(&self) -> Option<&VesselSpec> {
        self.vessel.as_ref()
    }

    pub fn route(&self) -> Option<&RouteSpec> {
        self.route.as_ref()
    }

    pub fn record_optimization(&mut self, result: OptimizationResult) {
        self.last_optimization = Some(result);
    }

    pub fn last_optimization(&self) -> Option<&OptimizationResult> {
        self.last_optimization.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_route_def, sample_vessel_def};
    use vo_optimizer::optimize_speed;

    #[test]
    fn loading_vessel_clears_stale_results() {
        let mut session = Session::new();
        session.load_vessel(sample_vessel_def()).unwrap();
        session.load_route(sample_route_def()).unwrap();

        let result = optimize_speed(
            session.vessel().unwrap(),
            session.route().unwrap().distance_nm(),
            600.0,
            25_000.0,
            12.0,
            24.0,
            None,
        )
        .unwrap();
        session.record_optimization(result);
        assert!(session.last_optimization().is_some());

        session.load_vessel(sample_vessel_def()).unwrap();
        assert!(session.last_optimization().is_none());
    }

    #[test]
    fn invalid_vessel_leaves_session_untouched() {
        let mut session = Session::new();
        session.load_vessel(sample_vessel_def()).unwrap();

        let mut bad = sample_vessel_def();
        bad.design_speed_kn = Some(-5.0);
        assert!(session.load_vessel(bad).is_err());
        assert_eq!(session.vessel().unwrap().name(), "Example Vessel");
    }
}
