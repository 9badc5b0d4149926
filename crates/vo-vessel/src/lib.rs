//! vo-vessel: vessel and route value records plus the vessel performance model.
//!
//! Specs are immutable after construction: the serde-facing `*Def` records
//! carry optional fields with documented defaults, and `from_def` applies
//! the defaults once, validates every invariant, and caches the derived
//! parameters. Downstream code only ever sees validated values.

pub mod error;
pub mod route;
pub mod vessel;

pub use error::{SpecError, SpecResult};
pub use route::{RouteDef, RouteSpec, Waypoint, WaypointDef};
pub use vessel::{VesselDef, VesselSpec, VesselType};
