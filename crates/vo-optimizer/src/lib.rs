//! vo-optimizer: economically optimal speed for a voyage.
//!
//! The objective is total voyage cost (fuel + time charter) as a function
//! of speed: the cubic fuel law pushes cost up with speed while the time
//! charter term pulls it down, so slow steaming wins whenever the day rate
//! is small against the fuel penalty. A bounded golden-section search
//! minimizes the objective without assuming unimodality of user-supplied
//! bounds; ties resolve to the lowest speed.
//!
//! Every quantity the optimizer reports (the optimum, the design-speed
//! baseline, and each profile sample) flows through the single
//! [`evaluate_speed_point`] pipeline, so the numbers are mutually
//! consistent by construction.

pub mod economic;
pub mod error;
pub mod optimize;
pub mod profile;
pub mod search;
pub mod voyage;

pub use economic::{ContributionEntry, EconomicAnalysis, EconomicPoint, economic_profile};
pub use error::{OptimizeError, OptimizeResult};
pub use optimize::{OptimizationResult, optimize_speed};
pub use profile::{generate_speed_profile, min_cost_point};
pub use search::{GoldenResult, SearchConfig, golden_section_min};
pub use voyage::{SpeedPoint, evaluate_speed_point};
