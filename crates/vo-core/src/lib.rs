//! vo-core: stable foundation for voyopt.
//!
//! Contains:
//! - units (uom aliases for maritime quantities + constructors)
//! - numeric (Real + tolerances + finiteness/positivity guards)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VoError, VoResult};
pub use numeric::*;
pub use units::*;
