//! Shared application service layer for voyopt.
//!
//! This crate is the "collaborator" side of the core/collaborator split:
//! it owns session state, file import, and sample data, and hands the core
//! crates plain validated values. Core crates never read files or hold
//! state; this one never computes physics.

pub mod error;
pub mod import;
pub mod sample;
pub mod session;

pub use error::{AppError, AppResult};
pub use import::{load_route_defs, load_vessel_defs};
pub use sample::{sample_route_def, sample_vessel_def};
pub use session::Session;
