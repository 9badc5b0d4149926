//! Error types for spec construction and the performance model.

use vo_core::{Real, VoError, ensure_finite};
use thiserror::Error;

/// Errors raised while validating vessel/route data or evaluating the
/// performance model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidField {
        field: &'static str,
        value: Real,
        reason: &'static str,
    },

    #[error("Route needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    #[error("Waypoint {index} out of range: {field} = {value}")]
    WaypointOutOfRange {
        index: usize,
        field: &'static str,
        value: Real,
    },
}

pub type SpecResult<T> = Result<T, SpecError>;

impl From<SpecError> for VoError {
    fn from(e: SpecError) -> Self {
        match e {
            SpecError::InvalidField { field, .. } => VoError::InvalidArg { what: field },
            SpecError::TooFewWaypoints { .. } => VoError::InvalidArg { what: "waypoints" },
            SpecError::WaypointOutOfRange { field, .. } => VoError::InvalidArg { what: field },
        }
    }
}

/// Field must be finite and strictly positive.
pub(crate) fn positive(field: &'static str, value: Real) -> SpecResult<Real> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SpecError::InvalidField {
            field,
            value,
            reason: "must be positive",
        })
    }
}

pub(crate) fn finite(field: &'static str, value: Real) -> SpecResult<Real> {
    ensure_finite(value, field).map_err(|_| SpecError::InvalidField {
        field,
        value,
        reason: "must be finite",
    })
}
