//! Error types for the speed optimizer.

use thiserror::Error;
use vo_core::{Real, VoError};
use vo_cost::CostError;
use vo_vessel::SpecError;

/// Errors from input validation, the voyage pipeline, or the search.
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: Real,
        reason: &'static str,
    },

    #[error("Search failed to converge within {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("Vessel model error: {0}")]
    Spec(#[from] SpecError),

    #[error("Cost model error: {0}")]
    Cost(#[from] CostError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] VoError),
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;

pub(crate) fn positive(field: &'static str, value: Real) -> OptimizeResult<Real> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(OptimizeError::InvalidInput {
            field,
            value,
            reason: "must be a finite positive number",
        })
    }
}

pub(crate) fn non_negative(field: &'static str, value: Real) -> OptimizeResult<Real> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(OptimizeError::InvalidInput {
            field,
            value,
            reason: "must be a finite non-negative number",
        })
    }
}
