use thiserror::Error;
use vo_core::{Real, VoError};

/// Errors from cost model construction or evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: Real,
        reason: &'static str,
    },
}

pub type CostResult<T> = Result<T, CostError>;

impl From<CostError> for VoError {
    fn from(e: CostError) -> Self {
        match e {
            CostError::InvalidInput { field, .. } => VoError::InvalidArg { what: field },
        }
    }
}

pub(crate) fn non_negative(field: &'static str, value: Real) -> CostResult<Real> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CostError::InvalidInput {
            field,
            value,
            reason: "must be a finite non-negative number",
        })
    }
}

pub(crate) fn positive(field: &'static str, value: Real) -> CostResult<Real> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CostError::InvalidInput {
            field,
            value,
            reason: "must be a finite positive number",
        })
    }
}
