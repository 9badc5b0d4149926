//! Error types for carbon intensity calculations.

use thiserror::Error;
use vo_core::Real;
use vo_vessel::SpecError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CiiError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: Real,
        reason: &'static str,
    },

    #[error("Transport work is zero (deadweight {deadweight_tons} t, distance {distance_nm} nm, utilization {utilization}); cannot form AER")]
    ZeroTransportWork {
        deadweight_tons: Real,
        distance_nm: Real,
        utilization: Real,
    },

    #[error("Current annual fuel is zero; percentage reduction is undefined")]
    ZeroAnnualFuel,

    #[error("Vessel model error: {0}")]
    Spec(#[from] SpecError),
}

pub type CiiResult<T> = Result<T, CiiError>;

pub(crate) fn positive(field: &'static str, value: Real) -> CiiResult<Real> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CiiError::InvalidInput {
            field,
            value,
            reason: "must be a finite positive number",
        })
    }
}

pub(crate) fn non_negative(field: &'static str, value: Real) -> CiiResult<Real> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CiiError::InvalidInput {
            field,
            value,
            reason: "must be a finite non-negative number",
        })
    }
}
