//! vo-cii: IMO Carbon Intensity Indicator rating and compliance forecasting.
//!
//! The CII compares CO2 emitted per unit of transport work (the AER,
//! g CO2 / ton-nm) against a per-vessel-type reference line; the ratio maps
//! to the A-E rating bands. The forecaster runs two candidate speeds
//! through the vessel performance model and rates both.

pub mod error;
pub mod forecast;
pub mod rating;

pub use error::{CiiError, CiiResult};
pub use forecast::{
    ComplianceForecast, ComplianceSavings, ComplianceScenario, compliance_forecast,
};
pub use rating::{CiiRating, CiiReport, DEFAULT_UTILIZATION, cii_rating, reference_aer};
