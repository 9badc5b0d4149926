//! Error types for the vo-app service layer.

use std::path::PathBuf;
use vo_cii::CiiError;
use vo_core::VoError;
use vo_cost::CostError;
use vo_optimizer::OptimizeError;
use vo_vessel::SpecError;

/// Application error wrapping file handling and every domain error, giving
/// frontends one error surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read data file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported data format: {path} (extension '{extension}'; expected csv, json, yaml or yml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("CSV parse error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("No records found in {path}")]
    Empty { path: PathBuf },

    #[error("Invalid vessel/route data: {0}")]
    Spec(#[from] SpecError),

    #[error("Optimization failed: {0}")]
    Optimize(#[from] OptimizeError),

    #[error("Carbon intensity calculation failed: {0}")]
    Cii(#[from] CiiError),

    #[error("Cost model error: {0}")]
    Cost(#[from] CostError),

    #[error("Numeric error: {0}")]
    Core(#[from] VoError),
}

pub type AppResult<T> = Result<T, AppError>;
