//! Structured data import: CSV, JSON, and YAML vessel/route files.
//!
//! JSON and YAML files carry the wrapped form the sample data uses
//! (`{"vessels": [...]}` / `{"routes": [...]}`); CSV files carry one
//! record per row. Anything else is rejected up front with the filename
//! in the message - spreadsheets in particular must be exported to CSV
//! first.

use crate::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use vo_vessel::{RouteDef, VesselDef};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct VesselFile {
    vessels: Vec<VesselDef>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RouteFile {
    routes: Vec<RouteDef>,
}

/// Load vessel definitions from `path`, dispatching on the extension.
pub fn load_vessel_defs(path: &Path) -> AppResult<Vec<VesselDef>> {
    let defs = match extension_of(path)?.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json::<VesselFile>(path)?.vessels,
        "yaml" | "yml" => load_yaml::<VesselFile>(path)?.vessels,
        extension => {
            return Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            });
        }
    };
    if defs.is_empty() {
        return Err(AppError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!(count = defs.len(), path = %path.display(), "loaded vessel definitions");
    Ok(defs)
}

/// Load route definitions from `path`, dispatching on the extension.
pub fn load_route_defs(path: &Path) -> AppResult<Vec<RouteDef>> {
    let defs = match extension_of(path)?.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json::<RouteFile>(path)?.routes,
        "yaml" | "yml" => load_yaml::<RouteFile>(path)?.routes,
        extension => {
            return Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            });
        }
    };
    if defs.is_empty() {
        return Err(AppError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!(count = defs.len(), path = %path.display(), "loaded route definitions");
    Ok(defs)
}

fn extension_of(path: &Path) -> AppResult<String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => Ok(ext.to_ascii_lowercase()),
        None => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: String::new(),
        }),
    }
}

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    serde_json::from_str(&read(path)?).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    serde_yaml::from_str(&read(path)?).map_err(|source| AppError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    reader
        .deserialize()
        .map(|record| {
            record.map_err(|source| AppError::Csv {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
