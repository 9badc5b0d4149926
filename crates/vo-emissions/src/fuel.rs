//! Marine fuel grades.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fuel grade, keyed by sulfur content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    /// Very Low Sulfur Fuel Oil (0.5 % sulfur)
    #[serde(rename = "VLSFO")]
    Vlsfo,
    /// Marine Gas Oil (0.1 % sulfur)
    #[serde(rename = "MGO")]
    Mgo,
    /// Low Sulfur Fuel Oil (1.0 % sulfur)
    #[serde(rename = "LSFO")]
    Lsfo,
    /// Heavy Fuel Oil (3.5 % sulfur)
    #[serde(rename = "HFO")]
    Hfo,
}

impl FuelType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vlsfo => "VLSFO",
            Self::Mgo => "MGO",
            Self::Lsfo => "LSFO",
            Self::Hfo => "HFO",
        }
    }

    /// Parse a fuel grade name. Unknown names fall back to VLSFO; this is
    /// a documented default (logged, not an error).
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "VLSFO" => Self::Vlsfo,
            "MGO" => Self::Mgo,
            "LSFO" => Self::Lsfo,
            "HFO" => Self::Hfo,
            other => {
                warn!("unknown fuel type '{other}', falling back to VLSFO");
                Self::Vlsfo
            }
        }
    }
}

impl Default for FuelType {
    fn default() -> Self {
        Self::Vlsfo
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_grades() {
        assert_eq!(FuelType::parse_or_default("MGO"), FuelType::Mgo);
        assert_eq!(FuelType::parse_or_default("hfo"), FuelType::Hfo);
        assert_eq!(FuelType::parse_or_default(" lsfo "), FuelType::Lsfo);
    }

    #[test]
    fn unknown_grade_falls_back_to_vlsfo() {
        assert_eq!(FuelType::parse_or_default("LNG"), FuelType::Vlsfo);
    }
}
