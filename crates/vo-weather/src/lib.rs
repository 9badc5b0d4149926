//! vo-weather: synthetic ocean conditions and their voyage impact.
//!
//! This is demonstration data, not forecasting: samples are drawn
//! uniformly from documented ranges at each route waypoint for each hour.
//! The RNG is injected, so a seeded generator makes the whole crate
//! deterministic. The impact model is the simplified Beaufort-style
//! heuristic: wind above 15 kn and waves above 2 m slow the vessel, capped
//! at a 30 % reduction, with fuel burn rising 1.5x as fast.

pub mod impact;
pub mod synthetic;

pub use impact::{AverageConditions, HighRiskArea, WeatherImpact};
pub use synthetic::{CurrentSample, WaveSample, WeatherField, WindSample, synthetic_weather};
