//! Core domain types for the Surfside engine.
//!
//! This crate holds the data model shared by every other crate: spots,
//! environmental samples, hourly curves, tide events, scores and analyses.
//! It also defines the two seams the engine is built around,
//! [`ConditionScorer`] and [`SampleProvider`], together with the pure
//! transformations that need no configuration: tide-event extraction and
//! calibration.
//!
//! Model constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]

mod analysis;
mod calibration;
mod compass;
mod hourly;
pub mod numeric;
pub mod provider;
mod sample;
mod score;
mod scorer;
mod spot;
mod tide;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use analysis::{Analysis, DATA_UNAVAILABLE, Suggestion};
pub use calibration::{CalibrationFactor, CalibrationTable, calibrate};
pub use compass::CompassPoint;
pub use hourly::{HOURS_PER_DAY, HourlySeries, HourlySeriesError};
pub use provider::{Observation, SampleError, SampleProvider};
pub use sample::{
    EnvironmentalSample, TideLevel, TideReading, WaveReading, WeatherCondition, WeatherReading,
    WindReading,
};
pub use score::{MAX_SCORE, NEUTRAL_SCORE, ScoreLevel, Scores};
pub use scorer::ConditionScorer;
pub use spot::{BestConditions, Difficulty, Spot, SpotError, TidePreference, WaveHeightRange};
pub use tide::{
    HIGH_WATER_THRESHOLD, LOW_WATER_THRESHOLD, TideEvent, TideKind, extract_tide_events,
    fallback_schedule,
};
