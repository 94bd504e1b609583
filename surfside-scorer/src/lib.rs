//! Condition scoring and surfing advice for Surfside spots.
//!
//! The crate provides two complementary capabilities:
//! - **Condition scoring** rates wave, wind, tide and weather readings on a
//!   ten-point scale and combines them into an overall score.
//!   [`WeightedConditionScorer`] implements the
//!   [`ConditionScorer`](surfside_core::ConditionScorer) trait so callers can
//!   plug it into the ranking engine.
//! - **Advice generation** turns a sample and its scores into suggestions,
//!   safety warnings and a one-line summary via [`build_suggestion`].
//!
//! # Examples
//!
//! ```
//! use surfside_core::ConditionScorer;
//! use surfside_core::test_support::{sample_reading, sample_spot};
//! use surfside_scorer::{ScoreWeights, ScoringThresholds, WeightedConditionScorer};
//!
//! let scorer = WeightedConditionScorer::with_config(
//!     ScoreWeights::default(),
//!     ScoringThresholds::default(),
//! )
//! .expect("default configuration is valid");
//! let scores = scorer.score(&sample_spot("lulan"), &sample_reading());
//! assert_eq!(scores.level().label(), "Excellent");
//! ```

#![forbid(unsafe_code)]

mod error;
mod suggestion;
mod types;
mod weighted;

pub use error::ScoringConfigError;
pub use suggestion::{
    LARGE_WAVE_METRES, STRONG_WIND_KNOTS, build_suggestion, summary, timing_advice,
};
pub use types::{
    Band, Falloff, ScoreWeights, ScoringThresholds, TideThresholds, WaveThresholds,
    WeatherThresholds, WindThresholds,
};
pub use weighted::{WeightedConditionScorer, condition_bonus};

#[cfg(test)]
mod tests;
