//! Facade crate for the Surfside condition scoring and ranking engine.
//!
//! This crate re-exports the core domain types and exposes the scorer,
//! ranking engine and data providers behind feature flags.
//!
//! ```
//! # #[cfg(all(feature = "ranker", feature = "data"))]
//! # {
//! use chrono::NaiveDate;
//! use surfside_engine::{
//!     RankingEngine, SimulatedSampleProvider, SpotCatalogue, WeightedConditionScorer, top_n,
//! };
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .expect("runtime");
//! let engine = RankingEngine::new(
//!     SimulatedSampleProvider::new(7),
//!     WeightedConditionScorer::default(),
//! );
//! let date = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date");
//! let analyses = runtime.block_on(engine.rank_spots(SpotCatalogue::builtin().spots(), date));
//! assert_eq!(top_n(&analyses, 3).len(), 3);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use surfside_core::{
    Analysis, BestConditions, CalibrationFactor, CalibrationTable, CompassPoint,
    ConditionScorer, DATA_UNAVAILABLE, Difficulty, EnvironmentalSample, HourlySeries,
    HourlySeriesError, MAX_SCORE, NEUTRAL_SCORE, Observation, SampleError, SampleProvider,
    ScoreLevel, Scores, Spot, SpotError, Suggestion, TideEvent, TideKind, TideLevel,
    TidePreference, TideReading, WaveHeightRange, WaveReading, WeatherCondition, WeatherReading,
    WindReading, calibrate, extract_tide_events, fallback_schedule,
};

#[cfg(feature = "scorer")]
pub use surfside_scorer::{
    ScoreWeights, ScoringConfigError, ScoringThresholds, WeightedConditionScorer,
    build_suggestion,
};

#[cfg(feature = "ranker")]
pub use surfside_ranker::{
    RankingConfig, RankingEngine, RankingError, Recommendation, reason, top_n,
};

#[cfg(feature = "data")]
pub use surfside_data::{
    CachedSampleProvider, CalibratedSampleProvider, CatalogueError, SimulatedSampleProvider,
    SpotCatalogue, china_calibration_table,
};
