//! Ranking of surf spots for Surfside.
//!
//! [`RankingEngine`] fetches an observation for every spot through a
//! [`SampleProvider`](surfside_core::SampleProvider), scores it with a
//! [`ConditionScorer`](surfside_core::ConditionScorer) and sorts the resulting
//! analyses best first. Fetches run concurrently and fail independently: a spot
//! whose provider errors or times out is ranked with neutral scores rather than
//! aborting the batch. [`top_n`] then turns the head of a ranking into
//! [`Recommendation`]s with a short reason each.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use surfside_core::test_support::{
//!     FixedSampleProvider, block_on, sample_observation, sample_spot,
//! };
//! use surfside_ranker::{RankingEngine, top_n};
//! use surfside_scorer::WeightedConditionScorer;
//!
//! let provider = FixedSampleProvider::default().with("dongsha", sample_observation());
//! let engine = RankingEngine::new(provider, WeightedConditionScorer::default());
//! let spots = [sample_spot("dongsha"), sample_spot("lulan")];
//! let date = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date");
//!
//! let analyses = block_on(engine.rank_spots(&spots, date));
//! assert_eq!(analyses.len(), 2);
//! assert_eq!(analyses[0].spot.id, "dongsha");
//! assert!(!analyses[1].is_available());
//!
//! let top = top_n(&analyses, 1);
//! assert!(top[0].reason.ends_with("best overall"));
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod recommend;

pub use engine::{RankingConfig, RankingEngine};
pub use error::RankingError;
pub use recommend::{
    FALLBACK_REASON, REASON_LIMIT, Recommendation, closing_phrase, reason, top_n,
};
