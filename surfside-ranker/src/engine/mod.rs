//! `RankingEngine`: fetch, score and order a set of spots for one date.
//!
//! Each spot is assessed as an independent unit. A fetch that fails or
//! overruns [`RankingConfig::fetch_timeout`] only affects its own spot, which
//! receives [`Analysis::unavailable`] in place of a scored analysis.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use futures_util::future::join_all;
use log::warn;
use surfside_core::{
    Analysis, ConditionScorer, Observation, SampleError, SampleProvider, Spot, extract_tide_events,
};
use surfside_scorer::build_suggestion;

use crate::RankingError;

/// Configuration for [`RankingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// Longest wait for a single spot's observation.
    pub fetch_timeout: Duration,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

/// Ranks spots by the overall score of their conditions.
///
/// The engine is generic over its collaborators: the provider supplying
/// observations and the scorer rating them. Futures returned by its methods
/// must be polled inside a Tokio runtime with the time driver enabled.
pub struct RankingEngine<P, S>
where
    P: SampleProvider,
    S: ConditionScorer,
{
    provider: P,
    scorer: S,
    config: RankingConfig,
}

impl<P, S> RankingEngine<P, S>
where
    P: SampleProvider,
    S: ConditionScorer,
{
    /// Construct an engine using default configuration.
    #[must_use]
    pub fn new(provider: P, scorer: S) -> Self {
        Self::with_config(provider, scorer, RankingConfig::default())
    }

    /// Construct an engine with explicit configuration.
    #[must_use]
    pub const fn with_config(provider: P, scorer: S, config: RankingConfig) -> Self {
        Self {
            provider,
            scorer,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Fetch and score a single spot.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::SampleUnavailable`] when the provider fails or
    /// does not answer within the fetch timeout.
    pub async fn analyse_spot(
        &self,
        spot: &Spot,
        date: NaiveDate,
    ) -> Result<Analysis, RankingError> {
        let observation = self.fetch(spot, date).await?;
        Ok(self.assess(spot, date, observation))
    }

    /// Assess every spot concurrently and sort by overall score, best first.
    ///
    /// The result always holds one analysis per input spot. Spots whose data
    /// cannot be fetched receive a neutral analysis. Equal scores keep their
    /// input order.
    pub async fn rank_spots(&self, spots: &[Spot], date: NaiveDate) -> Vec<Analysis> {
        let assessments = spots
            .iter()
            .map(|spot| self.analyse_or_default(spot, date));
        let mut analyses = join_all(assessments).await;
        sort_by_overall(&mut analyses);
        analyses
    }

    /// Rank only the spots belonging to `region`.
    pub async fn rank_region(&self, spots: &[Spot], region: &str, date: NaiveDate) -> Vec<Analysis> {
        let regional: Vec<Spot> = spots
            .iter()
            .filter(|spot| spot.region == region)
            .cloned()
            .collect();
        self.rank_spots(&regional, date).await
    }

    async fn fetch(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError> {
        let after = self.config.fetch_timeout;
        tokio::time::timeout(after, self.provider.fetch(spot, date))
            .await
            .map_err(|_| SampleError::Timeout {
                spot_id: spot.id.clone(),
                after,
            })?
    }

    fn assess(&self, spot: &Spot, date: NaiveDate, observation: Observation) -> Analysis {
        let Observation { sample, hourly } = observation;
        let scores = self.scorer.score(spot, &sample);
        let suggestion = build_suggestion(spot, &sample, &scores);
        Analysis {
            spot: spot.clone(),
            sample: Some(sample),
            scores,
            suggestion,
            tide_events: extract_tide_events(hourly.tide_height(), date),
            computed_at: Utc::now(),
        }
    }

    async fn analyse_or_default(&self, spot: &Spot, date: NaiveDate) -> Analysis {
        self.analyse_spot(spot, date).await.unwrap_or_else(|err| {
            warn!("spot '{}' ranked with neutral scores: {err}", spot.id);
            Analysis::unavailable(spot.clone(), date, Utc::now())
        })
    }
}

/// Stable sort, highest overall first.
pub(crate) fn sort_by_overall(analyses: &mut [Analysis]) {
    analyses.sort_by(|a, b| b.scores.overall.total_cmp(&a.scores.overall));
}
