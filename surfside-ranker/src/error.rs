//! Errors raised while assessing a single spot.

use surfside_core::SampleError;
use thiserror::Error;

/// Failure to produce an [`Analysis`](surfside_core::Analysis) for one spot.
///
/// [`RankingEngine::rank_spots`](crate::RankingEngine::rank_spots) never
/// surfaces this error; it substitutes a neutral analysis instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The provider failed or did not answer within the fetch timeout.
    #[error("sample unavailable: {source}")]
    SampleUnavailable {
        /// Underlying provider failure.
        #[from]
        source: SampleError,
    },
}

impl RankingError {
    /// Spot the failed assessment was for.
    #[must_use]
    pub fn spot_id(&self) -> &str {
        match self {
            Self::SampleUnavailable { source } => source.spot_id(),
        }
    }
}
