use std::time::Duration;

use thiserror::Error;

use crate::HourlySeriesError;

/// Errors from [`crate::provider::SampleProvider::fetch`].
///
/// None of these abort a ranking; the affected spot receives a neutral
/// analysis instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The provider could not supply data for the spot.
    #[error("no sample available for spot '{spot_id}': {reason}")]
    Unavailable {
        /// Spot that was requested.
        spot_id: String,
        /// Provider-specific explanation.
        reason: String,
    },
    /// The provider did not answer in time.
    #[error("sample fetch for spot '{spot_id}' timed out after {after:?}")]
    Timeout {
        /// Spot that was requested.
        spot_id: String,
        /// How long the caller waited.
        after: Duration,
    },
    /// The provider answered with data that cannot be used.
    #[error("malformed sample for spot '{spot_id}': {source}")]
    Malformed {
        /// Spot that was requested.
        spot_id: String,
        /// Validation failure.
        #[source]
        source: HourlySeriesError,
    },
}

impl SampleError {
    /// Convenience constructor for [`SampleError::Unavailable`].
    #[must_use]
    pub fn unavailable(spot_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            spot_id: spot_id.into(),
            reason: reason.into(),
        }
    }

    /// Spot the failed request was for.
    #[must_use]
    pub fn spot_id(&self) -> &str {
        match self {
            Self::Unavailable { spot_id, .. }
            | Self::Timeout { spot_id, .. }
            | Self::Malformed { spot_id, .. } => spot_id,
        }
    }
}
