//! Fetch environmental data for spots.
//!
//! The `SampleProvider` trait abstracts the source of a spot's readings for a
//! date: a forecast service, a recorded dataset or a simulation. Providers
//! return an [`Observation`] pairing the representative sample with the
//! day's hourly curves.
//!
//! Providers fail by returning [`SampleError`]; ranking treats every failure
//! as recoverable.

mod error;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

pub use error::SampleError;

use crate::{EnvironmentalSample, HourlySeries, Spot};

/// A sample together with the day's hourly curves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Representative readings used for scoring.
    pub sample: EnvironmentalSample,
    /// Hour-by-hour curves for the day.
    pub hourly: HourlySeries,
}

/// Fetch an [`Observation`] for a spot and date.
///
/// Implementations receive the whole [`Spot`] so they may key behaviour on
/// its id as well as its location.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use chrono::NaiveDate;
/// use surfside_core::{Observation, SampleError, SampleProvider, Spot};
///
/// struct OfflineProvider;
///
/// #[async_trait]
/// impl SampleProvider for OfflineProvider {
///     async fn fetch(&self, spot: &Spot, _date: NaiveDate) -> Result<Observation, SampleError> {
///         Err(SampleError::unavailable(spot.id.as_str(), "offline"))
///     }
/// }
/// ```
#[async_trait]
pub trait SampleProvider: Send + Sync {
    /// Return the observation for `spot` on `date`.
    async fn fetch(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError>;
}

#[async_trait]
impl<P: SampleProvider + ?Sized> SampleProvider for Arc<P> {
    async fn fetch(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError> {
        (**self).fetch(spot, date).await
    }
}
