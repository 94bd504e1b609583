//! Calibrating wrapper around another provider.

use async_trait::async_trait;
use chrono::NaiveDate;
use surfside_core::{CalibrationTable, Observation, SampleError, SampleProvider, Spot};

/// Applies a [`CalibrationTable`] to every sample an inner provider returns.
///
/// Spots without a registered factor pass through uncalibrated. Hourly
/// curves are left untouched.
#[derive(Debug, Clone)]
pub struct CalibratedSampleProvider<P> {
    inner: P,
    table: CalibrationTable,
    enabled: bool,
}

impl<P> CalibratedSampleProvider<P> {
    /// Wrap `inner`, calibrating with `table`.
    #[must_use]
    pub const fn new(inner: P, table: CalibrationTable) -> Self {
        Self {
            inner,
            table,
            enabled: true,
        }
    }

    /// Switch calibration on or off without rebuilding the provider.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether samples are being calibrated.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The factors in use.
    #[must_use]
    pub const fn table(&self) -> &CalibrationTable {
        &self.table
    }
}

#[async_trait]
impl<P: SampleProvider> SampleProvider for CalibratedSampleProvider<P> {
    async fn fetch(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError> {
        let mut observation = self.inner.fetch(spot, date).await?;
        if self.enabled {
            observation.sample = self.table.apply(&spot.id, &observation.sample);
        }
        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::china_calibration_table;
    use rstest::{fixture, rstest};
    use surfside_core::test_support::{
        FailingSampleProvider, FixedSampleProvider, block_on, sample_observation, sample_spot,
    };

    #[fixture]
    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 12).expect("valid date")
    }

    fn provider() -> CalibratedSampleProvider<FixedSampleProvider> {
        let fixed = FixedSampleProvider::default()
            .with("dongsha", sample_observation())
            .with("unknown", sample_observation());
        CalibratedSampleProvider::new(fixed, china_calibration_table())
    }

    #[rstest]
    fn calibrates_registered_spot(date: NaiveDate) {
        let observation =
            block_on(provider().fetch(&sample_spot("dongsha"), date)).expect("registered");
        let sample = observation.sample;
        assert_eq!(sample.wave.height, 1.7);
        assert_eq!(sample.wind.speed, 9.0);
        assert_eq!(sample.water_temperature, 21.5);
        assert!(sample.is_calibrated());
        assert_eq!(observation.hourly, sample_observation().hourly);
    }

    #[rstest]
    fn disabled_provider_passes_through(date: NaiveDate) {
        let observation = block_on(
            provider()
                .with_enabled(false)
                .fetch(&sample_spot("dongsha"), date),
        )
        .expect("registered");
        assert_eq!(observation, sample_observation());
    }

    #[rstest]
    fn unregistered_spot_is_not_marked_calibrated(date: NaiveDate) {
        let observation =
            block_on(provider().fetch(&sample_spot("unknown"), date)).expect("registered");
        assert_eq!(observation.sample.wave, sample_observation().sample.wave);
    }

    #[rstest]
    fn inner_failures_propagate(date: NaiveDate) {
        let wrapped = CalibratedSampleProvider::new(FailingSampleProvider, china_calibration_table());
        assert!(block_on(wrapped.fetch(&sample_spot("dongsha"), date)).is_err());
    }
}
