//! Deterministic fixtures and `SampleProvider` doubles used by unit and
//! behaviour tests across the workspace.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use geo::Coord;

use crate::{
    BestConditions, CompassPoint, Difficulty, EnvironmentalSample, HourlySeries, Observation,
    SampleError, SampleProvider, Spot, TideLevel, TidePreference, TideReading, WaveHeightRange,
    WaveReading, WeatherCondition, WeatherReading, WindReading,
};

/// Hourly tide curve with high water at 03:00 and 15:00 and low water at
/// 09:00 and 21:00.
pub const SEMIDIURNAL_TIDE: [f64; 24] = [
    2.0, 2.75, 3.3, 3.5, 3.3, 2.75, 2.0, 1.25, 0.7, 0.5, 0.7, 1.25, 2.0, 2.75, 3.3, 3.5, 3.3, 2.75,
    2.0, 1.25, 0.7, 0.5, 0.7, 1.25,
];

/// Run `future` to completion on a fresh current-thread runtime.
///
/// # Panics
///
/// Panics if the runtime cannot be created.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap_or_else(|err| panic!("failed to build test runtime: {err}"))
        .block_on(future)
}

/// A beginner-friendly spot preferring 0.8-2.5 m waves, north-east to
/// south-east winds and a mid-to-high tide.
#[must_use]
pub fn sample_spot(id: &str) -> Spot {
    Spot {
        id: id.to_owned(),
        name: format!("Spot {id}"),
        region: "Zhoushan".to_owned(),
        location: Coord { x: 122.4, y: 29.9 },
        best_conditions: BestConditions {
            wave_height: WaveHeightRange { min: 0.8, max: 2.5 },
            wind_directions: vec![CompassPoint::NE, CompassPoint::E, CompassPoint::SE],
            tide: TidePreference::MidHigh,
        },
        difficulty: Difficulty::BeginnerIntermediate,
    }
}

/// Readings that score 10 in every dimension at [`sample_spot`].
#[must_use]
pub const fn sample_reading() -> EnvironmentalSample {
    EnvironmentalSample {
        wave: WaveReading {
            height: 1.5,
            period: 10.0,
            direction: 90.0,
            swell_height: 1.0,
            swell_period: 11.0,
            swell_direction: 90.0,
        },
        wind: WindReading {
            speed: 10.0,
            direction: 45.0,
            gust: Some(12.0),
        },
        tide: TideReading {
            level: TideLevel::Rising,
            height: 2.0,
        },
        weather: WeatherReading {
            condition: WeatherCondition::Clear,
            temperature: 24.0,
            humidity: 60.0,
            visibility: 10.0,
        },
        water_temperature: 20.0,
        calibration: None,
    }
}

/// Flat curves with [`SEMIDIURNAL_TIDE`] as the tide height.
///
/// # Panics
///
/// Never in practice; every curve holds [`crate::HOURS_PER_DAY`] entries.
#[must_use]
pub fn sample_hourly() -> HourlySeries {
    let flat = |value: f64| vec![value; crate::HOURS_PER_DAY];
    HourlySeries::new(
        flat(1.5),
        flat(1.0),
        flat(10.0),
        flat(12.0),
        flat(45.0),
        SEMIDIURNAL_TIDE.to_vec(),
    )
    .unwrap_or_else(|err| panic!("fixture curves are a full day: {err}"))
}

/// [`sample_reading`] paired with [`sample_hourly`].
#[must_use]
pub fn sample_observation() -> Observation {
    Observation {
        sample: sample_reading(),
        hourly: sample_hourly(),
    }
}

/// Provider answering from a fixed map of observations keyed by spot id.
///
/// Unregistered spots fail with [`SampleError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct FixedSampleProvider {
    observations: HashMap<String, Observation>,
}

impl FixedSampleProvider {
    /// Register `observation` for `spot_id`.
    #[must_use]
    pub fn with(mut self, spot_id: impl Into<String>, observation: Observation) -> Self {
        self.observations.insert(spot_id.into(), observation);
        self
    }
}

#[async_trait]
impl SampleProvider for FixedSampleProvider {
    async fn fetch(&self, spot: &Spot, _date: NaiveDate) -> Result<Observation, SampleError> {
        self.observations
            .get(&spot.id)
            .cloned()
            .ok_or_else(|| SampleError::unavailable(spot.id.as_str(), "no fixture registered"))
    }
}

/// Provider that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSampleProvider;

#[async_trait]
impl SampleProvider for FailingSampleProvider {
    async fn fetch(&self, spot: &Spot, _date: NaiveDate) -> Result<Observation, SampleError> {
        Err(SampleError::unavailable(spot.id.as_str(), "provider offline"))
    }
}

/// Provider that answers with [`sample_observation`] after `delay`.
#[derive(Debug, Clone, Copy)]
pub struct SlowSampleProvider {
    /// How long each fetch sleeps before answering.
    pub delay: Duration,
}

#[async_trait]
impl SampleProvider for SlowSampleProvider {
    async fn fetch(&self, _spot: &Spot, _date: NaiveDate) -> Result<Observation, SampleError> {
        tokio::time::sleep(self.delay).await;
        Ok(sample_observation())
    }
}
