//! Correct samples with per-spot factors from an authoritative forecaster.
//!
//! Wave height and wind speed are scaled, water temperature is offset, and
//! each adjusted reading is rounded to one decimal. Calibration produces a
//! new sample; the input is never modified.

use std::collections::HashMap;

use crate::EnvironmentalSample;
use crate::numeric::round_tenth;

/// Multiplicative and offset corrections for one spot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationFactor {
    /// Factor applied to wave height.
    pub wave_multiplier: f64,
    /// Factor applied to wind speed.
    pub wind_multiplier: f64,
    /// Degrees Celsius added to water temperature.
    pub temperature_offset: f64,
    /// Who published the reference forecast.
    pub source: String,
}

impl CalibrationFactor {
    /// A factor that leaves readings unchanged apart from rounding.
    #[must_use]
    pub fn identity(source: impl Into<String>) -> Self {
        Self {
            wave_multiplier: 1.0,
            wind_multiplier: 1.0,
            temperature_offset: 0.0,
            source: source.into(),
        }
    }
}

/// Apply `factor` to `sample`, returning the corrected copy.
///
/// The copy records `factor` in [`EnvironmentalSample::calibration`].
///
/// # Examples
/// ```
/// use surfside_core::{calibrate, CalibrationFactor};
/// # use surfside_core::{TideLevel, TideReading, WaveReading, WeatherCondition};
/// # use surfside_core::{EnvironmentalSample, WeatherReading, WindReading};
/// # let sample = EnvironmentalSample {
/// #     wave: WaveReading { height: 1.5, period: 10.0, swell_height: 1.0, ..WaveReading::default() },
/// #     wind: WindReading { speed: 10.0, direction: 45.0, gust: Some(12.0) },
/// #     tide: TideReading { level: TideLevel::Rising, height: 2.0 },
/// #     weather: WeatherReading {
/// #         condition: WeatherCondition::Clear,
/// #         temperature: 24.0,
/// #         humidity: 60.0,
/// #         visibility: 10.0,
/// #     },
/// #     water_temperature: 20.0,
/// #     calibration: None,
/// # };
/// let factor = CalibrationFactor {
///     wave_multiplier: 1.1,
///     wind_multiplier: 0.9,
///     temperature_offset: 1.5,
///     source: "Reference".into(),
/// };
///
/// let calibrated = calibrate(&sample, &factor);
/// assert_eq!(calibrated.wave.height, 1.7);
/// assert_eq!(calibrated.wind.speed, 9.0);
/// assert_eq!(calibrated.water_temperature, 21.5);
/// assert!(calibrated.is_calibrated());
/// assert!(!sample.is_calibrated());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "calibration scales and offsets readings"
)]
pub fn calibrate(sample: &EnvironmentalSample, factor: &CalibrationFactor) -> EnvironmentalSample {
    let mut calibrated = sample.clone();
    calibrated.wave.height = round_tenth(sample.wave.height * factor.wave_multiplier);
    calibrated.wind.speed = round_tenth(sample.wind.speed * factor.wind_multiplier);
    calibrated.water_temperature = round_tenth(sample.water_temperature + factor.temperature_offset);
    calibrated.calibration = Some(factor.clone());
    calibrated
}

/// Calibration factors keyed by spot id.
///
/// # Examples
/// ```
/// use surfside_core::{CalibrationFactor, CalibrationTable};
/// # use surfside_core::{TideLevel, TideReading, WaveReading, WeatherCondition};
/// # use surfside_core::{EnvironmentalSample, WeatherReading, WindReading};
/// # let sample = EnvironmentalSample {
/// #     wave: WaveReading { height: 1.5, period: 10.0, swell_height: 1.0, ..WaveReading::default() },
/// #     wind: WindReading { speed: 10.0, direction: 45.0, gust: Some(12.0) },
/// #     tide: TideReading { level: TideLevel::Rising, height: 2.0 },
/// #     weather: WeatherReading {
/// #         condition: WeatherCondition::Clear,
/// #         temperature: 24.0,
/// #         humidity: 60.0,
/// #         visibility: 10.0,
/// #     },
/// #     water_temperature: 20.0,
/// #     calibration: None,
/// # };
///
/// let mut table = CalibrationTable::default();
/// table.insert("lulan", CalibrationFactor::identity("Reference"));
///
/// assert!(table.apply("lulan", &sample).is_calibrated());
/// assert_eq!(table.apply("unknown", &sample), sample);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CalibrationTable {
    factors: HashMap<String, CalibrationFactor>,
}

impl CalibrationTable {
    /// Register `factor` for `spot_id`, replacing any previous entry.
    pub fn insert(&mut self, spot_id: impl Into<String>, factor: CalibrationFactor) {
        self.factors.insert(spot_id.into(), factor);
    }

    /// Look up the factor registered for `spot_id`.
    #[must_use]
    pub fn get(&self, spot_id: &str) -> Option<&CalibrationFactor> {
        self.factors.get(spot_id)
    }

    /// Number of registered spots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Report whether no factors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Calibrate `sample` with the factor for `spot_id`.
    ///
    /// Unregistered spots pass through unchanged and stay uncalibrated.
    #[must_use]
    pub fn apply(&self, spot_id: &str, sample: &EnvironmentalSample) -> EnvironmentalSample {
        self.get(spot_id).map_or_else(
            || sample.clone(),
            |factor| {
                log::debug!("calibrating {spot_id} with factors from {}", factor.source);
                calibrate(sample, factor)
            },
        )
    }
}

impl<K: Into<String>> FromIterator<(K, CalibrationFactor)> for CalibrationTable {
    fn from_iter<I: IntoIterator<Item = (K, CalibrationFactor)>>(iter: I) -> Self {
        Self {
            factors: iter.into_iter().map(|(id, f)| (id.into(), f)).collect(),
        }
    }
}
