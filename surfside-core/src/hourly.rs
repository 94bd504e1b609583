//! Per-hour curves for a single day at a single spot.

use thiserror::Error;

/// Number of hourly entries in every series.
pub const HOURS_PER_DAY: usize = 24;

/// Errors returned by [`HourlySeries::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HourlySeriesError {
    /// A quantity did not carry exactly one value per hour.
    #[error("hourly {quantity} has {len} entries; expected {HOURS_PER_DAY}")]
    WrongLength {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Number of entries supplied.
        len: usize,
    },
}

/// One day's hourly curves. Index `i` holds the value at hour `i`.
///
/// Every curve has exactly [`HOURS_PER_DAY`] entries.
///
/// # Examples
/// ```
/// use surfside_core::HourlySeries;
///
/// # fn main() -> Result<(), surfside_core::HourlySeriesError> {
/// let flat = vec![1.0; 24];
/// let series = HourlySeries::new(
///     flat.clone(),
///     flat.clone(),
///     flat.clone(),
///     flat.clone(),
///     flat.clone(),
///     flat,
/// )?;
/// assert_eq!(series.tide_height().len(), 24);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHourlySeries"))]
pub struct HourlySeries {
    wave_height: Vec<f64>,
    swell_height: Vec<f64>,
    wind_speed: Vec<f64>,
    wind_gust: Vec<f64>,
    wind_direction: Vec<f64>,
    tide_height: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHourlySeries {
    wave_height: Vec<f64>,
    swell_height: Vec<f64>,
    wind_speed: Vec<f64>,
    wind_gust: Vec<f64>,
    wind_direction: Vec<f64>,
    tide_height: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHourlySeries> for HourlySeries {
    type Error = HourlySeriesError;

    fn try_from(raw: RawHourlySeries) -> Result<Self, Self::Error> {
        Self::new(
            raw.wave_height,
            raw.swell_height,
            raw.wind_speed,
            raw.wind_gust,
            raw.wind_direction,
            raw.tide_height,
        )
    }
}

fn check(quantity: &'static str, values: &[f64]) -> Result<(), HourlySeriesError> {
    if values.len() == HOURS_PER_DAY {
        Ok(())
    } else {
        Err(HourlySeriesError::WrongLength {
            quantity,
            len: values.len(),
        })
    }
}

impl HourlySeries {
    /// Validate and construct an [`HourlySeries`].
    ///
    /// # Errors
    ///
    /// Returns [`HourlySeriesError::WrongLength`] naming the first curve whose
    /// length is not [`HOURS_PER_DAY`].
    pub fn new(
        wave_height: Vec<f64>,
        swell_height: Vec<f64>,
        wind_speed: Vec<f64>,
        wind_gust: Vec<f64>,
        wind_direction: Vec<f64>,
        tide_height: Vec<f64>,
    ) -> Result<Self, HourlySeriesError> {
        check("wave_height", &wave_height)?;
        check("swell_height", &swell_height)?;
        check("wind_speed", &wind_speed)?;
        check("wind_gust", &wind_gust)?;
        check("wind_direction", &wind_direction)?;
        check("tide_height", &tide_height)?;
        Ok(Self {
            wave_height,
            swell_height,
            wind_speed,
            wind_gust,
            wind_direction,
            tide_height,
        })
    }

    /// Wave height per hour in metres.
    #[must_use]
    pub fn wave_height(&self) -> &[f64] {
        &self.wave_height
    }

    /// Swell height per hour in metres.
    #[must_use]
    pub fn swell_height(&self) -> &[f64] {
        &self.swell_height
    }

    /// Wind speed per hour in knots.
    #[must_use]
    pub fn wind_speed(&self) -> &[f64] {
        &self.wind_speed
    }

    /// Gust speed per hour in knots.
    #[must_use]
    pub fn wind_gust(&self) -> &[f64] {
        &self.wind_gust
    }

    /// Wind direction per hour in degrees.
    #[must_use]
    pub fn wind_direction(&self) -> &[f64] {
        &self.wind_direction
    }

    /// Tide height per hour in metres.
    #[must_use]
    pub fn tide_height(&self) -> &[f64] {
        &self.tide_height
    }
}
