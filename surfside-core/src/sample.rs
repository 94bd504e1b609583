//! Environmental samples: one snapshot of sea and sky at a spot.
//!
//! A sample is an immutable value; calibration and scoring derive new values
//! instead of mutating it.

use crate::CalibrationFactor;

/// Wave and swell readings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveReading {
    /// Significant wave height in metres.
    pub height: f64,
    /// Wave period in seconds.
    pub period: f64,
    /// Wave direction in degrees.
    pub direction: f64,
    /// Swell height in metres.
    pub swell_height: f64,
    /// Swell period in seconds.
    pub swell_period: f64,
    /// Swell direction in degrees.
    pub swell_direction: f64,
}

/// Wind readings.
///
/// Producers should report `gust >= speed`; consumers treat a lower gust as
/// zero excess and a missing gust likewise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindReading {
    /// Sustained wind speed in knots.
    pub speed: f64,
    /// Direction the wind blows from, in degrees.
    pub direction: f64,
    /// Peak gust in knots, when reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gust: Option<f64>,
}

impl WindReading {
    /// Gust excess over the sustained speed, never negative.
    ///
    /// # Examples
    /// ```
    /// use surfside_core::WindReading;
    ///
    /// let wind = WindReading { speed: 12.0, direction: 90.0, gust: Some(15.5) };
    /// assert_eq!(wind.gust_excess(), 3.5);
    ///
    /// let calm = WindReading { speed: 12.0, direction: 90.0, gust: None };
    /// assert_eq!(calm.gust_excess(), 0.0);
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "gust excess is a difference")]
    pub fn gust_excess(&self) -> f64 {
        let Some(gust) = self.gust else {
            return 0.0;
        };
        let excess = gust - self.speed;
        if excess.is_finite() && excess > 0.0 {
            excess
        } else {
            0.0
        }
    }
}

/// Phase of the tidal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TideLevel {
    /// Low water.
    Low,
    /// Flooding towards high water.
    Rising,
    /// High water.
    High,
    /// Ebbing towards low water.
    Falling,
}

impl TideLevel {
    /// Return the level as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Rising => "rising",
            Self::High => "high",
            Self::Falling => "falling",
        }
    }
}

impl std::fmt::Display for TideLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TideLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "rising" => Ok(Self::Rising),
            "high" => Ok(Self::High),
            "falling" => Ok(Self::Falling),
            _ => Err(format!("unknown tide level '{s}'")),
        }
    }
}

/// Tide readings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TideReading {
    /// Current phase of the tide.
    pub level: TideLevel,
    /// Tide height in metres.
    pub height: f64,
}

/// Sky conditions, ordered from best to worst for surfing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WeatherCondition {
    /// Clear skies.
    Clear,
    /// Partly cloudy.
    Cloudy,
    /// Fully overcast.
    Overcast,
    /// Light rain.
    LightRain,
    /// Moderate rain.
    ModerateRain,
    /// Heavy rain.
    HeavyRain,
}

impl WeatherCondition {
    /// Return the condition in its kebab-case form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::LightRain => "light-rain",
            Self::ModerateRain => "moderate-rain",
            Self::HeavyRain => "heavy-rain",
        }
    }

    /// Report whether the condition involves rain.
    #[must_use]
    pub const fn is_rain(self) -> bool {
        matches!(self, Self::LightRain | Self::ModerateRain | Self::HeavyRain)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeatherCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "cloudy" => Ok(Self::Cloudy),
            "overcast" => Ok(Self::Overcast),
            "light-rain" => Ok(Self::LightRain),
            "moderate-rain" => Ok(Self::ModerateRain),
            "heavy-rain" => Ok(Self::HeavyRain),
            _ => Err(format!("unknown weather condition '{s}'")),
        }
    }
}

/// Weather readings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherReading {
    /// Prevailing condition.
    pub condition: WeatherCondition,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Visibility in kilometres.
    pub visibility: f64,
}

/// Wave, wind, tide and weather readings for one spot at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalSample {
    /// Wave and swell readings.
    pub wave: WaveReading,
    /// Wind readings.
    pub wind: WindReading,
    /// Tide readings.
    pub tide: TideReading,
    /// Weather readings.
    pub weather: WeatherReading,
    /// Sea surface temperature in degrees Celsius.
    pub water_temperature: f64,
    /// Correction applied to this sample, `None` when uncalibrated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub calibration: Option<CalibrationFactor>,
}

impl EnvironmentalSample {
    /// Report whether a calibration factor has been applied.
    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }
}
