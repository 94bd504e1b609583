//! Public configuration types for condition scoring.

use serde::{Deserialize, Serialize};
use surfside_core::numeric::clamp_score;
use surfside_core::MAX_SCORE;

use crate::ScoringConfigError;

/// Relative weight of each dimension in the overall score.
///
/// The defaults do not sum to one. `overall` is the raw weighted sum on a
/// ten-point scale and the weights are never renormalised. `wind_direction`
/// is accepted for configuration files that carry it but does not contribute;
/// direction already feeds the wind score.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Multiplier applied to the wave score.
    pub wave: f64,
    /// Multiplier applied to the wind score.
    pub wind: f64,
    /// Carried for compatibility; not used in the overall score.
    pub wind_direction: f64,
    /// Multiplier applied to the tide score.
    pub tide: f64,
    /// Multiplier applied to the weather score.
    pub weather: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidWeights`] when any value is not
    /// finite or negative, or when the weights that feed `overall` sum to
    /// zero.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScoringConfigError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.wave.is_finite()
            && self.wind.is_finite()
            && self.wind_direction.is_finite()
            && self.tide.is_finite()
            && self.weather.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.wave >= 0.0
            && self.wind >= 0.0
            && self.wind_direction >= 0.0
            && self.tide >= 0.0
            && self.weather >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.wave + self.wind + self.tide + self.weather) != 0.0
    }

    /// Combine sub-scores into the overall score.
    ///
    /// The weighted sum is clamped to `0.0..=10.0`. With the default weights
    /// the sum never exceeds 8, so the clamp only matters for custom weights.
    ///
    /// # Examples
    /// ```
    /// use surfside_scorer::ScoreWeights;
    ///
    /// let weights = ScoreWeights::default();
    /// assert!((weights.combine(10.0, 10.0, 10.0, 10.0) - 8.0).abs() < 1e-9);
    ///
    /// let heavy = ScoreWeights { wave: 2.0, ..ScoreWeights::default() };
    /// assert_eq!(heavy.combine(10.0, 10.0, 10.0, 10.0), 10.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "overall score is a weighted sum"
    )]
    pub const fn combine(&self, wave: f64, wind: f64, tide: f64, weather: f64) -> f64 {
        let sum =
            wave * self.wave + wind * self.wind + tide * self.tide + weather * self.weather;
        clamp_score(sum, MAX_SCORE)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            wave: 0.3,
            wind: 0.25,
            wind_direction: 0.2,
            tide: 0.15,
            weather: 0.1,
        }
    }
}

/// Closed interval used for preferred bands.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Band {
    /// Construct a band from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Report whether `value` lies in `min..=max`.
    #[must_use]
    pub const fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Report whether `value` lies strictly between the bounds.
    #[must_use]
    pub const fn contains_strictly(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }

    const fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Triangular falloff: full points at `centre`, zero at `half_width` away.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Falloff {
    /// Value earning full points.
    pub centre: f64,
    /// Distance from `centre` at which points reach zero.
    pub half_width: f64,
}

impl Falloff {
    /// Points earned by `value`, never negative.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "triangular falloff is linear in the distance from centre"
    )]
    pub fn points(&self, value: f64, full: f64) -> f64 {
        let distance = (value - self.centre).abs();
        (full * (1.0 - distance / self.half_width)).max(0.0)
    }

    const fn is_valid(&self) -> bool {
        self.centre.is_finite() && self.half_width.is_finite() && self.half_width > 0.0
    }
}

/// Constants for the wave score.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveThresholds {
    /// Points for a height inside the spot's preferred range.
    pub height_points: f64,
    /// Swell heights earning full points, exclusive of the bounds.
    pub swell: Band,
    /// Falloff for swell outside [`WaveThresholds::swell`].
    pub swell_falloff: Falloff,
    /// Points for swell.
    pub swell_points: f64,
    /// Periods earning full points.
    pub period: Band,
    /// Falloff for periods outside [`WaveThresholds::period`].
    pub period_falloff: Falloff,
    /// Points for period.
    pub period_points: f64,
    /// Points every sample earns.
    pub baseline: f64,
}

impl Default for WaveThresholds {
    fn default() -> Self {
        Self {
            height_points: 4.0,
            swell: Band::new(0.5, 3.0),
            swell_falloff: Falloff {
                centre: 1.5,
                half_width: 1.5,
            },
            swell_points: 2.0,
            period: Band::new(8.0, 14.0),
            period_falloff: Falloff {
                centre: 11.0,
                half_width: 6.0,
            },
            period_points: 2.0,
            baseline: 2.0,
        }
    }
}

/// Constants for the wind score.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindThresholds {
    /// Speeds, in knots, earning full speed points.
    pub speed: Band,
    /// Points for a speed inside [`WindThresholds::speed`].
    pub speed_points: f64,
    /// Points lost per knot above the band.
    pub overspeed_penalty: f64,
    /// Points when the wind blows from a preferred direction.
    pub preferred_direction_points: f64,
    /// Points when it does not.
    pub other_direction_points: f64,
    /// Gust excess, in knots, below which full gust points are earned.
    pub gust_excess_limit: f64,
    /// Points for steady wind.
    pub gust_points: f64,
    /// Points lost per knot of gust excess once past the limit.
    pub gust_penalty: f64,
    /// Points every sample earns.
    pub baseline: f64,
}

impl Default for WindThresholds {
    fn default() -> Self {
        Self {
            speed: Band::new(5.0, 15.0),
            speed_points: 4.0,
            overspeed_penalty: 0.2,
            preferred_direction_points: 3.0,
            other_direction_points: 1.0,
            gust_excess_limit: 5.0,
            gust_points: 2.0,
            gust_penalty: 0.2,
            baseline: 1.0,
        }
    }
}

/// Constants for the tide score.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TideThresholds {
    /// Starting score.
    pub base: f64,
    /// Points when the tide phase suits the spot.
    pub preferred_points: f64,
    /// Points when it does not.
    pub other_points: f64,
    /// Heights, in metres, earning full height points.
    pub height: Band,
    /// Points for height.
    pub height_points: f64,
    /// Height around which the falloff is centred.
    pub height_centre: f64,
    /// Points lost per metre away from the centre once outside the band.
    pub height_penalty: f64,
}

impl Default for TideThresholds {
    fn default() -> Self {
        Self {
            base: 5.0,
            preferred_points: 3.0,
            other_points: 1.0,
            height: Band::new(1.5, 3.5),
            height_points: 2.0,
            height_centre: 2.5,
            height_penalty: 0.4,
        }
    }
}

/// Constants for the weather score.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherThresholds {
    /// Starting score.
    pub base: f64,
    /// Visibility, in kilometres, for the full visibility bonus.
    pub clear_visibility: f64,
    /// Bonus for clear visibility.
    pub clear_visibility_points: f64,
    /// Visibility for the partial bonus.
    pub fair_visibility: f64,
    /// Bonus for fair visibility.
    pub fair_visibility_points: f64,
    /// Comfortable air temperatures in degrees Celsius.
    pub comfortable_temperature: Band,
    /// Bonus for a comfortable temperature.
    pub temperature_points: f64,
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self {
            base: 5.0,
            clear_visibility: 8.0,
            clear_visibility_points: 1.0,
            fair_visibility: 5.0,
            fair_visibility_points: 0.5,
            comfortable_temperature: Band::new(20.0, 28.0),
            temperature_points: 1.0,
        }
    }
}

/// Every band and falloff constant used by the condition scorer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    /// Wave score constants.
    pub wave: WaveThresholds,
    /// Wind score constants.
    pub wind: WindThresholds,
    /// Tide score constants.
    pub tide: TideThresholds,
    /// Weather score constants.
    pub weather: WeatherThresholds,
}

impl ScoringThresholds {
    /// Validate bands and falloffs and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidBand`] for an inverted or
    /// non-finite band and [`ScoringConfigError::InvalidFalloff`] for a
    /// falloff whose half-width is not positive.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        let bands = [
            ("wave.swell", self.wave.swell),
            ("wave.period", self.wave.period),
            ("wind.speed", self.wind.speed),
            ("tide.height", self.tide.height),
            ("weather.comfortable_temperature", self.weather.comfortable_temperature),
        ];
        if let Some((name, _)) = bands.iter().find(|(_, band)| !band.is_valid()) {
            return Err(ScoringConfigError::InvalidBand { name: *name });
        }
        let falloffs = [
            ("wave.swell_falloff", self.wave.swell_falloff),
            ("wave.period_falloff", self.wave.period_falloff),
        ];
        if let Some((name, _)) = falloffs.iter().find(|(_, f)| !f.is_valid()) {
            return Err(ScoringConfigError::InvalidFalloff { name: *name });
        }
        Ok(self)
    }
}
