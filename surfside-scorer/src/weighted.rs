//! Weighted condition scoring across wave, wind, tide and weather.
//!
//! Each dimension is scored independently on a ten-point scale from fixed
//! bands and linear falloffs, then combined with [`ScoreWeights`]. Every
//! sub-score is clamped, so pathological readings such as a 1000 kt wind
//! still produce scores in `0.0..=10.0`.

use surfside_core::numeric::finite_or;
use surfside_core::{
    BestConditions, CompassPoint, ConditionScorer, EnvironmentalSample, Scores, Spot, TideReading,
    WaveHeightRange, WaveReading, WeatherCondition, WeatherReading, WindReading,
};

use crate::{ScoreWeights, ScoringConfigError, ScoringThresholds};

/// Bonus or penalty for each sky condition.
#[must_use]
pub const fn condition_bonus(condition: WeatherCondition) -> f64 {
    match condition {
        WeatherCondition::Clear => 3.0,
        WeatherCondition::Cloudy => 2.0,
        WeatherCondition::Overcast => 1.0,
        WeatherCondition::LightRain => 0.0,
        WeatherCondition::ModerateRain => -1.0,
        WeatherCondition::HeavyRain => -2.0,
    }
}

/// Score conditions with configurable weights and thresholds.
///
/// # Examples
///
/// ```
/// use surfside_core::ConditionScorer;
/// use surfside_core::test_support::{sample_reading, sample_spot};
/// use surfside_scorer::WeightedConditionScorer;
///
/// let scorer = WeightedConditionScorer::default();
/// let scores = scorer.score(&sample_spot("dongsha"), &sample_reading());
/// assert_eq!(scores.wave, 10.0);
/// assert!((scores.overall - 8.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedConditionScorer {
    weights: ScoreWeights,
    thresholds: ScoringThresholds,
}

impl WeightedConditionScorer {
    /// Build a scorer from validated configuration.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when the weights or thresholds fail
    /// validation.
    pub fn with_config(
        weights: ScoreWeights,
        thresholds: ScoringThresholds,
    ) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            weights: weights.validate()?,
            thresholds: thresholds.validate()?,
        })
    }

    /// Weights used for the overall score.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Thresholds used for the sub-scores.
    #[must_use]
    pub const fn thresholds(&self) -> ScoringThresholds {
        self.thresholds
    }

    /// Score wave height, swell and period against the preferred `range`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "wave score sums banded points with proportional falloff"
    )]
    pub fn wave_score(&self, range: WaveHeightRange, wave: &WaveReading) -> f64 {
        let t = &self.thresholds.wave;
        let height = finite_or(wave.height, 0.0);
        let height_points = if range.contains(height) {
            t.height_points
        } else if height < range.min {
            t.height_points * (height / range.min)
        } else {
            t.height_points * (range.max / height)
        };

        let swell = finite_or(wave.swell_height, 0.0);
        let swell_points = if t.swell.contains_strictly(swell) {
            t.swell_points
        } else {
            t.swell_falloff.points(swell, t.swell_points)
        };

        let period = finite_or(wave.period, 0.0);
        let period_points = if t.period.contains(period) {
            t.period_points
        } else {
            t.period_falloff.points(period, t.period_points)
        };

        Self::sanitise(height_points.max(0.0) + swell_points + period_points + t.baseline)
    }

    /// Score wind speed, direction and gustiness against the preferred
    /// directions in `best`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "wind score sums banded points with linear penalties"
    )]
    pub fn wind_score(&self, best: &BestConditions, wind: &WindReading) -> f64 {
        let t = &self.thresholds.wind;
        let speed = finite_or(wind.speed, 0.0);
        let speed_points = if t.speed.contains(speed) {
            t.speed_points
        } else if speed < t.speed.min {
            // Light air earns its speed in points.
            speed.max(0.0)
        } else {
            (t.speed_points - (speed - t.speed.max) * t.overspeed_penalty).max(0.0)
        };

        let direction_points = if best.prefers_wind_from(CompassPoint::from_degrees(wind.direction))
        {
            t.preferred_direction_points
        } else {
            t.other_direction_points
        };

        let excess = wind.gust_excess();
        let gust_points = if excess < t.gust_excess_limit {
            t.gust_points
        } else {
            (t.gust_points - excess * t.gust_penalty).max(0.0)
        };

        Self::sanitise(speed_points + direction_points + gust_points + t.baseline)
    }

    /// Score the tide phase and height for `best`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "tide score sums a phase bonus and a height falloff"
    )]
    pub fn tide_score(&self, best: &BestConditions, tide: &TideReading) -> f64 {
        let t = &self.thresholds.tide;
        let phase_points = if best.tide.accepts(tide.level) {
            t.preferred_points
        } else {
            t.other_points
        };
        let height = finite_or(tide.height, 0.0);
        let height_points = if t.height.contains(height) {
            t.height_points
        } else {
            (t.height_points - (height - t.height_centre).abs() * t.height_penalty).max(0.0)
        };
        Self::sanitise(t.base + phase_points + height_points)
    }

    /// Score sky condition, visibility and air temperature.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weather score sums fixed bonuses"
    )]
    pub fn weather_score(&self, weather: &WeatherReading) -> f64 {
        let t = &self.thresholds.weather;
        let visibility = finite_or(weather.visibility, 0.0);
        let visibility_points = if visibility >= t.clear_visibility {
            t.clear_visibility_points
        } else if visibility >= t.fair_visibility {
            t.fair_visibility_points
        } else {
            0.0
        };
        let temperature_points = if t
            .comfortable_temperature
            .contains(finite_or(weather.temperature, 0.0))
        {
            t.temperature_points
        } else {
            0.0
        };
        Self::sanitise(
            t.base + condition_bonus(weather.condition) + visibility_points + temperature_points,
        )
    }
}

impl ConditionScorer for WeightedConditionScorer {
    fn score(&self, spot: &Spot, sample: &EnvironmentalSample) -> Scores {
        let best = &spot.best_conditions;
        let wave = self.wave_score(best.wave_height, &sample.wave);
        let wind = self.wind_score(best, &sample.wind);
        let tide = self.tide_score(best, &sample.tide);
        let weather = self.weather_score(&sample.weather);
        Scores {
            wave,
            wind,
            tide,
            weather,
            overall: self.weights.combine(wave, wind, tide, weather),
        }
    }
}
