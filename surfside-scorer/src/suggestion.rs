//! Rule-based surfing advice derived from a sample and its scores.
//!
//! Rules fire independently and in a fixed order, so the same inputs always
//! produce the same messages in the same order.

use surfside_core::{
    CompassPoint, Difficulty, EnvironmentalSample, ScoreLevel, Scores, Spot, Suggestion, TideLevel,
    WeatherCondition,
};

/// Wind speed, in knots, above which a safety warning is always issued.
pub const STRONG_WIND_KNOTS: f64 = 20.0;

/// Wave height, in metres, above which a safety warning is always issued.
pub const LARGE_WAVE_METRES: f64 = 2.5;

/// Build advice for `sample` at `spot` given its `scores`.
///
/// # Examples
/// ```
/// use surfside_core::ConditionScorer;
/// use surfside_core::test_support::{sample_reading, sample_spot};
/// use surfside_scorer::{WeightedConditionScorer, build_suggestion};
///
/// let spot = sample_spot("dongsha");
/// let sample = sample_reading();
/// let scores = WeightedConditionScorer::default().score(&spot, &sample);
///
/// let advice = build_suggestion(&spot, &sample, &scores);
/// assert!(advice.warnings.is_empty());
/// assert_eq!(advice.summary, "Overall score 8.0/10 — Excellent, suitable for beginners");
/// ```
#[must_use]
pub fn build_suggestion(spot: &Spot, sample: &EnvironmentalSample, scores: &Scores) -> Suggestion {
    let mut suggestions = Vec::new();
    let mut warnings = Vec::new();
    let wave = &sample.wave;
    let wind = &sample.wind;

    if scores.wave >= 8.0 {
        suggestions.push(format!(
            "Excellent waves: {} m at {} s, ideal for surfing",
            wave.height, wave.period
        ));
    } else if scores.wave >= 6.0 {
        suggestions.push(format!("Good waves: {} m, fine for practice", wave.height));
    } else if scores.wave < 4.0 {
        warnings.push(format!(
            "Poor waves: only {} m, consider another time",
            wave.height
        ));
    }

    if scores.wind >= 8.0 {
        suggestions.push(format!(
            "Ideal wind: {} kt from the {}, favourable for surfing",
            wind.speed,
            CompassPoint::from_degrees(wind.direction)
        ));
    } else if scores.wind < 4.0 {
        warnings.push(format!(
            "Unfavourable wind: {} kt may spoil the session",
            wind.speed
        ));
    }

    if scores.tide >= 7.0 {
        suggestions.push(format!(
            "Good tide: currently {}, {} m",
            sample.tide.level, sample.tide.height
        ));
    }

    let condition = sample.weather.condition;
    if condition == WeatherCondition::Clear {
        suggestions.push(format!(
            "Clear skies at {}°C, comfortable conditions",
            sample.weather.temperature
        ));
    } else if condition.is_rain() {
        warnings.push("Rain expected: take care and bring waterproof gear".to_owned());
    }

    if wind.speed > STRONG_WIND_KNOTS {
        warnings.push(format!("Strong wind ({} kt): take extra care", wind.speed));
    }
    if wave.height > LARGE_WAVE_METRES {
        warnings.push(format!(
            "Large waves ({} m): experienced surfers only",
            wave.height
        ));
    }

    if let Some(advice) = timing_advice(sample.tide.level) {
        suggestions.push(advice.to_owned());
    }

    Suggestion {
        suggestions,
        warnings,
        summary: summary(scores.overall, spot.difficulty),
    }
}

/// When to paddle out, judged from the tide phase alone.
#[must_use]
pub const fn timing_advice(level: TideLevel) -> Option<&'static str> {
    match level {
        TideLevel::Rising => Some("Tide is rising: surf within the next 2-3 hours"),
        TideLevel::High => Some("High tide: prime time to surf"),
        TideLevel::Falling => Some("Tide is falling: there may still be decent waves"),
        TideLevel::Low => None,
    }
}

/// One-line summary of `overall` for a spot of the given `difficulty`.
///
/// Only a single tier earns a positive suffix; combined tiers can only be
/// told to look elsewhere.
///
/// # Examples
/// ```
/// use surfside_core::Difficulty;
/// use surfside_scorer::summary;
///
/// assert_eq!(summary(7.3, Difficulty::Intermediate), "Overall score 7.3/10 — Good, suitable for intermediate surfers");
/// assert_eq!(summary(4.5, Difficulty::Advanced), "Overall score 4.5/10 — Fair, consider another time or spot");
/// assert_eq!(summary(6.5, Difficulty::Advanced), "Overall score 6.5/10 — Good");
/// assert_eq!(summary(9.0, Difficulty::IntermediateAdvanced), "Overall score 9.0/10 — Excellent");
/// ```
#[must_use]
pub fn summary(overall: f64, difficulty: Difficulty) -> String {
    let level = ScoreLevel::from_score(overall);
    let suffix = match difficulty {
        Difficulty::Beginner if overall >= 6.0 => ", suitable for beginners",
        Difficulty::Intermediate if overall >= 7.0 => ", suitable for intermediate surfers",
        Difficulty::Advanced if overall >= 8.0 => ", suitable for advanced surfers",
        _ if overall < 5.0 => ", consider another time or spot",
        _ => "",
    };
    format!("Overall score {overall:.1}/10 — {}{suffix}", level.label())
}
