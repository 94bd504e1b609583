//! Unit coverage for condition scoring and advice generation.
#![forbid(unsafe_code)]

use rstest::{fixture, rstest};
use surfside_core::test_support::{sample_reading, sample_spot};
use surfside_core::{
    ConditionScorer, Difficulty, EnvironmentalSample, Scores, Spot, TideLevel, TideReading,
    WaveReading, WeatherCondition, WeatherReading, WindReading,
};

use crate::{
    Band, Falloff, ScoreWeights, ScoringConfigError, ScoringThresholds, WeightedConditionScorer,
    build_suggestion, summary,
};

#[fixture]
fn scorer() -> WeightedConditionScorer {
    WeightedConditionScorer::default()
}

#[fixture]
fn spot() -> Spot {
    sample_spot("dongsha")
}

#[expect(
    clippy::float_arithmetic,
    reason = "test compares floats within a tolerance"
)]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(1.5, 1.0, 10.0, 10.0)]
#[case(0.4, 1.0, 10.0, 8.0)]
#[case(5.0, 1.0, 10.0, 8.0)]
#[case(1.5, 1.0, 5.0, 8.0)]
#[case(1.5, 1.5, 20.0, 8.0)]
#[case(f64::NAN, 1.0, 10.0, 6.0)]
fn wave_score_cases(
    scorer: WeightedConditionScorer,
    spot: Spot,
    #[case] height: f64,
    #[case] swell_height: f64,
    #[case] period: f64,
    #[case] expected: f64,
) {
    let wave = WaveReading {
        height,
        swell_height,
        period,
        ..WaveReading::default()
    };
    assert_close(
        scorer.wave_score(spot.best_conditions.wave_height, &wave),
        expected,
    );
}

#[rstest]
fn swell_on_band_edge_falls_off(scorer: WeightedConditionScorer, spot: Spot) {
    let wave = WaveReading {
        height: 1.5,
        swell_height: 0.75,
        period: 10.0,
        ..WaveReading::default()
    };
    // The swell band is open, so 3.0 m earns falloff points only.
    assert_close(
        scorer.wave_score(spot.best_conditions.wave_height, &wave),
        10.0,
    );
    let edge = WaveReading {
        swell_height: 3.0,
        ..wave
    };
    assert_close(
        scorer.wave_score(spot.best_conditions.wave_height, &edge),
        8.0,
    );
}

#[rstest]
#[case(25.0, 270.0, Some(40.0), 4.0)]
#[case(3.0, 90.0, None, 9.0)]
#[case(1000.0, 90.0, None, 6.0)]
#[case(10.0, 90.0, Some(20.0), 8.0)]
#[case(10.0, 45.0, Some(8.0), 10.0)]
#[case(10.0, 180.0, Some(12.0), 8.0)]
fn wind_score_cases(
    scorer: WeightedConditionScorer,
    spot: Spot,
    #[case] speed: f64,
    #[case] direction: f64,
    #[case] gust: Option<f64>,
    #[case] expected: f64,
) {
    let wind = WindReading {
        speed,
        direction,
        gust,
    };
    assert_close(scorer.wind_score(&spot.best_conditions, &wind), expected);
}

#[rstest]
#[case(TideLevel::Rising, 2.0, 10.0)]
#[case(TideLevel::Low, 2.0, 8.0)]
#[case(TideLevel::High, 5.0, 9.0)]
#[case(TideLevel::Falling, 0.0, 7.0)]
fn tide_score_cases(
    scorer: WeightedConditionScorer,
    spot: Spot,
    #[case] level: TideLevel,
    #[case] height: f64,
    #[case] expected: f64,
) {
    let tide = TideReading { level, height };
    assert_close(scorer.tide_score(&spot.best_conditions, &tide), expected);
}

#[rstest]
#[case(WeatherCondition::Clear, 24.0, 10.0, 10.0)]
#[case(WeatherCondition::HeavyRain, 15.0, 3.0, 3.0)]
#[case(WeatherCondition::Cloudy, 20.0, 5.0, 8.5)]
#[case(WeatherCondition::ModerateRain, 30.0, 8.0, 5.0)]
fn weather_score_cases(
    scorer: WeightedConditionScorer,
    #[case] condition: WeatherCondition,
    #[case] temperature: f64,
    #[case] visibility: f64,
    #[case] expected: f64,
) {
    let weather = WeatherReading {
        condition,
        temperature,
        humidity: 50.0,
        visibility,
    };
    assert_close(scorer.weather_score(&weather), expected);
}

#[rstest]
fn overall_uses_default_weights(scorer: WeightedConditionScorer, spot: Spot) {
    let scores = scorer.score(&spot, &sample_reading());
    assert_close(scores.overall, 8.0);
}

#[rstest]
fn wind_direction_weight_does_not_feed_overall(spot: Spot) {
    let weights = ScoreWeights {
        wind_direction: 5.0,
        ..ScoreWeights::default()
    };
    let scorer = WeightedConditionScorer::with_config(weights, ScoringThresholds::default())
        .expect("valid configuration");
    assert_close(scorer.score(&spot, &sample_reading()).overall, 8.0);
}

#[rstest]
#[case(ScoreWeights { wave: -0.1, ..ScoreWeights::default() })]
#[case(ScoreWeights { tide: f64::NAN, ..ScoreWeights::default() })]
#[case(ScoreWeights { wave: 0.0, wind: 0.0, wind_direction: 0.2, tide: 0.0, weather: 0.0 })]
fn rejects_invalid_weights(#[case] weights: ScoreWeights) {
    assert_eq!(weights.validate(), Err(ScoringConfigError::InvalidWeights));
}

#[rstest]
fn rejects_inverted_band() {
    let mut thresholds = ScoringThresholds::default();
    thresholds.wind.speed = Band::new(15.0, 5.0);
    assert_eq!(
        thresholds.validate(),
        Err(ScoringConfigError::InvalidBand { name: "wind.speed" })
    );
}

#[rstest]
fn rejects_flat_falloff() {
    let mut thresholds = ScoringThresholds::default();
    thresholds.wave.period_falloff = Falloff {
        centre: 11.0,
        half_width: 0.0,
    };
    assert_eq!(
        thresholds.validate(),
        Err(ScoringConfigError::InvalidFalloff {
            name: "wave.period_falloff"
        })
    );
}

#[rstest]
fn partial_weights_file_keeps_defaults() {
    let weights: ScoreWeights =
        serde_json::from_str(r#"{ "wave": 0.5 }"#).expect("valid weights json");
    assert_close(weights.wave, 0.5);
    assert_close(weights.wind, 0.25);
    assert_close(weights.wind_direction, 0.2);
}

fn rough_sample() -> EnvironmentalSample {
    EnvironmentalSample {
        wave: WaveReading {
            height: 3.0,
            period: 6.0,
            ..WaveReading::default()
        },
        wind: WindReading {
            speed: 30.0,
            direction: 270.0,
            gust: Some(40.0),
        },
        tide: TideReading {
            level: TideLevel::Low,
            height: 5.5,
        },
        weather: WeatherReading {
            condition: WeatherCondition::ModerateRain,
            temperature: 16.0,
            humidity: 90.0,
            visibility: 3.0,
        },
        water_temperature: 17.0,
        calibration: None,
    }
}

#[rstest]
fn ideal_sample_yields_positive_advice(scorer: WeightedConditionScorer, spot: Spot) {
    let sample = sample_reading();
    let advice = build_suggestion(&spot, &sample, &scorer.score(&spot, &sample));
    assert_eq!(
        advice.suggestions,
        [
            "Excellent waves: 1.5 m at 10 s, ideal for surfing",
            "Ideal wind: 10 kt from the NE, favourable for surfing",
            "Good tide: currently rising, 2 m",
            "Clear skies at 24°C, comfortable conditions",
            "Tide is rising: surf within the next 2-3 hours",
        ]
    );
    assert!(advice.warnings.is_empty());
}

#[rstest]
fn rough_sample_yields_warnings(scorer: WeightedConditionScorer, spot: Spot) {
    let sample = rough_sample();
    let scores = scorer.score(&spot, &sample);
    let advice = build_suggestion(&spot, &sample, &scores);
    assert!(advice.suggestions.is_empty());
    assert_eq!(
        advice.warnings,
        [
            "Unfavourable wind: 30 kt may spoil the session",
            "Rain expected: take care and bring waterproof gear",
            "Strong wind (30 kt): take extra care",
            "Large waves (3 m): experienced surfers only",
        ]
    );
}

#[rstest]
fn poor_waves_are_flagged(spot: Spot) {
    let scores = Scores {
        wave: 3.0,
        ..Scores::neutral()
    };
    let mut sample = sample_reading();
    sample.wave.height = 0.3;
    let advice = build_suggestion(&spot, &sample, &scores);
    assert!(
        advice
            .warnings
            .contains(&"Poor waves: only 0.3 m, consider another time".to_owned())
    );
}

#[rstest]
fn good_waves_get_milder_praise(spot: Spot) {
    let scores = Scores {
        wave: 7.0,
        ..Scores::neutral()
    };
    let advice = build_suggestion(&spot, &sample_reading(), &scores);
    assert_eq!(
        advice.suggestions.first().map(String::as_str),
        Some("Good waves: 1.5 m, fine for practice")
    );
}

#[rstest]
#[case(9.0, Difficulty::Beginner, "Overall score 9.0/10 — Excellent, suitable for beginners")]
#[case(6.0, Difficulty::BeginnerIntermediate, "Overall score 6.0/10 — Good")]
#[case(6.9, Difficulty::Intermediate, "Overall score 6.9/10 — Good")]
#[case(8.0, Difficulty::Advanced, "Overall score 8.0/10 — Excellent, suitable for advanced surfers")]
#[case(7.5, Difficulty::IntermediateAdvanced, "Overall score 7.5/10 — Good")]
#[case(9.0, Difficulty::IntermediateAdvanced, "Overall score 9.0/10 — Excellent")]
#[case(4.0, Difficulty::BeginnerIntermediate, "Overall score 4.0/10 — Fair, consider another time or spot")]
#[case(3.0, Difficulty::Beginner, "Overall score 3.0/10 — Poor, consider another time or spot")]
fn summary_suffixes(#[case] overall: f64, #[case] difficulty: Difficulty, #[case] expected: &str) {
    assert_eq!(summary(overall, difficulty), expected);
}
