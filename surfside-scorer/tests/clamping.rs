//! Property tests: every score stays on the ten-point scale whatever the
//! readings.

use proptest::prelude::*;
use surfside_core::test_support::sample_spot;
use surfside_core::{
    ConditionScorer, EnvironmentalSample, TideLevel, TideReading, WaveReading, WeatherCondition,
    WeatherReading, WindReading,
};
use surfside_scorer::{ScoreWeights, ScoringThresholds, WeightedConditionScorer};

fn reading() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6_f64..1.0e6,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(1000.0),
    ]
}

fn tide_level() -> impl Strategy<Value = TideLevel> {
    prop_oneof![
        Just(TideLevel::Low),
        Just(TideLevel::Rising),
        Just(TideLevel::High),
        Just(TideLevel::Falling),
    ]
}

fn condition() -> impl Strategy<Value = WeatherCondition> {
    prop_oneof![
        Just(WeatherCondition::Clear),
        Just(WeatherCondition::Cloudy),
        Just(WeatherCondition::Overcast),
        Just(WeatherCondition::LightRain),
        Just(WeatherCondition::ModerateRain),
        Just(WeatherCondition::HeavyRain),
    ]
}

prop_compose! {
    fn sample()(
        wave in prop::array::uniform4(reading()),
        wind in prop::array::uniform3(reading()),
        tide_height in reading(),
        level in tide_level(),
        condition in condition(),
        weather in prop::array::uniform3(reading()),
    ) -> EnvironmentalSample {
        let [height, period, swell_height, swell_period] = wave;
        let [speed, direction, gust] = wind;
        let [temperature, humidity, visibility] = weather;
        EnvironmentalSample {
            wave: WaveReading {
                height,
                period,
                direction: 0.0,
                swell_height,
                swell_period,
                swell_direction: 0.0,
            },
            wind: WindReading { speed, direction, gust: Some(gust) },
            tide: TideReading { level, height: tide_height },
            weather: WeatherReading { condition, temperature, humidity, visibility },
            water_temperature: 20.0,
            calibration: None,
        }
    }
}

fn in_range(score: f64) -> bool {
    (0.0..=10.0).contains(&score)
}

proptest! {
    #[test]
    fn default_scores_stay_in_range(sample in sample()) {
        let scores = WeightedConditionScorer::default().score(&sample_spot("x"), &sample);
        for score in [scores.wave, scores.wind, scores.tide, scores.weather, scores.overall] {
            prop_assert!(in_range(score), "score {score} out of range for {sample:?}");
        }
    }

    #[test]
    fn heavy_weights_are_clamped(sample in sample(), scale in 1.0_f64..50.0) {
        let weights = ScoreWeights {
            wave: scale,
            wind: scale,
            wind_direction: 0.0,
            tide: scale,
            weather: scale,
        };
        let scorer = WeightedConditionScorer::with_config(weights, ScoringThresholds::default())
            .expect("weights are valid");
        let overall = scorer.score(&sample_spot("x"), &sample).overall;
        prop_assert!(in_range(overall));
    }
}
