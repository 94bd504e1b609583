//! Deterministic simulated conditions.
//!
//! Readings are drawn from a `ChaCha8Rng` seeded by the provider seed, the
//! spot id and the date, so the same triple always yields the same
//! observation within a build. Ranges follow typical summer conditions on
//! the East China Sea coast.

use std::f64::consts::PI;
use std::hash::{DefaultHasher, Hash, Hasher};

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use surfside_core::numeric::round_tenth;
use surfside_core::{
    EnvironmentalSample, HOURS_PER_DAY, HourlySeries, HourlySeriesError, Observation, SampleError,
    SampleProvider, Spot, TideLevel, TideReading, WaveReading, WeatherCondition, WeatherReading,
    WindReading,
};

const CONDITIONS: [WeatherCondition; 4] = [
    WeatherCondition::Clear,
    WeatherCondition::Cloudy,
    WeatherCondition::Overcast,
    WeatherCondition::LightRain,
];

const TIDE_LEVELS: [TideLevel; 4] = [
    TideLevel::Low,
    TideLevel::Rising,
    TideLevel::High,
    TideLevel::Falling,
];

/// Provider generating plausible, reproducible observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedSampleProvider {
    seed: u64,
}

impl SimulatedSampleProvider {
    /// Create a provider whose output is determined by `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the observation for `spot` on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Malformed`] if the generated curves do not
    /// cover a full day.
    pub fn observe(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError> {
        let mut rng = self.rng_for(&spot.id, date);
        let sample = simulate_sample(&mut rng);
        let hourly = simulate_hourly(&mut rng).map_err(|source| SampleError::Malformed {
            spot_id: spot.id.clone(),
            source,
        })?;
        Ok(Observation { sample, hourly })
    }

    fn rng_for(&self, spot_id: &str, date: NaiveDate) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        (self.seed, spot_id, date).hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}

#[async_trait]
impl SampleProvider for SimulatedSampleProvider {
    async fn fetch(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError> {
        self.observe(spot, date)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "simulation derives readings from random draws"
)]
fn simulate_sample(rng: &mut ChaCha8Rng) -> EnvironmentalSample {
    let wave = rng.gen_range(0.8_f64..2.3);
    let wind = rng.gen_range(8.0_f64..18.0);
    let temperature = rng.gen_range(18.0_f64..28.0);

    EnvironmentalSample {
        wave: WaveReading {
            height: round_tenth(wave),
            period: round_tenth(rng.gen_range(6.0..14.0)),
            direction: bearing(rng),
            swell_height: round_tenth(wave * 0.7),
            swell_period: round_tenth(rng.gen_range(8.0..13.0)),
            swell_direction: bearing(rng),
        },
        wind: WindReading {
            speed: round_tenth(wind),
            direction: bearing(rng),
            gust: Some(round_tenth(wind + rng.gen_range(0.0..5.0))),
        },
        tide: TideReading {
            level: TIDE_LEVELS.choose(rng).copied().unwrap_or(TideLevel::Rising),
            height: round_tenth(rng.gen_range(1.0..5.0)),
        },
        weather: WeatherReading {
            condition: CONDITIONS
                .choose(rng)
                .copied()
                .unwrap_or(WeatherCondition::Cloudy),
            temperature: temperature.round(),
            humidity: rng.gen_range(40.0_f64..80.0).round(),
            visibility: rng.gen_range(5.0_f64..10.0).round(),
        },
        water_temperature: round_tenth(temperature),
        calibration: None,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "hourly curves are sinusoids with noise"
)]
fn simulate_hourly(rng: &mut ChaCha8Rng) -> Result<HourlySeries, HourlySeriesError> {
    let base_wave = rng.gen_range(0.8_f64..2.3);
    let base_wind = rng.gen_range(8.0_f64..18.0);

    let mut wave_height = Vec::with_capacity(HOURS_PER_DAY);
    let mut swell_height = Vec::with_capacity(HOURS_PER_DAY);
    let mut wind_speed = Vec::with_capacity(HOURS_PER_DAY);
    let mut wind_gust = Vec::with_capacity(HOURS_PER_DAY);
    let mut wind_direction = Vec::with_capacity(HOURS_PER_DAY);
    let mut tide_height = Vec::with_capacity(HOURS_PER_DAY);

    for hour in (0_u8..).take(HOURS_PER_DAY).map(f64::from) {
        let tidal_swing = ((hour + 6.0) * PI / 12.0).sin() * 0.5;
        let wave = (base_wave + tidal_swing + noise(rng, 0.4)).max(0.2);
        let wind = (base_wind + noise(rng, 4.0)).max(2.0);
        let direction = 120.0 + (hour * PI / 12.0).sin() * 30.0 + noise(rng, 20.0);
        let tide = 2.0 + (hour * PI / 6.0).sin() * 1.5 + rng.gen_range(0.0..0.2);

        wave_height.push(round_tenth(wave));
        swell_height.push(round_tenth(wave * 0.7));
        wind_speed.push(round_tenth(wind));
        wind_gust.push(round_tenth(wind + rng.gen_range(0.0..5.0)));
        wind_direction.push(direction.rem_euclid(360.0).round());
        tide_height.push(round_tenth(tide));
    }

    HourlySeries::new(
        wave_height,
        swell_height,
        wind_speed,
        wind_gust,
        wind_direction,
        tide_height,
    )
}

/// Uniform noise centred on zero spanning `span`.
#[expect(clippy::float_arithmetic, reason = "scales a unit draw")]
fn noise(rng: &mut ChaCha8Rng, span: f64) -> f64 {
    rng.gen_range(-0.5_f64..0.5) * span
}

fn bearing(rng: &mut ChaCha8Rng) -> f64 {
    rng.gen_range(0.0_f64..360.0).round()
}
