//! Built-in calibration factors for the shipped spots.

use surfside_core::{CalibrationFactor, CalibrationTable};

/// Authority whose forecasts calibrate the Zhoushan spots.
pub const ZHEJIANG_SOURCE: &str = "Zhejiang Marine Monitoring and Forecasting Center";

/// Authority whose forecasts calibrate the Qingdao spots.
pub const SHANDONG_SOURCE: &str = "Shandong Marine Forecast Observatory";

const FACTORS: [(&str, f64, f64, f64, &str); 5] = [
    ("dongsha", 1.1, 0.9, 1.5, ZHEJIANG_SOURCE),
    ("lulan", 1.2, 1.0, 1.2, ZHEJIANG_SOURCE),
    ("shilaoren", 0.9, 1.1, -0.8, SHANDONG_SOURCE),
    ("liuqinghe", 1.0, 1.0, -0.5, SHANDONG_SOURCE),
    ("huangdao", 1.1, 0.95, -0.3, SHANDONG_SOURCE),
];

/// Per-spot factors aligning generic forecasts with the regional
/// authorities' readings for the built-in catalogue.
///
/// # Examples
///
/// ```
/// use surfside_data::{ZHEJIANG_SOURCE, china_calibration_table};
///
/// let table = china_calibration_table();
/// let dongsha = table.get("dongsha").expect("built-in spot");
/// assert_eq!(dongsha.source, ZHEJIANG_SOURCE);
/// assert!(table.get("pipeline").is_none());
/// ```
#[must_use]
pub fn china_calibration_table() -> CalibrationTable {
    FACTORS
        .into_iter()
        .map(|(id, wave, wind, offset, source)| {
            (
                id,
                CalibrationFactor {
                    wave_multiplier: wave,
                    wind_multiplier: wind,
                    temperature_offset: offset,
                    source: source.to_owned(),
                },
            )
        })
        .collect()
}
