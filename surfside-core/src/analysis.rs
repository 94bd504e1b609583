//! Scored assessments of a spot for a given date.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{EnvironmentalSample, Scores, Spot, TideEvent, fallback_schedule};

/// Message shown when a spot could not be assessed.
pub const DATA_UNAVAILABLE: &str = "data unavailable";

/// Natural-language advice derived from a sample and its scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// Positive observations and timing advice.
    pub suggestions: Vec<String>,
    /// Safety warnings and cautions.
    pub warnings: Vec<String>,
    /// One-line summary of the overall score.
    pub summary: String,
}

/// The assessment of one spot for one date.
///
/// An analysis without a sample is the neutral stand-in produced when the
/// spot's data could not be fetched; see [`Analysis::unavailable`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// The assessed spot.
    pub spot: Spot,
    /// The sample that was scored, if one was available.
    pub sample: Option<EnvironmentalSample>,
    /// Per-dimension scores.
    pub scores: Scores,
    /// Advice for surfers.
    pub suggestion: Suggestion,
    /// High and low water for the assessed date.
    pub tide_events: Vec<TideEvent>,
    /// When the assessment was made.
    pub computed_at: DateTime<Utc>,
}

impl Analysis {
    /// Neutral analysis for a spot whose data could not be obtained.
    ///
    /// Every score is 5 and the only suggestion is [`DATA_UNAVAILABLE`].
    ///
    /// # Examples
    /// ```
    /// use chrono::{NaiveDate, Utc};
    /// use geo::Coord;
    /// use surfside_core::{
    ///     Analysis, BestConditions, Difficulty, Spot, TidePreference, WaveHeightRange,
    /// };
    ///
    /// # fn main() -> Result<(), surfside_core::SpotError> {
    /// let spot = Spot::new(
    ///     "huangdao",
    ///     "Huangdao",
    ///     "Qingdao",
    ///     Coord { x: 120.07, y: 35.89 },
    ///     BestConditions {
    ///         wave_height: WaveHeightRange { min: 1.2, max: 3.5 },
    ///         wind_directions: Vec::new(),
    ///         tide: TidePreference::All,
    ///     },
    ///     Difficulty::IntermediateAdvanced,
    /// )?;
    /// let date = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date");
    /// let analysis = Analysis::unavailable(spot, date, Utc::now());
    /// assert_eq!(analysis.scores.overall, 5.0);
    /// assert!(!analysis.is_available());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn unavailable(spot: Spot, date: NaiveDate, computed_at: DateTime<Utc>) -> Self {
        Self {
            spot,
            sample: None,
            scores: Scores::neutral(),
            suggestion: Suggestion {
                suggestions: vec![DATA_UNAVAILABLE.to_owned()],
                warnings: Vec::new(),
                summary: "No data available".to_owned(),
            },
            tide_events: fallback_schedule(date),
            computed_at,
        }
    }

    /// Report whether the analysis was computed from a real sample.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.sample.is_some()
    }
}
