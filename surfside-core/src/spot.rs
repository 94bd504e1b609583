//! Surf spots and the conditions they work best in.
//!
//! Spots are static reference data. Constructors validate the preferred wave
//! range so scorers can rely on `0 < min <= max`.

use geo::Coord;
use thiserror::Error;

use crate::{CompassPoint, TideLevel};

/// Wave heights a spot works best in, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveHeightRange {
    /// Smallest preferred height.
    pub min: f64,
    /// Largest preferred height.
    pub max: f64,
}

impl WaveHeightRange {
    /// Report whether `height` lies inside the inclusive range.
    #[must_use]
    pub fn contains(&self, height: f64) -> bool {
        (self.min..=self.max).contains(&height)
    }
}

/// Tide phases a spot prefers.
///
/// `Mid` accepts the moving tide in either direction; `MidHigh` accepts the
/// flood and high water. The remaining variants demand an exact phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TidePreference {
    /// Any phase works.
    All,
    /// Rising or falling.
    Mid,
    /// Rising or high.
    MidHigh,
    /// Low water only.
    Low,
    /// Rising only.
    Rising,
    /// High water only.
    High,
    /// Falling only.
    Falling,
}

impl TidePreference {
    /// Report whether `level` satisfies this preference.
    ///
    /// # Examples
    /// ```
    /// use surfside_core::{TideLevel, TidePreference};
    ///
    /// assert!(TidePreference::Mid.accepts(TideLevel::Falling));
    /// assert!(!TidePreference::MidHigh.accepts(TideLevel::Low));
    /// assert!(TidePreference::All.accepts(TideLevel::Low));
    /// ```
    #[must_use]
    pub const fn accepts(self, level: TideLevel) -> bool {
        match self {
            Self::All => true,
            Self::Mid => matches!(level, TideLevel::Rising | TideLevel::Falling),
            Self::MidHigh => matches!(level, TideLevel::Rising | TideLevel::High),
            Self::Low => matches!(level, TideLevel::Low),
            Self::Rising => matches!(level, TideLevel::Rising),
            Self::High => matches!(level, TideLevel::High),
            Self::Falling => matches!(level, TideLevel::Falling),
        }
    }

    /// Return the preference in its kebab-case form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mid => "mid",
            Self::MidHigh => "mid-high",
            Self::Low => "low",
            Self::Rising => "rising",
            Self::High => "high",
            Self::Falling => "falling",
        }
    }
}

/// Skill tier a spot suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Difficulty {
    /// Suitable for first-timers.
    Beginner,
    /// Beginners in small surf, intermediates otherwise.
    BeginnerIntermediate,
    /// Needs board control.
    Intermediate,
    /// Intermediates in small surf, advanced otherwise.
    IntermediateAdvanced,
    /// Experienced surfers only.
    Advanced,
}

impl Difficulty {
    /// Return the tier in its kebab-case form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::BeginnerIntermediate => "beginner-intermediate",
            Self::Intermediate => "intermediate",
            Self::IntermediateAdvanced => "intermediate-advanced",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conditions a spot works best in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestConditions {
    /// Preferred wave heights.
    pub wave_height: WaveHeightRange,
    /// Wind directions that blow favourably.
    pub wind_directions: Vec<CompassPoint>,
    /// Preferred tide phases.
    pub tide: TidePreference,
}

impl BestConditions {
    /// Report whether `direction` is one of the preferred wind directions.
    #[must_use]
    pub fn prefers_wind_from(&self, direction: CompassPoint) -> bool {
        self.wind_directions.contains(&direction)
    }
}

/// A fixed surfable coastal location.
///
/// `location` stores longitude in `x` and latitude in `y`.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use surfside_core::{
///     BestConditions, CompassPoint, Difficulty, Spot, TidePreference, WaveHeightRange,
/// };
///
/// # fn main() -> Result<(), surfside_core::SpotError> {
/// let spot = Spot::new(
///     "dongsha",
///     "Dongsha Surf Park",
///     "Zhoushan",
///     Coord { x: 122.417, y: 29.883 },
///     BestConditions {
///         wave_height: WaveHeightRange { min: 0.8, max: 2.5 },
///         wind_directions: vec![CompassPoint::NE, CompassPoint::E, CompassPoint::SE],
///         tide: TidePreference::MidHigh,
///     },
///     Difficulty::BeginnerIntermediate,
/// )?;
/// assert_eq!(spot.id, "dongsha");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    /// Stable identifier, unique within a catalogue.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region the spot belongs to.
    pub region: String,
    /// Geographic position.
    pub location: Coord,
    /// Preferred conditions.
    pub best_conditions: BestConditions,
    /// Skill tier.
    pub difficulty: Difficulty,
}

/// Errors returned by [`Spot::new`] and [`Spot::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpotError {
    /// The identifier was empty or whitespace.
    #[error("spot id must not be empty")]
    EmptyId,
    /// The preferred wave range was inverted, non-positive or non-finite.
    #[error("spot '{id}' has an invalid wave range {min}..={max}")]
    InvalidWaveRange {
        /// Offending spot.
        id: String,
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },
}

impl Spot {
    /// Validate and construct a [`Spot`].
    ///
    /// # Errors
    ///
    /// Returns [`SpotError`] when the id is blank or the wave range is not a
    /// finite, positive, non-inverted interval.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
        location: Coord,
        best_conditions: BestConditions,
        difficulty: Difficulty,
    ) -> Result<Self, SpotError> {
        let spot = Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            location,
            best_conditions,
            difficulty,
        };
        spot.validate()?;
        Ok(spot)
    }

    /// Check the invariants [`Spot::new`] enforces.
    ///
    /// Deserialised spots bypass the constructor; catalogues call this after
    /// loading.
    ///
    /// # Errors
    ///
    /// See [`Spot::new`].
    pub fn validate(&self) -> Result<(), SpotError> {
        if self.id.trim().is_empty() {
            return Err(SpotError::EmptyId);
        }
        let WaveHeightRange { min, max } = self.best_conditions.wave_height;
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
        if !valid {
            return Err(SpotError::InvalidWaveRange {
                id: self.id.clone(),
                min,
                max,
            });
        }
        Ok(())
    }
}
