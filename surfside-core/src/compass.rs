//! Sixteen-point compass used for wind and swell directions.
//!
//! Spot preferences are expressed as compass points while providers report
//! bearings in degrees; [`CompassPoint::from_degrees`] bridges the two.
//!
//! # Examples
//! ```
//! use surfside_core::CompassPoint;
//!
//! assert_eq!(CompassPoint::from_degrees(44.0), CompassPoint::NE);
//! assert_eq!(CompassPoint::from_degrees(350.0), CompassPoint::N);
//! assert_eq!(CompassPoint::SSW.to_string(), "SSW");
//! ```

use crate::numeric::finite_or;

const SECTOR_DEGREES: f64 = 22.5;

/// One of the sixteen named compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::upper_case_acronyms,
    reason = "compass points are conventionally written in capitals"
)]
#[expect(missing_docs, reason = "variant names are the compass abbreviations")]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    /// All points in clockwise order starting from north.
    pub const ALL: [Self; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Convert a bearing in degrees to the nearest compass point.
    ///
    /// Bearings are normalised into `[0, 360)` first; halfway bearings round
    /// clockwise. Non-finite bearings map to north.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "sector index derives from a bounded, non-negative bearing"
    )]
    pub fn from_degrees(degrees: f64) -> Self {
        let bearing = finite_or(degrees, 0.0).rem_euclid(360.0);
        let sector = (bearing / SECTOR_DEGREES + 0.5).floor() as usize;
        // Sector 16 is north again.
        Self::ALL.get(sector).copied().unwrap_or(Self::N)
    }

    /// Return the abbreviation as a `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompassPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|point| point.as_str() == upper)
            .ok_or_else(|| format!("unknown compass point '{s}'"))
    }
}
