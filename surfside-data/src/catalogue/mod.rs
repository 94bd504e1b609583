//! Spot catalogues: the built-in set and JSON-loaded ones.
//!
//! A catalogue document is a JSON array of spots:
//!
//! ```json
//! [
//!   {
//!     "id": "dongsha",
//!     "name": "Dongsha Surf Park",
//!     "region": "Zhoushan",
//!     "location": { "x": 122.417, "y": 29.883 },
//!     "best_conditions": {
//!       "wave_height": { "min": 0.8, "max": 2.5 },
//!       "wind_directions": ["NE", "E", "SE"],
//!       "tide": "mid-high"
//!     },
//!     "difficulty": "beginner-intermediate"
//!   }
//! ]
//! ```

mod error;

use std::collections::HashSet;
use std::io::Read;

use geo::Coord;
use surfside_core::{
    BestConditions, CompassPoint, Difficulty, Spot, TidePreference, WaveHeightRange,
};

pub use error::CatalogueError;

/// An ordered, validated set of spots with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotCatalogue {
    spots: Vec<Spot>,
}

impl SpotCatalogue {
    /// Validate `spots` and build a catalogue, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidSpot`] for the first spot failing
    /// [`Spot::validate`] and [`CatalogueError::DuplicateId`] when an id
    /// repeats.
    pub fn new(spots: Vec<Spot>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(spots.len());
        for spot in &spots {
            spot.validate()?;
            if !seen.insert(spot.id.as_str()) {
                return Err(CatalogueError::DuplicateId {
                    id: spot.id.clone(),
                });
            }
        }
        Ok(Self { spots })
    }

    /// Parse a JSON catalogue from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] for malformed documents and the
    /// errors of [`SpotCatalogue::new`] for invalid contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use surfside_data::SpotCatalogue;
    ///
    /// let json = r#"[{
    ///     "id": "pipeline",
    ///     "name": "Pipeline",
    ///     "region": "Oahu",
    ///     "location": { "x": -158.05, "y": 21.66 },
    ///     "best_conditions": {
    ///         "wave_height": { "min": 1.5, "max": 4.0 },
    ///         "wind_directions": ["SE"],
    ///         "tide": "all"
    ///     },
    ///     "difficulty": "advanced"
    /// }]"#;
    /// let catalogue = SpotCatalogue::from_reader(json.as_bytes())?;
    /// assert_eq!(catalogue.len(), 1);
    /// # Ok::<(), surfside_data::CatalogueError>(())
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogueError> {
        let spots: Vec<Spot> = serde_json::from_reader(reader)?;
        Self::new(spots)
    }

    /// The five spots shipped with Surfside, in Zhoushan and Qingdao.
    #[must_use]
    pub fn builtin() -> Self {
        use CompassPoint::{E, N, NE, S, SE, SW};

        let spots = vec![
            builtin_spot(
                ("dongsha", "Dongsha Surf Park", "Zhoushan"),
                Coord { x: 122.417_222, y: 29.882_778 },
                (0.8, 2.5),
                vec![NE, E, SE],
                TidePreference::MidHigh,
                Difficulty::BeginnerIntermediate,
            ),
            builtin_spot(
                ("lulan", "Lulan Sands, Daishan", "Zhoushan"),
                Coord { x: 122.224_722, y: 30.312_778 },
                (1.0, 3.0),
                vec![N, NE, E],
                TidePreference::Mid,
                Difficulty::IntermediateAdvanced,
            ),
            builtin_spot(
                ("shilaoren", "Shilaoren Beach", "Qingdao"),
                Coord { x: 120.467_778, y: 36.091_667 },
                (0.6, 2.0),
                vec![S, SE, E],
                TidePreference::MidHigh,
                Difficulty::BeginnerIntermediate,
            ),
            builtin_spot(
                ("liuqinghe", "Liuqinghe Beach", "Qingdao"),
                Coord { x: 120.614_444, y: 36.125 },
                (0.5, 1.8),
                vec![S, SW, SE],
                TidePreference::Mid,
                Difficulty::Beginner,
            ),
            builtin_spot(
                ("huangdao", "Huangdao Lianghekou", "Qingdao"),
                Coord { x: 120.074_444, y: 35.888_056 },
                (1.2, 3.5),
                vec![SE, S, SW],
                TidePreference::All,
                Difficulty::IntermediateAdvanced,
            ),
        ];
        Self { spots }
    }

    /// All spots in catalogue order.
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Look a spot up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    /// Spots belonging to `region`, in catalogue order.
    pub fn in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Spot> + 'a {
        self.spots.iter().filter(move |spot| spot.region == region)
    }

    /// Distinct regions in order of first appearance.
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for spot in &self.spots {
            if !regions.contains(&spot.region.as_str()) {
                regions.push(spot.region.as_str());
            }
        }
        regions
    }

    /// Number of spots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.spots.len()
    }

    /// Whether the catalogue holds no spots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Consume the catalogue, yielding its spots.
    #[must_use]
    pub fn into_spots(self) -> Vec<Spot> {
        self.spots
    }
}

fn builtin_spot(
    (id, name, region): (&str, &str, &str),
    location: Coord,
    (min, max): (f64, f64),
    wind_directions: Vec<CompassPoint>,
    tide: TidePreference,
    difficulty: Difficulty,
) -> Spot {
    Spot {
        id: id.to_owned(),
        name: name.to_owned(),
        region: region.to_owned(),
        location,
        best_conditions: BestConditions {
            wave_height: WaveHeightRange { min, max },
            wind_directions,
            tide,
        },
        difficulty,
    }
}
