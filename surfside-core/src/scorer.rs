//! Score a spot's conditions.
//!
//! The `ConditionScorer` trait maps a [`Spot`](crate::Spot) and an
//! [`EnvironmentalSample`](crate::EnvironmentalSample) onto per-dimension
//! [`Scores`](crate::Scores).

use crate::numeric::clamp_score;
use crate::{EnvironmentalSample, MAX_SCORE, Scores, Spot};

/// Calculate condition scores for a spot.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent spot assessments. Scoring is infallible: readings that
/// are missing or non-finite contribute nothing rather than raising an error.
///
/// Implementations must:
/// - Produce finite scores.
/// - Keep every dimension, `overall` included, within `0.0..=10.0`.
///
/// Use [`ConditionScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use surfside_core::{ConditionScorer, EnvironmentalSample, Scores, Spot};
///
/// struct NeutralScorer;
///
/// impl ConditionScorer for NeutralScorer {
///     fn score(&self, _spot: &Spot, _sample: &EnvironmentalSample) -> Scores {
///         Scores::neutral()
///     }
/// }
///
/// assert_eq!(NeutralScorer::sanitise(12.0), 10.0);
/// assert_eq!(NeutralScorer::sanitise(f64::NAN), 0.0);
/// ```
pub trait ConditionScorer: Send + Sync {
    /// Return scores for `sample` as observed at `spot`.
    fn score(&self, spot: &Spot, sample: &EnvironmentalSample) -> Scores;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=10.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        clamp_score(score, MAX_SCORE)
    }
}

impl<S: ConditionScorer + ?Sized> ConditionScorer for std::sync::Arc<S> {
    fn score(&self, spot: &Spot, sample: &EnvironmentalSample) -> Scores {
        (**self).score(spot, sample)
    }
}
