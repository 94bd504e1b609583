//! Error types raised while configuring the condition scorer.

use thiserror::Error;

/// Errors raised when scoring configuration is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringConfigError {
    /// A weight was negative or non-finite, or the used weights sum to zero.
    #[error("score weights must be finite, non-negative and not all zero")]
    InvalidWeights,
    /// A preferred band was inverted or non-finite.
    #[error("scoring band {name} must be finite with min <= max")]
    InvalidBand {
        /// Dotted path of the offending band.
        name: &'static str,
    },
    /// A falloff had a non-positive or non-finite half-width.
    #[error("scoring falloff {name} must have a finite, positive half-width")]
    InvalidFalloff {
        /// Dotted path of the offending falloff.
        name: &'static str,
    },
}
