use surfside_core::SpotError;
use thiserror::Error;

/// Errors raised while building a [`SpotCatalogue`](super::SpotCatalogue).
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue document is not valid JSON or does not match the spot
    /// schema.
    #[error("failed to parse spot catalogue: {0}")]
    Parse(#[from] serde_json::Error),
    /// A spot failed validation.
    #[error(transparent)]
    InvalidSpot(#[from] SpotError),
    /// Two spots share an id.
    #[error("duplicate spot id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}
