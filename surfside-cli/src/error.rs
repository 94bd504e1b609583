//! Error types emitted by the Surfside CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use surfside_data::CatalogueError;
use surfside_scorer::ScoringConfigError;
use thiserror::Error;

/// Errors emitted by the Surfside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// An option was present but unusable.
    #[error("invalid --{field} value {value:?}: {reason}")]
    InvalidArgument {
        /// Long option name.
        field: &'static str,
        /// Value supplied after merging.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long option name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long option name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long option name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input document failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The spot catalogue could not be loaded.
    #[error("failed to load spot catalogue {path:?}: {source}")]
    LoadCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Parse or validation failure.
        #[source]
        source: CatalogueError,
    },
    /// The scoring weights file is not valid JSON.
    #[error("failed to parse scoring weights {path:?}: {source}")]
    ParseWeights {
        /// Weights path.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The scoring configuration failed validation.
    #[error(transparent)]
    InvalidScoring(#[from] ScoringConfigError),
    /// No catalogue spot belongs to the requested region.
    #[error("no spots in region {region:?} (known regions: {known})")]
    UnknownRegion {
        /// Requested region.
        region: String,
        /// Comma-separated regions present in the catalogue.
        known: String,
    },
    /// Building the async runtime failed.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
    /// Serialising the ranking report failed.
    #[error("failed to serialise ranking report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the ranking report failed.
    #[error("failed to write ranking report: {0}")]
    WriteReport(#[source] std::io::Error),
}
