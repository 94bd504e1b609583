//! Rank command implementation for the Surfside CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfside_core::{Analysis, Spot};
use surfside_data::{
    CachedSampleProvider, CalibratedSampleProvider, SimulatedSampleProvider, SpotCatalogue,
    china_calibration_table,
};
use surfside_fs::open_utf8_file;
use surfside_ranker::{RankingConfig, RankingEngine, Recommendation, top_n};
use surfside_scorer::{ScoreWeights, ScoringThresholds, WeightedConditionScorer};

use crate::{
    ARG_RANK_CATALOGUE, ARG_RANK_DATE, ARG_RANK_NO_CALIBRATION, ARG_RANK_REGION, ARG_RANK_SEED,
    ARG_RANK_TIMEOUT_SECS, ARG_RANK_TOP, ARG_RANK_WEIGHTS, CliError,
};

/// Recommendations printed when `--top` is not given.
pub(crate) const DEFAULT_TOP: usize = 3;
/// Simulation seed used when `--seed` is not given.
pub(crate) const DEFAULT_SEED: u64 = 0;
/// Per-spot fetch timeout used when `--timeout-secs` is not given.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank surf spots for a date. Observations come from the \
                 seeded simulation, corrected by the regional calibration \
                 table unless disabled. Spots come from the built-in \
                 catalogue or a JSON document.",
    about = "Rank surf spots and print the best ones"
)]
#[ortho_config(prefix = "SURFSIDE")]
pub(crate) struct RankArgs {
    /// Date to rank, formatted YYYY-MM-DD. Defaults to today.
    #[arg(long = ARG_RANK_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Number of recommendations to print.
    #[arg(long = ARG_RANK_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Only rank spots in this region.
    #[arg(long = ARG_RANK_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Path to a JSON spot catalogue replacing the built-in spots.
    #[arg(long = ARG_RANK_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Path to a JSON document of scoring weights.
    #[arg(long = ARG_RANK_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Seed for the simulated observations.
    #[arg(long = ARG_RANK_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Score raw observations without regional calibration.
    #[arg(
        long = ARG_RANK_NO_CALIBRATION,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) no_calibration: Option<bool>,
    /// Seconds to wait for each spot's observation.
    #[arg(long = ARG_RANK_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Date to rank.
    pub(crate) date: NaiveDate,
    /// Number of recommendations.
    pub(crate) top: usize,
    /// Region filter.
    pub(crate) region: Option<String>,
    /// Catalogue document, or `None` for the built-in spots.
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Scoring weights document, or `None` for the defaults.
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Simulation seed.
    pub(crate) seed: u64,
    /// Whether the calibration table is applied.
    pub(crate) calibrate: bool,
    /// Per-spot fetch timeout.
    pub(crate) fetch_timeout: Duration,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(path) = &self.catalogue {
            Self::require_existing(path, ARG_RANK_CATALOGUE)?;
        }
        if let Some(path) = &self.weights {
            Self::require_existing(path, ARG_RANK_WEIGHTS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match surfside_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let date = args
            .date
            .map_or_else(|| Ok(Local::now().date_naive()), |raw| parse_date(&raw))?;

        let top = args.top.unwrap_or(DEFAULT_TOP);
        if top == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_RANK_TOP,
                value: top.to_string(),
                reason: "must be at least 1",
            });
        }

        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_RANK_TIMEOUT_SECS,
                value: timeout_secs.to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(Self {
            date,
            top,
            region: args.region,
            catalogue: args.catalogue,
            weights: args.weights,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            calibrate: !args.no_calibration.unwrap_or(false),
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| CliError::InvalidArgument {
        field: ARG_RANK_DATE,
        value: raw.to_owned(),
        reason: "expected YYYY-MM-DD",
    })
}

/// JSON document printed by `surfside rank`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RankReport {
    /// Ranked date.
    pub(crate) date: NaiveDate,
    /// Best spots with one-line reasons.
    pub(crate) recommendations: Vec<Recommendation>,
    /// Every ranked spot, best first.
    pub(crate) analyses: Vec<Analysis>,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let report = execute_rank(&config)?;
    write_rank_report(writer, &report)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<RankReport, CliError> {
    let catalogue = config
        .catalogue
        .as_deref()
        .map_or_else(|| Ok(SpotCatalogue::builtin()), load_catalogue)?;
    let spots = select_spots(&catalogue, config.region.as_deref())?;
    let weights = config
        .weights
        .as_deref()
        .map_or_else(|| Ok(ScoreWeights::default()), load_weights)?;
    let scorer = WeightedConditionScorer::with_config(weights, ScoringThresholds::default())?;

    let provider = CachedSampleProvider::new(
        CalibratedSampleProvider::new(
            SimulatedSampleProvider::new(config.seed),
            china_calibration_table(),
        )
        .with_enabled(config.calibrate),
    );
    let engine = RankingEngine::with_config(
        provider,
        scorer,
        RankingConfig {
            fetch_timeout: config.fetch_timeout,
        },
    );

    info!(
        "ranking {} spots for {} (calibration {})",
        spots.len(),
        config.date,
        if config.calibrate { "on" } else { "off" }
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(CliError::Runtime)?;
    let analyses = runtime.block_on(engine.rank_spots(&spots, config.date));
    let recommendations = top_n(&analyses, config.top);

    Ok(RankReport {
        date: config.date,
        recommendations,
        analyses,
    })
}

fn select_spots(catalogue: &SpotCatalogue, region: Option<&str>) -> Result<Vec<Spot>, CliError> {
    let Some(wanted) = region else {
        return Ok(catalogue.spots().to_vec());
    };
    let spots: Vec<Spot> = catalogue.in_region(wanted).cloned().collect();
    if spots.is_empty() {
        return Err(CliError::UnknownRegion {
            region: wanted.to_owned(),
            known: catalogue.regions().join(", "),
        });
    }
    Ok(spots)
}

/// Loads a JSON spot catalogue from disk.
pub(super) fn load_catalogue(path: &Utf8Path) -> Result<SpotCatalogue, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    SpotCatalogue::from_reader(BufReader::new(file)).map_err(|source| CliError::LoadCatalogue {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads JSON scoring weights from disk. Missing keys keep their defaults.
pub(super) fn load_weights(path: &Utf8Path) -> Result<ScoreWeights, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseWeights {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rank_report(writer: &mut dyn Write, report: &RankReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
