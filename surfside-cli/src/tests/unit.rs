//! Unit tests for `rank` argument resolution and execution.

use super::helpers::{PIPELINE_CATALOGUE, Workspace, write_utf8};
use super::*;
use crate::rank::{
    DEFAULT_SEED, DEFAULT_TIMEOUT_SECS, DEFAULT_TOP, RankConfig, execute_rank, load_weights,
};
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use std::time::Duration;

fn july_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date")
}

#[fixture]
fn dated_args() -> RankArgs {
    RankArgs {
        date: Some("2024-07-01".to_owned()),
        ..RankArgs::default()
    }
}

#[fixture]
fn config(dated_args: RankArgs) -> RankConfig {
    RankConfig::try_from(dated_args).expect("valid arguments")
}

fn parse_rank(argv: &[&str]) -> RankArgs {
    let cli = Cli::try_parse_from(argv).expect("parse arguments");
    match cli.command {
        Command::Rank(args) => args,
    }
}

#[rstest]
fn unset_options_take_defaults(config: RankConfig) {
    assert_eq!(config.date, july_first());
    assert_eq!(config.top, DEFAULT_TOP);
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.fetch_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(config.calibrate);
    assert!(config.region.is_none());
    assert!(config.catalogue.is_none());
    assert!(config.weights.is_none());
}

#[rstest]
fn parses_every_flag() {
    let args = parse_rank(&[
        "surfside",
        "rank",
        "--date",
        "2024-07-01",
        "--top",
        "5",
        "--region",
        "Qingdao",
        "--seed",
        "42",
        "--no-calibration",
        "--timeout-secs",
        "3",
    ]);
    let config = RankConfig::try_from(args).expect("valid arguments");
    assert_eq!(config.top, 5);
    assert_eq!(config.region.as_deref(), Some("Qingdao"));
    assert_eq!(config.seed, 42);
    assert!(!config.calibrate);
    assert_eq!(config.fetch_timeout, Duration::from_secs(3));
}

#[rstest]
fn calibration_flag_accepts_explicit_value() {
    let args = parse_rank(&["surfside", "rank", "--no-calibration=false"]);
    assert_eq!(args.no_calibration, Some(false));
}

#[rstest]
#[case("2024-13-01")]
#[case("01/07/2024")]
#[case("")]
fn rejects_malformed_dates(mut dated_args: RankArgs, #[case] raw: &str) {
    dated_args.date = Some(raw.to_owned());
    let err = RankConfig::try_from(dated_args).expect_err("malformed date");
    match err {
        CliError::InvalidArgument { field, value, .. } => {
            assert_eq!(field, ARG_RANK_DATE);
            assert_eq!(value, raw);
        }
        other => panic!("expected InvalidArgument, found {other:?}"),
    }
}

#[rstest]
fn rejects_zero_top(mut dated_args: RankArgs) {
    dated_args.top = Some(0);
    let err = RankConfig::try_from(dated_args).expect_err("zero top");
    assert!(matches!(err, CliError::InvalidArgument { field, .. } if field == ARG_RANK_TOP));
}

#[rstest]
fn rejects_zero_timeout(mut dated_args: RankArgs) {
    dated_args.timeout_secs = Some(0);
    let err = RankConfig::try_from(dated_args).expect_err("zero timeout");
    assert!(
        matches!(err, CliError::InvalidArgument { field, .. } if field == ARG_RANK_TIMEOUT_SECS)
    );
}

#[rstest]
fn missing_catalogue_is_reported(mut config: RankConfig) {
    let workspace = Workspace::new();
    config.catalogue = Some(workspace.path("absent.json"));
    let err = config.validate_sources().expect_err("missing catalogue");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RANK_CATALOGUE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_weights_path_is_rejected(mut config: RankConfig) {
    let workspace = Workspace::new();
    config.weights = Some(workspace.root().to_path_buf());
    let err = config.validate_sources().expect_err("directory path");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_RANK_WEIGHTS),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn ranks_builtin_catalogue(config: RankConfig) {
    let report = execute_rank(&config).expect("ranking succeeds");
    assert_eq!(report.date, july_first());
    assert_eq!(report.analyses.len(), 5);
    assert_eq!(report.recommendations.len(), DEFAULT_TOP);
    let ranks: Vec<usize> = report.recommendations.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [1, 2, 3]);
    assert!(
        report
            .analyses
            .windows(2)
            .all(|pair| pair[0].scores.overall >= pair[1].scores.overall)
    );
    assert!(report.analyses.iter().all(|a| a.is_available()));
}

#[rstest]
fn same_seed_gives_same_recommendations(config: RankConfig) {
    let first = execute_rank(&config).expect("ranking succeeds");
    let second = execute_rank(&config).expect("ranking succeeds");
    assert_eq!(first.recommendations, second.recommendations);
}

#[rstest]
#[case(true)]
#[case(false)]
fn calibration_toggle_reaches_samples(mut config: RankConfig, #[case] calibrate: bool) {
    config.calibrate = calibrate;
    let report = execute_rank(&config).expect("ranking succeeds");
    assert!(report.analyses.iter().all(|analysis| {
        analysis
            .sample
            .as_ref()
            .is_some_and(|sample| sample.is_calibrated() == calibrate)
    }));
}

#[rstest]
fn unknown_region_lists_known_regions(mut config: RankConfig) {
    config.region = Some("Hainan".to_owned());
    let err = execute_rank(&config).expect_err("unknown region");
    match err {
        CliError::UnknownRegion { region, known } => {
            assert_eq!(region, "Hainan");
            assert_eq!(known, "Zhoushan, Qingdao");
        }
        other => panic!("expected UnknownRegion, found {other:?}"),
    }
}

#[rstest]
fn loads_catalogue_from_disk(mut config: RankConfig) {
    let workspace = Workspace::new();
    let path = workspace.path("spots.json");
    write_utf8(&path, PIPELINE_CATALOGUE.as_bytes());
    config.catalogue = Some(path);
    config.validate_sources().expect("catalogue exists");
    let report = execute_rank(&config).expect("ranking succeeds");
    assert_eq!(report.analyses.len(), 1);
    assert_eq!(report.recommendations.len(), 1);
    let best = report.recommendations.first().expect("one recommendation");
    assert_eq!(best.spot_id, "pipeline");
    assert_eq!(best.region, "Oahu");
}

#[rstest]
fn partial_weights_keep_defaults() {
    let workspace = Workspace::new();
    let path = workspace.path("weights.json");
    write_utf8(&path, br#"{ "wave": 0.5 }"#);
    let weights = load_weights(&path).expect("weights parse");
    let defaults = surfside_scorer::ScoreWeights::default();
    assert_eq!(weights.wave, 0.5);
    assert_eq!(weights.wind, defaults.wind);
    assert_eq!(weights.weather, defaults.weather);
}

#[rstest]
fn negative_weights_are_rejected(mut config: RankConfig) {
    let workspace = Workspace::new();
    let path = workspace.path("weights.json");
    write_utf8(&path, br#"{ "wind": -1.0 }"#);
    config.weights = Some(path);
    let err = execute_rank(&config).expect_err("negative weight");
    assert!(matches!(err, CliError::InvalidScoring(_)));
}

#[rstest]
fn malformed_weights_report_their_path() {
    let workspace = Workspace::new();
    let path = workspace.path("weights.json");
    write_utf8(&path, b"wave = 0.5");
    let err = load_weights(&path).expect_err("not json");
    match err {
        CliError::ParseWeights { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseWeights, found {other:?}"),
    }
}
