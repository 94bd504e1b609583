//! Behavioural tests for provider composition and catalogue loading.

use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use surfside_core::test_support::block_on;
use surfside_core::{Observation, SampleProvider, Spot};
use surfside_data::{
    CalibratedSampleProvider, CatalogueError, SHANDONG_SOURCE, SimulatedSampleProvider,
    SpotCatalogue, china_calibration_table,
};

#[derive(Default)]
struct ProviderContext {
    spots: RefCell<Vec<Spot>>,
    provider: RefCell<Option<CalibratedSampleProvider<SimulatedSampleProvider>>>,
    observations: RefCell<Vec<(Spot, Observation)>>,
    document: RefCell<String>,
    loaded: RefCell<Option<Result<SpotCatalogue, CatalogueError>>>,
}

#[fixture]
fn context() -> ProviderContext {
    ProviderContext::default()
}

#[given("the built-in spot catalogue")]
fn builtin_catalogue(#[from(context)] context: &ProviderContext) {
    *context.spots.borrow_mut() = SpotCatalogue::builtin().into_spots();
}

#[given("a calibrated simulated provider seeded with 7")]
fn calibrated_provider(#[from(context)] context: &ProviderContext) {
    *context.provider.borrow_mut() = Some(CalibratedSampleProvider::new(
        SimulatedSampleProvider::new(7),
        china_calibration_table(),
    ));
}

#[given("a simulated provider seeded with 7 with calibration disabled")]
fn uncalibrated_provider(#[from(context)] context: &ProviderContext) {
    *context.provider.borrow_mut() = Some(
        CalibratedSampleProvider::new(SimulatedSampleProvider::new(7), china_calibration_table())
            .with_enabled(false),
    );
}

#[when("every spot is observed on 2024-08-01")]
fn observe_all(#[from(context)] context: &ProviderContext) {
    let date = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date");
    let configured = context.provider.borrow();
    let provider = configured.as_ref().expect("provider configured");
    let observations = context
        .spots
        .borrow()
        .iter()
        .map(|spot| {
            let observation = block_on(provider.fetch(spot, date)).expect("simulation succeeds");
            (spot.clone(), observation)
        })
        .collect();
    *context.observations.borrow_mut() = observations;
}

#[then("every sample is calibrated")]
fn all_calibrated(#[from(context)] context: &ProviderContext) {
    let observations = context.observations.borrow();
    assert_eq!(observations.len(), 5);
    assert!(observations.iter().all(|(_, o)| o.sample.is_calibrated()));
}

#[then("the Qingdao spots are calibrated by the Shandong observatory")]
fn qingdao_sources(#[from(context)] context: &ProviderContext) {
    let observations = context.observations.borrow();
    let sources: Vec<&str> = observations
        .iter()
        .filter(|(spot, _)| spot.region == "Qingdao")
        .filter_map(|(_, o)| o.sample.calibration.as_ref())
        .map(|factor| factor.source.as_str())
        .collect();
    assert_eq!(sources, [SHANDONG_SOURCE; 3]);
}

#[then("no sample is calibrated")]
fn none_calibrated(#[from(context)] context: &ProviderContext) {
    assert!(
        context
            .observations
            .borrow()
            .iter()
            .all(|(_, o)| !o.sample.is_calibrated())
    );
}

#[given("a catalogue document listing the same spot twice")]
fn duplicate_document(#[from(context)] context: &ProviderContext) {
    let builtin = SpotCatalogue::builtin();
    let first = builtin.spots().first().expect("built-in spots").clone();
    *context.document.borrow_mut() =
        serde_json::to_string(&[first.clone(), first]).expect("serialise spots");
}

#[when("the catalogue is loaded")]
fn load_catalogue(#[from(context)] context: &ProviderContext) {
    let document = context.document.borrow();
    *context.loaded.borrow_mut() = Some(SpotCatalogue::from_reader(document.as_bytes()));
}

#[then("loading fails with a duplicate id error")]
fn duplicate_rejected(#[from(context)] context: &ProviderContext) {
    let loaded = context.loaded.borrow();
    assert!(matches!(
        loaded.as_ref().expect("catalogue loaded"),
        Err(CatalogueError::DuplicateId { id }) if id == "dongsha"
    ));
}

#[scenario(path = "tests/features/providers.feature", index = 0)]
fn calibrated_simulation(context: ProviderContext) {
    let _ = context;
}

#[scenario(path = "tests/features/providers.feature", index = 1)]
fn uncalibrated_simulation(context: ProviderContext) {
    let _ = context;
}

#[scenario(path = "tests/features/providers.feature", index = 2)]
fn repeated_id(context: ProviderContext) {
    let _ = context;
}
