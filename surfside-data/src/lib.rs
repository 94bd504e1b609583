//! Spot catalogues and sample providers for the Surfside engine.
//!
//! Responsibilities:
//! - Ship the built-in spot catalogue and calibration table.
//! - Load catalogues from JSON.
//! - Compose [`SampleProvider`](surfside_core::SampleProvider)s: a seeded
//!   simulation, a calibrating wrapper and a TTL cache.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `surfside-scorer`).
//! - Do not touch the filesystem; callers hand in readers.
//!
//! Invariants:
//! - No global mutable state.
//! - Providers are `Send + Sync` and may be shared across tasks.

#![forbid(unsafe_code)]

mod calibration;
mod catalogue;
mod provider;

pub use calibration::{SHANDONG_SOURCE, ZHEJIANG_SOURCE, china_calibration_table};
pub use catalogue::{CatalogueError, SpotCatalogue};
pub use provider::{
    CachedSampleProvider, CalibratedSampleProvider, DEFAULT_CACHE_TTL, SimulatedSampleProvider,
};
