//! [`SampleProvider`](surfside_core::SampleProvider) implementations.
//!
//! Providers compose: a source such as [`SimulatedSampleProvider`] can be
//! wrapped in a [`CalibratedSampleProvider`] and then a
//! [`CachedSampleProvider`].
//!
//! ```
//! use surfside_data::{
//!     CachedSampleProvider, CalibratedSampleProvider, SimulatedSampleProvider,
//!     china_calibration_table,
//! };
//!
//! let provider = CachedSampleProvider::new(CalibratedSampleProvider::new(
//!     SimulatedSampleProvider::new(7),
//!     china_calibration_table(),
//! ));
//! # let _ = provider;
//! ```

mod cached;
mod calibrated;
mod simulated;

pub use cached::{CachedSampleProvider, DEFAULT_CACHE_TTL};
pub use calibrated::CalibratedSampleProvider;
pub use simulated::SimulatedSampleProvider;
