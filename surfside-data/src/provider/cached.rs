//! Time-bounded cache in front of another provider.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use surfside_core::{Observation, SampleError, SampleProvider, Spot};

/// How long an observation stays fresh unless configured otherwise.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

type CacheKey = (String, NaiveDate);

#[derive(Debug)]
struct CacheEntry {
    stored_at: Instant,
    observation: Observation,
}

/// Caches successful observations per spot and date for a fixed TTL.
///
/// Failures are never cached, so a later request retries the inner provider.
/// Stale entries are evicted on the next store. A poisoned lock disables
/// caching rather than failing the fetch.
#[derive(Debug)]
pub struct CachedSampleProvider<P> {
    inner: P,
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl<P> CachedSampleProvider<P> {
    /// Cache `inner` with [`DEFAULT_CACHE_TTL`].
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_CACHE_TTL)
    }

    /// Cache `inner`, keeping entries for `ttl`.
    #[must_use]
    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Freshness window.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn lookup(&self, key: &CacheKey) -> Option<Observation> {
        let Ok(entries) = self.entries.lock() else {
            return None;
        };
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.observation.clone())
    }

    fn store(&self, key: CacheKey, observation: Observation) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                observation,
            },
        );
    }
}

#[async_trait]
impl<P: SampleProvider> SampleProvider for CachedSampleProvider<P> {
    async fn fetch(&self, spot: &Spot, date: NaiveDate) -> Result<Observation, SampleError> {
        let key = (spot.id.clone(), date);
        if let Some(observation) = self.lookup(&key) {
            debug!("cache hit for {} on {date}", spot.id);
            return Ok(observation);
        }
        let observation = self.inner.fetch(spot, date).await?;
        self.store(key, observation.clone());
        Ok(observation)
    }
}
