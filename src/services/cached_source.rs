//! Fetch-and-cache layer over a catalogue source.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::domain::{AppError, CachePolicy, Catalogue, PokemonDetail};
use crate::ports::CatalogueSource;

/// A catalogue snapshot together with its provenance.
#[derive(Debug, Clone)]
pub struct CatalogueSnapshot {
    pub catalogue: Catalogue,
    /// When the snapshot was fetched from upstream.
    pub fetched_at: DateTime<Utc>,
    /// True when the snapshot was served from cache rather than refetched.
    pub from_cache: bool,
}

struct CacheSlot {
    catalogue: Catalogue,
    fetched_at: DateTime<Utc>,
    stored_at: Instant,
}

/// Caches catalogue snapshots from an inner source under a [`CachePolicy`].
///
/// Only the list snapshot is cached; detail fetches pass through uncached.
pub struct CachedCatalogueSource<S> {
    inner: S,
    policy: CachePolicy,
    slot: Mutex<Option<CacheSlot>>,
}

impl<S: CatalogueSource> CachedCatalogueSource<S> {
    pub fn new(inner: S, policy: CachePolicy) -> Self {
        Self { inner, policy, slot: Mutex::new(None) }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Return the cached snapshot while it is fresh, refetching otherwise.
    pub fn catalogue(&self) -> Result<CatalogueSnapshot, AppError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::config_error("Catalogue cache lock poisoned"))?;

        if let Some(cached) = slot.as_ref() {
            if !is_stale(self.policy, cached.stored_at.elapsed()) {
                return Ok(CatalogueSnapshot {
                    catalogue: cached.catalogue.clone(),
                    fetched_at: cached.fetched_at,
                    from_cache: true,
                });
            }
        }

        let catalogue = self.inner.fetch_catalogue()?;
        let fetched_at = Utc::now();
        *slot = Some(CacheSlot {
            catalogue: catalogue.clone(),
            fetched_at,
            stored_at: Instant::now(),
        });

        Ok(CatalogueSnapshot { catalogue, fetched_at, from_cache: false })
    }

    /// Fetch a detail record from the inner source.
    pub fn detail(&self, name: &str) -> Result<PokemonDetail, AppError> {
        self.inner.fetch_detail(name)
    }
}

/// Whether a snapshot of the given age must be refetched under `policy`.
fn is_stale(policy: CachePolicy, age: Duration) -> bool {
    match policy {
        CachePolicy::NoStore => true,
        CachePolicy::ForceCache => false,
        CachePolicy::Revalidate(secs) => age >= Duration::from_secs(secs),
    }
}
