//! Single-retry wrapper for detail fetches.

use std::thread;
use std::time::Duration;

use crate::domain::{AppError, Catalogue, PokemonDetail};
use crate::ports::CatalogueSource;

/// Wraps a catalogue source and retries a failed detail fetch exactly once.
///
/// List fetches are attempt-once. A 404 is definitive and never retried.
pub struct RetryingCatalogueSource<S> {
    inner: S,
    retry_delay: Duration,
}

impl<S: CatalogueSource> RetryingCatalogueSource<S> {
    pub fn new(inner: S, retry_delay: Duration) -> Self {
        Self { inner, retry_delay }
    }
}

impl<S: CatalogueSource> CatalogueSource for RetryingCatalogueSource<S> {
    fn fetch_catalogue(&self) -> Result<Catalogue, AppError> {
        self.inner.fetch_catalogue()
    }

    fn fetch_detail(&self, name: &str) -> Result<PokemonDetail, AppError> {
        match self.inner.fetch_detail(name) {
            Ok(detail) => Ok(detail),
            Err(error) if is_retryable(&error) => {
                eprintln!("Detail fetch for '{}' failed: {}. Retrying once.", name, error);
                thread::sleep(self.retry_delay);
                self.inner.fetch_detail(name)
            }
            Err(error) => Err(error),
        }
    }
}

fn is_retryable(error: &AppError) -> bool {
    matches!(error, AppError::FetchFailed { .. })
}
