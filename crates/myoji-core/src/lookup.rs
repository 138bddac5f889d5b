use async_trait::async_trait;
use unicode_normalization::UnicodeNormalization;

use myoji_config::Config;
use myoji_types::SurnameRecord;

use crate::cache::CacheStore;
use crate::fetch::PageFetcher;
use crate::page;

/// Single-surname resolution. Failure is a value: callers see `None`, never
/// an error, for every expected failure path.
#[async_trait]
pub trait SurnameLookup: Send + Sync {
    /// Resolve one surname to its record. `use_cache` gates the cache read
    /// only; a successful fresh lookup is always written back.
    async fn lookup(&self, surname: &str, use_cache: bool) -> Option<SurnameRecord>;
}

/// Orchestrates fetch, extraction and the cache for one surname at a time.
pub struct LookupService<F> {
    config: Config,
    fetcher: F,
    cache: CacheStore,
}

impl<F: PageFetcher> LookupService<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        let cache = CacheStore::new(config.cache_root.clone());
        Self {
            config,
            fetcher,
            cache,
        }
    }
}

#[async_trait]
impl<F: PageFetcher> SurnameLookup for LookupService<F> {
    async fn lookup(&self, surname: &str, use_cache: bool) -> Option<SurnameRecord> {
        // Cache keys and query URIs use the trimmed, canonical (NFC) form.
        let surname: String = surname.trim().nfc().collect();
        if surname.is_empty() {
            return None;
        }

        if use_cache {
            match self.cache.get(&surname) {
                Ok(Some(record)) => {
                    tracing::debug!("cache hit for {surname}");
                    return Some(record);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("treating unreadable cache entry for {surname} as a miss: {e}");
                }
            }
        }

        let uri = self.config.search_uri(&surname);
        let text = match self.fetcher.fetch(&uri).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("fetch failed for {surname}: {e}");
                return None;
            }
        };

        let record = match page::extract(&text) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("no record extracted for {surname}: {e}");
                return None;
            }
        };

        if let Err(e) = self.cache.put(&surname, &record) {
            tracing::warn!("failed to cache record for {surname}: {e}");
        }

        Some(record)
    }
}
