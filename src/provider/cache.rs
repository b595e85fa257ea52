use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use super::{normalize_symbols, TickerProvider};
use crate::models::Ticker;

// chrono durations are limited to i64::MAX milliseconds
const MAX_TTL_SECONDS: u64 = (i64::MAX / 1000) as u64;

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    tickers: Vec<Ticker>,
}

/// Wraps a provider and reuses results for the same symbol set until the TTL expires.
///
/// Tickers keep the order of the request that filled the entry. Expired entries
/// are dropped whenever a new entry is stored. A zero TTL disables caching.
pub struct CachedProvider<P> {
    inner: P,
    ttl: Duration,
    entries: Mutex<HashMap<Vec<String>, CacheEntry>>,
}

impl<P: TickerProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl_seconds: u64) -> Self {
        Self {
            inner,
            ttl: Duration::seconds(ttl_seconds.min(MAX_TTL_SECONDS) as i64),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn invalidate(&self) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("Ticker cache lock poisoned"))?
            .clear();
        Ok(())
    }
}

impl<P: TickerProvider> TickerProvider for CachedProvider<P> {
    fn get_all(&self, symbols: &[String]) -> Result<Vec<Ticker>> {
        let key = normalize_symbols(symbols);
        if self.ttl <= Duration::zero() {
            return self.inner.get_all(symbols);
        }

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Ticker cache lock poisoned"))?;

        let now = Utc::now();
        if let Some(entry) = entries.get(&key) {
            if now - entry.fetched_at < self.ttl {
                debug!("Cache hit for {} symbols", key.len());
                return Ok(entry.tickers.clone());
            }
        }

        debug!("Cache miss for {} symbols, fetching", key.len());
        let tickers = self.inner.get_all(symbols)?;
        let ttl = self.ttl;
        entries.retain(|_, entry| now - entry.fetched_at < ttl);
        entries.insert(
            key,
            CacheEntry {
                fetched_at: now,
                tickers: tickers.clone(),
            },
        );
        Ok(tickers)
    }
}
