use anyhow::{anyhow, Result};
use std::collections::HashSet;

use crate::models::Ticker;

pub mod cache;
pub mod file_provider;
pub mod universe;

pub use cache::CachedProvider;
pub use file_provider::FileProvider;
pub use universe::Universe;

/// Source of ticker snapshots
#[cfg_attr(test, mockall::automock)]
pub trait TickerProvider {
    /// Fetch every known symbol; unknown symbols are left out of the result
    fn get_all(&self, symbols: &[String]) -> Result<Vec<Ticker>>;

    fn get_one(&self, symbol: &str) -> Result<Ticker> {
        self.get_all(&[symbol.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No data found for symbol {}", symbol))
    }
}

/// Upper-case and de-duplicate symbols, keeping the order they were requested in
pub fn request_symbols(symbols: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    symbols
        .iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

/// Sorted request symbols, so equivalent requests compare equal as cache keys
pub fn normalize_symbols(symbols: &[String]) -> Vec<String> {
    let mut normalized = request_symbols(symbols);
    normalized.sort();
    normalized
}
