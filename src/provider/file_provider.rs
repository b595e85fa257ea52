use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{request_symbols, TickerProvider};
use crate::models::Ticker;

/// Reads one JSON ticker document per symbol from a data directory
#[derive(Debug, Clone)]
pub struct FileProvider {
    data_dir: PathBuf,
}

impl FileProvider {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", symbol.to_uppercase()))
    }

    fn load(&self, symbol: &str) -> Result<Option<Ticker>> {
        let path = self.path_for(symbol);
        if !path.exists() {
            warn!("⚠️ No data file for {} at {}", symbol, path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let ticker: Ticker = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse ticker data in {}", path.display()))?;

        debug!("Loaded {} from {}", ticker.symbol, path.display());
        Ok(Some(ticker))
    }
}

impl TickerProvider for FileProvider {
    fn get_all(&self, symbols: &[String]) -> Result<Vec<Ticker>> {
        let symbols = request_symbols(symbols);
        let mut tickers = Vec::with_capacity(symbols.len());

        for symbol in &symbols {
            if let Some(ticker) = self.load(symbol)? {
                tickers.push(ticker);
            }
        }

        info!(
            "📊 Loaded {} of {} tickers from {}",
            tickers.len(),
            symbols.len(),
            self.data_dir.display()
        );
        Ok(tickers)
    }
}
