use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Named list of symbols to screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Universe {
    Sp500,
    Ftse100,
    Freetrade,
}

#[derive(Debug, Deserialize)]
struct UniverseRecord {
    #[serde(rename = "Symbol")]
    symbol: String,
}

impl Universe {
    pub const ALL: [Universe; 3] = [Universe::Sp500, Universe::Ftse100, Universe::Freetrade];

    /// Constituents file inside the universe directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Universe::Sp500 => "sp500.csv",
            Universe::Ftse100 => "ftse100.csv",
            Universe::Freetrade => "freetrade.csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Universe::Sp500 => "S&P",
            Universe::Ftse100 => "FTSE",
            Universe::Freetrade => "FREETRADE",
        }
    }

    /// Resolve the universe to its symbols from `<dir>/<file_name>`
    pub fn symbols(&self, dir: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = dir.as_ref().join(self.file_name());
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("Failed to open universe file {}", path.display()))?;

        let mut symbols = Vec::new();
        for record in reader.deserialize() {
            let record: UniverseRecord =
                record.with_context(|| format!("Invalid row in {}", path.display()))?;
            let symbol = record.symbol.trim();
            if !symbol.is_empty() {
                symbols.push(symbol.to_uppercase());
            }
        }

        if symbols.is_empty() {
            bail!("symbols not found for {} universe in {}", self, path.display());
        }

        info!("📋 {} universe: {} symbols", self, symbols.len());
        Ok(symbols)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Universe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "S&P" | "SP500" | "S&P500" => Ok(Universe::Sp500),
            "FTSE" | "FTSE100" => Ok(Universe::Ftse100),
            "FREETRADE" => Ok(Universe::Freetrade),
            other => Err(anyhow!(
                "Unknown universe '{}', expected one of S&P, FTSE, FREETRADE",
                other
            )),
        }
    }
}
