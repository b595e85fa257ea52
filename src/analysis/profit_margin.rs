use serde::{Deserialize, Serialize};

use crate::analysis::fair_value::round_to_cents;
use crate::error::ScreenerError;
use crate::models::Ticker;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginSide {
    pub symbol: String,
    /// Profit margin fraction rounded to 2 decimals
    pub value: f64,
}

/// Profit margin of a company next to its benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginComparison {
    pub symbol: MarginSide,
    pub benchmark: MarginSide,
}

impl MarginComparison {
    /// Symbol with the higher margin, `None` when they are equal
    pub fn leader(&self) -> Option<&str> {
        if self.symbol.value > self.benchmark.value {
            Some(self.symbol.symbol.as_str())
        } else if self.benchmark.value > self.symbol.value {
            Some(self.benchmark.symbol.as_str())
        } else {
            None
        }
    }

    pub fn description(&self) -> String {
        match self.leader() {
            Some(leader) => format!(
                "{} has a higher profit margin which means that it can generate more cashflow",
                leader
            ),
            None => format!(
                "{} and {} have the same profit margin",
                self.symbol.symbol, self.benchmark.symbol
            ),
        }
    }
}

fn margin_side(ticker: &Ticker) -> Result<MarginSide, ScreenerError> {
    let margin = ticker
        .key_statistics
        .as_ref()
        .and_then(|s| s.profit_margin)
        .ok_or_else(|| ScreenerError::missing(&ticker.symbol, "profit_margin"))?;

    Ok(MarginSide {
        symbol: ticker.symbol.clone(),
        value: round_to_cents(margin),
    })
}

pub fn compare_profit_margin(
    ticker: &Ticker,
    benchmark: &Ticker,
) -> Result<MarginComparison, ScreenerError> {
    Ok(MarginComparison {
        symbol: margin_side(ticker)?,
        benchmark: margin_side(benchmark)?,
    })
}
