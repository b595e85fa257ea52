// Cap Rate Screening
// Ranks companies by free cash flow yield on their market capitalization

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ScreenerError;
use crate::models::{ScreenerResult, Ticker};

pub const BILLION: f64 = 1_000_000_000.0;

/// Cap rate (in percent) a company must strictly exceed to be listed
pub const DEFAULT_MIN_CAP_RATE: f64 = 10.0;

/// Cap rate screening criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapRateCriteria {
    /// Minimum market cap in whole currency units
    pub min_market_cap: f64,
    pub top_n: usize,
    pub min_cap_rate: f64,
}

impl Default for CapRateCriteria {
    fn default() -> Self {
        Self {
            min_market_cap: 5.0 * BILLION,
            top_n: 10,
            min_cap_rate: DEFAULT_MIN_CAP_RATE,
        }
    }
}

impl CapRateCriteria {
    pub fn new(min_market_cap: f64, top_n: usize) -> Self {
        Self {
            min_market_cap,
            top_n,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ScreenerError> {
        if self.top_n == 0 {
            return Err(ScreenerError::InvalidInput(
                "top_n must be at least 1".to_string(),
            ));
        }
        if !(self.min_market_cap >= 0.0) {
            return Err(ScreenerError::InvalidInput(format!(
                "min_market_cap must be non-negative, got {}",
                self.min_market_cap
            )));
        }
        Ok(())
    }
}

/// Free cash flow as a percentage of market cap
pub fn cap_rate(free_cash_flow: f64, market_cap: f64) -> f64 {
    free_cash_flow / market_cap * 100.0
}

/// Run the cap rate screen over a provider snapshot.
///
/// Tickers without free cash flow or market cap, with negative free cash flow,
/// or below the market cap floor are skipped. Results are ordered by cap rate,
/// highest first; ties keep input order.
pub fn screen(
    tickers: &[Ticker],
    criteria: &CapRateCriteria,
) -> Result<Vec<ScreenerResult>, ScreenerError> {
    criteria.validate()?;

    let mut skipped_missing = 0usize;
    let mut results = Vec::new();

    for ticker in tickers {
        let (Some(fin_data), Some(summary)) = (&ticker.financial_data, &ticker.summary_detail)
        else {
            skipped_missing += 1;
            continue;
        };

        let (Some(fcf), Some(market_cap)) = (fin_data.free_cash_flow, summary.market_cap) else {
            skipped_missing += 1;
            continue;
        };

        if fcf < 0.0 || market_cap <= 0.0 || market_cap < criteria.min_market_cap {
            continue;
        }

        let rate = cap_rate(fcf, market_cap);
        if rate > criteria.min_cap_rate {
            debug!("{} passes with cap rate {:.2}%", ticker.symbol, rate);
            results.push(ScreenerResult {
                symbol: ticker.symbol.clone(),
                title: ticker.title.clone(),
                cap_rate: rate,
                market_cap,
                free_cash_flow: fcf,
                current_price: fin_data.current_price,
                profit_margin: fin_data.profit_margin,
            });
        }
    }

    results.sort_by(|a, b| {
        b.cap_rate.partial_cmp(&a.cap_rate).unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(criteria.top_n);

    info!(
        "🎯 Cap rate screen: {} tickers, {} missing data, {} matched",
        tickers.len(),
        skipped_missing,
        results.len()
    );
    Ok(results)
}
