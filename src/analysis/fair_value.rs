// Fair Share Price Estimation
// Projects EPS forward at a growth rate, applies a forward P/E multiple and
// discounts the result back at the required rate of return.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScreenerError;
use crate::models::Ticker;

/// Parameters for the fair price projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueParams {
    pub growth_rate: f64,
    /// Minimum acceptable annual rate of return used as the discount rate
    pub required_return: f64,
    pub horizon_years: u32,
}

impl Default for FairValueParams {
    fn default() -> Self {
        Self {
            growth_rate: 0.12,
            required_return: 0.15,
            horizon_years: 10,
        }
    }
}

impl FairValueParams {
    /// Number of compounding (and discounting) steps applied.
    ///
    /// The first year of the horizon is left unchanged, so a ten year horizon
    /// compounds nine times. Existing valuations depend on this count; do not
    /// change it to `horizon_years`.
    pub fn steps(&self) -> u32 {
        self.horizon_years.saturating_sub(1)
    }
}

/// Estimate the fair share price from trailing EPS and forward P/E.
///
/// Returns full precision; use [`round_to_cents`] for display.
pub fn estimate_fair_price(
    trailing_eps: Option<f64>,
    forward_pe: Option<f64>,
    params: &FairValueParams,
) -> Result<f64, ScreenerError> {
    let eps = trailing_eps.ok_or_else(|| ScreenerError::missing("", "trailing_eps"))?;
    let pe_ratio = forward_pe.ok_or_else(|| ScreenerError::missing("", "forward_pe"))?;

    if params.horizon_years == 0 {
        return Err(ScreenerError::InvalidInput(
            "horizon_years must be at least 1".to_string(),
        ));
    }

    let mut future_eps = eps;
    for _ in 0..params.steps() {
        future_eps = future_eps + future_eps * params.growth_rate;
    }

    let mut fair_price = future_eps * pe_ratio;
    for _ in 0..params.steps() {
        fair_price = fair_price / (1.0 + params.required_return);
    }

    debug!(
        "Fair price: eps {} -> {} over {} steps, pe {}, discounted to {}",
        eps,
        future_eps,
        params.steps(),
        pe_ratio,
        fair_price
    );
    Ok(fair_price)
}

/// Fair share price for a ticker using its trailing EPS and forward P/E
pub fn fair_share_price(ticker: &Ticker, params: &FairValueParams) -> Result<f64, ScreenerError> {
    let stats = ticker
        .key_statistics
        .as_ref()
        .ok_or_else(|| ScreenerError::missing(&ticker.symbol, "key_statistics"))?;
    let summary = ticker
        .summary_detail
        .as_ref()
        .ok_or_else(|| ScreenerError::missing(&ticker.symbol, "summary_detail"))?;

    estimate_fair_price(stats.trailing_eps, summary.forward_pe, params).map_err(|e| match e {
        ScreenerError::MissingData { field, .. } => ScreenerError::missing(&ticker.symbol, field),
        other => other,
    })
}

/// Percentage change from `initial` to `final_value`, rounded to a whole percent
/// (ties to even).
pub fn percent_delta(initial: f64, final_value: f64) -> Result<f64, ScreenerError> {
    if initial == 0.0 {
        return Err(ScreenerError::InvalidInput(
            "cannot compute a percentage change from zero".to_string(),
        ));
    }
    Ok(((final_value - initial) / initial * 100.0).round_ties_even())
}

/// Round to 2 decimals from the exact binary value, ties to even
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Headline metrics for the single-company valuation view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub symbol: String,
    pub title: String,
    pub fair_price: f64,
    pub current_price: f64,
    /// Fair price relative to current price
    pub price_delta_percent: f64,
    pub forward_eps: Option<f64>,
    /// Forward EPS relative to trailing EPS
    pub forward_eps_delta_percent: Option<f64>,
}

pub fn valuation_summary(
    ticker: &Ticker,
    params: &FairValueParams,
) -> Result<ValuationSummary, ScreenerError> {
    let fair_price = round_to_cents(fair_share_price(ticker, params)?);
    let current_price = ticker
        .current_price()
        .ok_or_else(|| ScreenerError::missing(&ticker.symbol, "current_price"))?;
    let price_delta_percent = percent_delta(current_price, fair_price)?;

    let (forward_eps, forward_eps_delta_percent) = match &ticker.key_statistics {
        Some(stats) => {
            let delta = match (stats.trailing_eps, stats.forward_eps) {
                (Some(trailing), Some(forward)) => percent_delta(trailing, forward).ok(),
                _ => None,
            };
            (stats.forward_eps, delta)
        }
        None => (None, None),
    };

    Ok(ValuationSummary {
        symbol: ticker.symbol.clone(),
        title: ticker.title.clone(),
        fair_price,
        current_price,
        price_delta_percent,
        forward_eps,
        forward_eps_delta_percent,
    })
}
