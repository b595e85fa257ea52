use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{PriceRow, Ticker};

/// Exclusive price band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceBand {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self { min_price, max_price }
    }

    /// Both bounds are exclusive
    pub fn contains(&self, price: f64) -> bool {
        price > self.min_price && price < self.max_price
    }
}

impl Default for PriceBand {
    fn default() -> Self {
        Self::new(10.0, 1000.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Keep tickers priced strictly inside the band, sorted by price.
///
/// Tickers without a current price never appear. Equal prices keep input order.
pub fn filter_by_price(tickers: &[Ticker], band: PriceBand, order: SortOrder) -> Vec<PriceRow> {
    let mut rows: Vec<PriceRow> = tickers
        .iter()
        .filter_map(|t| {
            let price = t.current_price()?;
            band.contains(price).then(|| PriceRow {
                symbol: t.symbol.clone(),
                title: t.title.clone(),
                price,
            })
        })
        .collect();

    match order {
        SortOrder::Ascending => rows.sort_by(|a, b| {
            a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortOrder::Descending => rows.sort_by(|a, b| {
            b.price.partial_cmp(&a.price).unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    info!(
        "📊 Price filter {:.2}..{:.2}: {} of {} tickers matched",
        band.min_price,
        band.max_price,
        rows.len(),
        tickers.len()
    );
    rows
}
