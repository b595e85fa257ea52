use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::provider::Universe;

/// Company-level financial data for the latest fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub free_cash_flow: Option<f64>,
    pub current_price: Option<f64>,
    /// Profit margin as a fraction (0.25 = 25%)
    pub profit_margin: Option<f64>,
}

/// Market summary data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub market_cap: Option<f64>,
    pub forward_pe: Option<f64>,
}

/// Per-share statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyStatistics {
    pub trailing_eps: Option<f64>,
    pub forward_eps: Option<f64>,
    pub profit_margin: Option<f64>,
}

/// One period of a cash flow statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowStatement {
    pub end_date: NaiveDate,
    pub total_cash_from_operating_activities: Option<f64>,
    pub total_cash_from_financing_activities: Option<f64>,
    pub total_cashflows_from_investing_activities: Option<f64>,
}

impl CashflowStatement {
    /// Period label used on charts
    pub fn fmt_end_date(&self) -> String {
        self.end_date.format("%Y").to_string()
    }
}

/// Everything the provider knows about one symbol.
///
/// Any section may be missing; computations decide per field whether that
/// excludes the ticker or fails the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub title: String,
    #[serde(default)]
    pub financial_data: Option<FinancialSnapshot>,
    #[serde(default)]
    pub summary_detail: Option<MarketSummary>,
    #[serde(default)]
    pub key_statistics: Option<KeyStatistics>,
    #[serde(default)]
    pub cashflow_statements: Vec<CashflowStatement>,
}

impl Ticker {
    pub fn new(symbol: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn current_price(&self) -> Option<f64> {
        self.financial_data.as_ref().and_then(|f| f.current_price)
    }

    pub fn market_cap(&self) -> Option<f64> {
        self.summary_detail.as_ref().and_then(|s| s.market_cap)
    }
}

/// Ranked row produced by the cap rate screener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerResult {
    pub symbol: String,
    pub title: String,
    pub cap_rate: f64,
    pub market_cap: f64,
    pub free_cash_flow: f64,
    pub current_price: Option<f64>,
    pub profit_margin: Option<f64>,
}

/// Row produced by the price range filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub symbol: String,
    pub title: String,
    pub price: f64,
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub universe_dir: String,
    pub cache_ttl_seconds: u64,
    pub default_universe: Universe,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let default_universe = std::env::var("DEFAULT_UNIVERSE")
            .unwrap_or_else(|_| "S&P".to_string())
            .parse()?;

        Ok(Config {
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string()),
            universe_dir: std::env::var("UNIVERSE_DIR")
                .unwrap_or_else(|_| "./universes".to_string()),
            cache_ttl_seconds: std::env::var("CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            default_universe,
        })
    }
}
