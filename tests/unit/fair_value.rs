//! Fair share price tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use crate::common::test_data::create_valuation_ticker;
use fundamentals_screener::analysis::{
    estimate_fair_price, fair_share_price, percent_delta, round_to_cents, valuation_summary,
    FairValueParams,
};
use fundamentals_screener::models::Ticker;
use fundamentals_screener::ScreenerError;

#[test]
fn test_reference_fair_price() {
    // 5 * 1.12^9 * 15 / 1.15^9, accumulated step by step
    let price = estimate_fair_price(Some(5.0), Some(15.0), &FairValueParams::default()).unwrap();
    assert_eq!(price, 59.12115422775602);
    assert_eq!(round_to_cents(price), 59.12);
}

#[test]
fn test_nine_steps_not_ten() {
    let params = FairValueParams {
        growth_rate: 1.0,
        required_return: 0.0,
        horizon_years: 10,
    };
    // doubling nine times
    assert_eq!(estimate_fair_price(Some(1.0), Some(1.0), &params).unwrap(), 512.0);
}

#[test]
fn test_deterministic() {
    let params = FairValueParams {
        growth_rate: 0.07,
        required_return: 0.09,
        horizon_years: 10,
    };
    let first = estimate_fair_price(Some(3.21), Some(22.5), &params).unwrap();
    let second = estimate_fair_price(Some(3.21), Some(22.5), &params).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_missing_inputs_fail() {
    let params = FairValueParams::default();
    assert_matches!(
        estimate_fair_price(None, Some(15.0), &params),
        Err(ScreenerError::MissingData { field: "trailing_eps", .. })
    );
    assert_matches!(
        estimate_fair_price(Some(5.0), None, &params),
        Err(ScreenerError::MissingData { field: "forward_pe", .. })
    );
}

#[test]
fn test_ticker_without_statistics() {
    let ticker = Ticker::new("BARE", "Bare Co");
    let err = fair_share_price(&ticker, &FairValueParams::default()).unwrap_err();
    assert_eq!(err, ScreenerError::missing("BARE", "key_statistics"));
}

#[test]
fn test_ticker_missing_eps_names_symbol() {
    let mut ticker = create_valuation_ticker("AAPL", 100.0, 5.0, 15.0);
    ticker.key_statistics.as_mut().unwrap().trailing_eps = None;

    let err = fair_share_price(&ticker, &FairValueParams::default()).unwrap_err();
    assert_eq!(err, ScreenerError::missing("AAPL", "trailing_eps"));
}

#[test]
fn test_percent_delta_rejects_zero_price() {
    assert_matches!(percent_delta(0.0, 59.12), Err(ScreenerError::InvalidInput(_)));
}

#[test]
fn test_valuation_summary() {
    let ticker = create_valuation_ticker("AAPL", 100.0, 5.0, 15.0);
    let summary = valuation_summary(&ticker, &FairValueParams::default()).unwrap();

    assert_eq!(summary.symbol, "AAPL");
    assert_eq!(summary.fair_price, 59.12);
    assert_eq!(summary.current_price, 100.0);
    assert_eq!(summary.price_delta_percent, -41.0);
    assert_eq!(summary.forward_eps, Some(6.25));
    assert_eq!(summary.forward_eps_delta_percent, Some(25.0));
}

#[test]
fn test_valuation_summary_requires_price() {
    let mut ticker = create_valuation_ticker("AAPL", 100.0, 5.0, 15.0);
    ticker.financial_data = None;

    assert_matches!(
        valuation_summary(&ticker, &FairValueParams::default()),
        Err(ScreenerError::MissingData { field: "current_price", .. })
    );
}
