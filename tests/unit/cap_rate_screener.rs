//! Cap rate screener tests

use pretty_assertions::assert_eq;
use test_log::test;

use crate::common::{logging, test_data};
use fundamentals_screener::analysis::{screen, CapRateCriteria, DEFAULT_MIN_CAP_RATE};
use fundamentals_screener::models::{FinancialSnapshot, MarketSummary, Ticker};

#[test]
fn test_cap_rate_scenario_ordering() {
    logging::log_test_step("Screening three tickers with one negative FCF");

    let tickers = vec![
        test_data::create_cap_rate_ticker("ONE", 6e9, 50e9),
        test_data::create_cap_rate_ticker("TWO", -1e9, 10e9),
        test_data::create_cap_rate_ticker("THREE", 4e9, 30e9),
    ];

    let results = screen(&tickers, &CapRateCriteria::new(5e9, 10)).unwrap();
    logging::log_test_data("Screen results", &results);

    let symbols: Vec<&str> = results.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["THREE", "ONE"]);
    assert!((results[0].cap_rate - 13.333_333).abs() < 1e-5);
    assert_eq!(results[1].cap_rate, 12.0);
    assert_eq!(results[1].free_cash_flow, 6e9);
    assert_eq!(results[1].market_cap, 50e9);
}

#[test]
fn test_market_cap_floor() {
    let tickers = vec![
        test_data::create_cap_rate_ticker("SMALL", 1e9, 4e9), // 25% but too small
        test_data::create_cap_rate_ticker("EXACT", 1e9, 5e9), // at the floor
    ];

    let results = screen(&tickers, &CapRateCriteria::new(5e9, 10)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol, "EXACT");
}

#[test]
fn test_missing_fields_are_skipped() {
    let mut no_fcf = test_data::create_cap_rate_ticker("NOFCF", 0.0, 10e9);
    no_fcf.financial_data.as_mut().unwrap().free_cash_flow = None;

    let mut no_cap = test_data::create_cap_rate_ticker("NOCAP", 5e9, 0.0);
    no_cap.summary_detail.as_mut().unwrap().market_cap = None;

    let no_sections = Ticker::new("EMPTY", "Empty");

    let only_summary = Ticker {
        summary_detail: Some(MarketSummary {
            market_cap: Some(10e9),
            forward_pe: None,
        }),
        ..Ticker::new("HALF", "Half")
    };

    let tickers = vec![
        no_fcf,
        no_cap,
        no_sections,
        only_summary,
        test_data::create_cap_rate_ticker("GOOD", 3e9, 20e9),
    ];

    let results = screen(&tickers, &CapRateCriteria::new(0.0, 10)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol, "GOOD");
}

#[test]
fn test_truncates_to_top_n_and_keeps_order() {
    let tickers: Vec<Ticker> = (1..=8)
        .map(|i| test_data::create_cap_rate_ticker(&format!("T{}", i), (10 + i) as f64 * 1e8, 10e9))
        .collect();

    let results = screen(&tickers, &CapRateCriteria::new(0.0, 3)).unwrap();
    let symbols: Vec<&str> = results.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["T8", "T7", "T6"]);
}

#[test]
fn test_ties_keep_input_order() {
    let tickers = vec![
        test_data::create_cap_rate_ticker("FIRST", 2e9, 10e9),
        test_data::create_cap_rate_ticker("SECOND", 2e9, 10e9),
    ];

    let results = screen(&tickers, &CapRateCriteria::new(0.0, 10)).unwrap();
    assert_eq!(results[0].symbol, "FIRST");
    assert_eq!(results[1].symbol, "SECOND");
}

#[test]
fn test_screen_invariants_over_mixed_input() {
    let mut tickers = Vec::new();
    for i in 0..50 {
        let fcf = (i as f64 - 10.0) * 1e8;
        let market_cap = (i % 7 + 1) as f64 * 2e9;
        tickers.push(test_data::create_cap_rate_ticker(&format!("S{}", i), fcf, market_cap));
    }
    let criteria = CapRateCriteria::new(4e9, 12);

    let results = screen(&tickers, &criteria).unwrap();

    assert!(results.len() <= criteria.top_n);
    for r in &results {
        assert!(r.cap_rate > DEFAULT_MIN_CAP_RATE);
        assert!(r.market_cap >= criteria.min_market_cap);
        assert!(r.free_cash_flow >= 0.0);
    }
    for pair in results.windows(2) {
        assert!(pair[0].cap_rate >= pair[1].cap_rate);
    }
}

#[test]
fn test_result_carries_snapshot_fields() {
    let ticker = Ticker {
        financial_data: Some(FinancialSnapshot {
            free_cash_flow: Some(3e9),
            current_price: None,
            profit_margin: Some(0.31),
        }),
        summary_detail: Some(MarketSummary {
            market_cap: Some(20e9),
            forward_pe: None,
        }),
        ..Ticker::new("SNAP", "Snapshot Co")
    };

    let results = screen(&[ticker], &CapRateCriteria::new(0.0, 1)).unwrap();
    assert_eq!(results[0].title, "Snapshot Co");
    assert_eq!(results[0].current_price, None);
    assert_eq!(results[0].profit_margin, Some(0.31));
    assert_eq!(results[0].cap_rate, 15.0);
}
