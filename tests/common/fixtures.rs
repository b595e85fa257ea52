//! On-disk data and universe directories

use std::fs;
use std::path::Path;

use fundamentals_screener::models::Ticker;
use tempfile::TempDir;

/// Temporary data directory with one JSON document per ticker
pub fn write_data_dir(tickers: &[Ticker]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp data dir");
    for ticker in tickers {
        write_ticker(dir.path(), ticker);
    }
    dir
}

pub fn write_ticker(dir: &Path, ticker: &Ticker) {
    let path = dir.join(format!("{}.json", ticker.symbol.to_uppercase()));
    let json = serde_json::to_string_pretty(ticker).expect("Failed to serialize ticker");
    fs::write(path, json).expect("Failed to write ticker file");
}

/// Write a constituents CSV with a `Symbol` column
pub fn write_universe(dir: &Path, file_name: &str, symbols: &[&str]) {
    let mut csv = String::from("Symbol,Security\n");
    for symbol in symbols {
        csv.push_str(&format!("{},{} plc\n", symbol, symbol));
    }
    fs::write(dir.join(file_name), csv).expect("Failed to write universe file");
}
