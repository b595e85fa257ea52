use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fundamentals_screener::analysis::{
    cashflow_breakdown, compare_profit_margin, filter_by_price, screen, valuation_summary,
    CapRateCriteria, CashflowRow, FairValueParams, MarginComparison, PriceBand, SortOrder,
    ValuationSummary, BILLION,
};
use fundamentals_screener::models::Config;
use fundamentals_screener::provider::{CachedProvider, FileProvider, TickerProvider, Universe};
use fundamentals_screener::utils::{format_amount, format_billions, format_percentage};

/// Screen a universe of stocks by fundamentals
#[derive(Parser)]
#[command(name = "fundamentals-screener")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank companies by free cash flow over market cap
    CapRate {
        /// Universe to screen (S&P, FTSE, FREETRADE)
        #[arg(short, long)]
        universe: Option<Universe>,

        /// Minimum market cap in billions
        #[arg(long, default_value_t = 5.0)]
        min_market_cap_billions: f64,

        #[arg(short = 'n', long, default_value_t = 10)]
        top_n: usize,
    },
    /// List companies priced inside a band
    Price {
        #[arg(short, long)]
        universe: Option<Universe>,

        #[arg(long, default_value_t = 10.0)]
        min: f64,

        #[arg(long, default_value_t = 1000.0)]
        max: f64,

        /// Sort cheapest first (default is most expensive first)
        #[arg(long)]
        ascending: bool,
    },
    /// Estimate a fair share price and compare against a benchmark
    FairValue {
        #[arg(short, long, default_value = "AAPL")]
        symbol: String,

        #[arg(short, long, default_value = "AAPL")]
        benchmark: String,

        #[arg(long, default_value_t = 0.12)]
        growth_rate: f64,

        /// Minimum rate of return used to discount the projected price
        #[arg(long, default_value_t = 0.15)]
        min_return: f64,
    },
}

#[derive(Serialize)]
struct FairValueReport {
    valuation: ValuationSummary,
    cashflows: Vec<CashflowRow>,
    profit_margin: Option<MarginComparison>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fundamentals_screener=info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;
    let provider = CachedProvider::new(
        FileProvider::new(&config.data_dir),
        config.cache_ttl_seconds,
    );

    match cli.command {
        Command::CapRate {
            universe,
            min_market_cap_billions,
            top_n,
        } => {
            let universe = universe.unwrap_or(config.default_universe);
            let tickers = provider.get_all(&universe.symbols(&config.universe_dir)?)?;
            let criteria = CapRateCriteria::new(min_market_cap_billions * BILLION, top_n);
            let results = screen(&tickers, &criteria)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("Cap Rate Screener ({})", universe);
                println!("We found {} stocks matching the rules", results.len());
                for r in &results {
                    println!(
                        "{:<8} {:>8} cap {:>10} fcf {:>10}  {}",
                        r.symbol,
                        format_percentage(r.cap_rate),
                        format_billions(r.market_cap),
                        format_billions(r.free_cash_flow),
                        r.title
                    );
                }
            }
        }
        Command::Price {
            universe,
            min,
            max,
            ascending,
        } => {
            let universe = universe.unwrap_or(config.default_universe);
            let tickers = provider.get_all(&universe.symbols(&config.universe_dir)?)?;
            let order = if ascending {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            let rows = filter_by_price(&tickers, PriceBand::new(min, max), order);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("Market Price Screener ({})", universe);
                println!("We found {} stocks matching the rules", rows.len());
                for (i, row) in rows.iter().enumerate() {
                    println!("{:>4} {:<8} {:>12.2}  {}", i + 1, row.symbol, row.price, row.title);
                }
            }
        }
        Command::FairValue {
            symbol,
            benchmark,
            growth_rate,
            min_return,
        } => {
            let params = FairValueParams {
                growth_rate,
                required_return: min_return,
                ..Default::default()
            };
            let ticker = provider.get_one(&symbol)?;
            let ticker_benchmark = provider.get_one(&benchmark)?;

            let valuation = valuation_summary(&ticker, &params)?;
            let cashflows = cashflow_breakdown(&ticker.cashflow_statements);
            let profit_margin = match compare_profit_margin(&ticker, &ticker_benchmark) {
                Ok(cmp) => Some(cmp),
                Err(e) => {
                    warn!("Skipping profit margin comparison: {}", e);
                    None
                }
            };

            let report = FairValueReport {
                valuation,
                cashflows,
                profit_margin,
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_fair_value_report(&report);
            }
        }
    }

    info!("✅ Done");
    Ok(())
}

fn print_fair_value_report(report: &FairValueReport) {
    let v = &report.valuation;
    println!("{}", v.title);
    println!("{}", v.symbol);
    println!();
    println!(
        "Fair share price: {:.2} ({} vs current {:.2})",
        v.fair_price,
        format_percentage(v.price_delta_percent),
        v.current_price
    );
    match (v.forward_eps, v.forward_eps_delta_percent) {
        (Some(eps), Some(delta)) => {
            println!("Forward EPS: {} ({})", eps, format_percentage(delta))
        }
        (Some(eps), None) => println!("Forward EPS: {}", eps),
        _ => println!("Forward EPS: n/a"),
    }

    if !report.cashflows.is_empty() {
        println!();
        println!("Cash flows");
        for row in &report.cashflows {
            println!("  {} {:<20} {}", row.period, row.item, format_amount(row.value));
        }
    }

    if let Some(cmp) = &report.profit_margin {
        println!();
        println!("Profit margin");
        println!("  {}: {}", cmp.symbol.symbol, cmp.symbol.value);
        println!("  {}: {}", cmp.benchmark.symbol, cmp.benchmark.value);
        println!("  {}", cmp.description());
    }
}
