//! Tickerwatch - fetch and print current stock prices
//!
//! A single-shot CLI that resolves a list of ticker symbols through a
//! TTL-based quote cache, so repeated runs within the TTL reuse the stored
//! prices instead of hitting the quote provider again.

mod cache;
mod cli;
mod provider;
mod store;

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use cache::{QuoteCache, ResolvedQuote};
use cli::{Cli, Config};
use provider::CnbcClient;
use store::{FileStore, MemoryStore, QuoteStore, StorageError};

/// Drops the cache if requested, then resolves the configured tickers
async fn run_with_store<S: QuoteStore>(
    store: S,
    config: &Config,
) -> Result<Vec<ResolvedQuote>, StorageError> {
    let cache = QuoteCache::new(store, CnbcClient::new());
    if config.drop {
        cache.drop_all()?;
    }
    cache
        .resolve_many(&config.tickers, config.ttl_minutes, Utc::now())
        .await
}

/// Prints one line per requested ticker, in request order
fn print_quotes(results: &[ResolvedQuote]) {
    for result in results {
        match &result.outcome {
            Ok(price) => println!("Ticker: {:<6} Price: {:>8.2}", result.ticker, price),
            Err(err) => println!("Error fetching price for {}: {}", result.ticker, err),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let results = if cli.memory {
        run_with_store(MemoryStore::new(), &config).await
    } else {
        match FileStore::open_default() {
            Ok(file_store) => run_with_store(file_store, &config).await,
            Err(err) => Err(err),
        }
    };

    match results {
        Ok(results) => {
            print_quotes(&results);
            ExitCode::SUCCESS
        }
        // Storage failures are systemic; fetch failures for individual
        // tickers were already reported line by line above.
        Err(err) => {
            eprintln!("Storage error: {}", err);
            ExitCode::FAILURE
        }
    }
}
