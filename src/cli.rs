//! Command-line interface parsing for tickerwatch
//!
//! This module handles parsing of CLI arguments using clap. Every option has
//! an environment-variable fallback (`TICKERS`, `DROP_DB`, `TTL`) so the tool
//! can be driven entirely from the environment.

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The ticker list contained no symbols
    #[error("No ticker symbols provided (set --tickers or the TICKERS variable)")]
    NoTickers,
}

/// Tickerwatch - fetch current stock prices with a TTL-based quote cache
#[derive(Parser, Debug)]
#[command(name = "tickerwatch")]
#[command(about = "Fetch and print current stock prices, cached with a TTL")]
#[command(version)]
pub struct Cli {
    /// Comma-separated ticker symbols to resolve
    ///
    /// Examples:
    ///   tickerwatch --tickers AAPL
    ///   tickerwatch --tickers TSLA,IBM,AAPL
    ///   TICKERS=TSLA,IBM tickerwatch
    #[arg(long, env = "TICKERS", default_value = "AAPL", value_name = "SYMBOLS")]
    pub tickers: String,

    /// Drop every cached quote before resolving anything
    #[arg(long = "drop-db", env = "DROP_DB", default_value_t = false)]
    pub drop_db: bool,

    /// Cache TTL in minutes; zero or negative always refetches
    #[arg(
        long,
        env = "TTL",
        default_value_t = 5,
        value_name = "MINUTES",
        allow_negative_numbers = true
    )]
    pub ttl: i64,

    /// Keep quotes in memory only instead of the on-disk cache
    #[arg(long)]
    pub memory: bool,
}

/// Configuration handed to the core's batch resolve
#[derive(Debug, Clone)]
pub struct Config {
    /// Ticker symbols in the order they were requested
    pub tickers: Vec<String>,
    /// Whether to drop all cached quotes first
    pub drop: bool,
    /// Maximum cached quote age in minutes
    pub ttl_minutes: i64,
}

impl Config {
    /// Builds a Config from parsed CLI arguments.
    ///
    /// Splits the ticker list on commas, discarding blank segments (so a
    /// trailing comma is harmless).
    ///
    /// # Returns
    /// * `Ok(Config)` with at least one ticker
    /// * `Err(CliError::NoTickers)` if no symbols remain after splitting
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let tickers: Vec<String> = cli
            .tickers
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if tickers.is_empty() {
            return Err(CliError::NoTickers);
        }

        Ok(Config {
            tickers,
            drop: cli.drop_db,
            ttl_minutes: cli.ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tickerwatch"]);
        assert_eq!(cli.tickers, "AAPL");
        assert!(!cli.drop_db);
        assert_eq!(cli.ttl, 5);
        assert!(!cli.memory);
    }

    #[test]
    fn test_cli_parse_ticker_list() {
        let cli = Cli::parse_from(["tickerwatch", "--tickers", "TSLA,IBM,AAPL"]);
        assert_eq!(cli.tickers, "TSLA,IBM,AAPL");
    }

    #[test]
    fn test_cli_parse_drop_db_flag() {
        let cli = Cli::parse_from(["tickerwatch", "--drop-db"]);
        assert!(cli.drop_db);
    }

    #[test]
    fn test_cli_parse_ttl() {
        let cli = Cli::parse_from(["tickerwatch", "--ttl", "30"]);
        assert_eq!(cli.ttl, 30);
    }

    #[test]
    fn test_cli_parse_negative_ttl() {
        let cli = Cli::parse_from(["tickerwatch", "--ttl", "-1"]);
        assert_eq!(cli.ttl, -1);
    }

    #[test]
    fn test_config_from_cli_splits_tickers_in_order() {
        let cli = Cli::parse_from(["tickerwatch", "--tickers", "TSLA,IBM,AAPL"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.tickers, vec!["TSLA", "IBM", "AAPL"]);
        assert!(!config.drop);
        assert_eq!(config.ttl_minutes, 5);
    }

    #[test]
    fn test_config_from_cli_trims_and_skips_blank_segments() {
        let cli = Cli::parse_from(["tickerwatch", "--tickers", " TSLA , ,IBM,"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.tickers, vec!["TSLA", "IBM"]);
    }

    #[test]
    fn test_config_from_cli_rejects_empty_list() {
        let cli = Cli::parse_from(["tickerwatch", "--tickers", " , ,"]);
        let result = Config::from_cli(&cli);
        assert!(matches!(result, Err(CliError::NoTickers)));
    }

    #[test]
    fn test_config_from_cli_carries_drop_and_ttl() {
        let cli = Cli::parse_from(["tickerwatch", "--drop-db", "--ttl", "0"]);
        let config = Config::from_cli(&cli).unwrap();
        assert!(config.drop);
        assert_eq!(config.ttl_minutes, 0);
    }
}
