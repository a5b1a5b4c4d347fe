//! External quote providers
//!
//! This module defines the `QuoteProvider` capability the cache consumes
//! (`fetch(ticker) -> price`) and the `FetchError` type providers surface.
//! The shipped implementation talks to the CNBC quote webservice.

mod cnbc;

pub use cnbc::CnbcClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching a quote
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Provider returned no quote for the ticker
    #[error("No quote available for ticker: {0}")]
    UnknownTicker(String),

    /// Provider returned a price that is not a finite number
    #[error("Unusable price {value:?} for ticker {ticker}")]
    BadPrice { ticker: String, value: String },
}

/// Capability to fetch the current price for a single ticker
///
/// The cache makes no retry, timeout, or latency assumptions about
/// implementations; a provider that blocks indefinitely blocks `resolve`.
#[async_trait]
pub trait QuoteProvider {
    /// Fetches the current price for a (normalized) ticker symbol
    async fn fetch(&self, ticker: &str) -> Result<f64, FetchError>;
}
