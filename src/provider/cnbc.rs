//! CNBC quote webservice client
//!
//! Fetches the last traded price for a ticker from CNBC's public quote
//! endpoint and parses it into a plain `f64`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{FetchError, QuoteProvider};

/// Base URL for the CNBC quote webservice
const CNBC_QUOTE_BASE_URL: &str =
    "https://quote.cnbc.com/quote-html-webservice/restQuote/symbolType/symbol";

/// The endpoint rejects clientless user agents, so present a browser one
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Top-level quote response envelope
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "FormattedQuoteResult")]
    result: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    #[serde(rename = "FormattedQuote", default)]
    quotes: Vec<Quote>,
}

/// A single quote record; prices arrive as formatted strings ("1,234.56")
#[derive(Debug, Deserialize)]
struct Quote {
    symbol: Option<String>,
    last: Option<String>,
}

/// Client for fetching quotes from the CNBC webservice
#[derive(Debug, Clone)]
pub struct CnbcClient {
    client: Client,
}

impl Default for CnbcClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CnbcClient {
    /// Create a new CnbcClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new CnbcClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Parse a formatted price string ("1,234.56") into an f64
    fn parse_price(ticker: &str, raw: &str) -> Result<f64, FetchError> {
        let cleaned = raw.replace(',', "");
        let value: f64 = cleaned.parse().map_err(|_| FetchError::BadPrice {
            ticker: ticker.to_string(),
            value: raw.to_string(),
        })?;
        if !value.is_finite() {
            return Err(FetchError::BadPrice {
                ticker: ticker.to_string(),
                value: raw.to_string(),
            });
        }
        Ok(value)
    }
}

#[async_trait]
impl QuoteProvider for CnbcClient {
    /// Fetch the last traded price for the given ticker
    ///
    /// # Returns
    /// * `Ok(price)` - Last traded price as a float
    /// * `Err(FetchError)` - If the request fails, the response cannot be
    ///   parsed, or the provider has no quote for the ticker
    async fn fetch(&self, ticker: &str) -> Result<f64, FetchError> {
        let url = format!(
            "{}?symbols={}&requestMethod=itv&noform=1&partnerId=2&fund=1&exthrs=1&output=json",
            CNBC_QUOTE_BASE_URL, ticker
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let text = response.text().await?;
        let quote_response: QuoteResponse = serde_json::from_str(&text)?;

        let quote = quote_response
            .result
            .quotes
            .into_iter()
            .find(|q| q.symbol.as_deref() == Some(ticker))
            .ok_or_else(|| FetchError::UnknownTicker(ticker.to_string()))?;

        let last = quote
            .last
            .ok_or_else(|| FetchError::UnknownTicker(ticker.to_string()))?;

        Self::parse_price(ticker, &last)
    }
}
