//! Expiry-aware read-through quote cache
//!
//! `QuoteCache` sits between callers and a `QuoteProvider`: a requested
//! ticker is served from the `QuoteStore` while its entry is younger than
//! the TTL, and refetched (and re-stored) otherwise. A drop operation
//! empties the store unconditionally.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use thiserror::Error;

use crate::provider::{FetchError, QuoteProvider};
use crate::store::{CacheEntry, QuoteStore, StorageError};

/// Errors that can occur when resolving a ticker
#[derive(Debug, Error)]
pub enum CacheError {
    /// Ticker was empty or blank after normalization
    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// The storage backend failed; systemic, aborts a whole batch
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The quote provider failed; affects only the requested ticker
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Result of resolving one ticker within a batch
#[derive(Debug)]
pub struct ResolvedQuote {
    /// Normalized ticker symbol
    pub ticker: String,
    /// The resolved price, or the per-ticker failure
    pub outcome: Result<f64, CacheError>,
}

/// Normalizes a raw ticker: trim, uppercase, reject blank
///
/// Rejection happens before any store or provider call.
pub fn normalize_ticker(raw: &str) -> Result<String, CacheError> {
    let normalized = raw.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(CacheError::InvalidTicker(raw.to_string()));
    }
    Ok(normalized)
}

/// Returns true if the entry may still be served without a refetch
///
/// Freshness is strict (`age < ttl`), so an age of exactly zero counts as
/// fresh; a TTL of zero or below means every entry is stale.
fn is_fresh(entry: &CacheEntry, ttl_minutes: i64, now: DateTime<Utc>) -> bool {
    if ttl_minutes <= 0 {
        return false;
    }
    now.signed_duration_since(entry.fetched_at) < Duration::minutes(ttl_minutes)
}

/// Read-through TTL cache over an injected store and quote provider
#[derive(Debug)]
pub struct QuoteCache<S, P> {
    store: S,
    provider: P,
}

impl<S: QuoteStore, P: QuoteProvider> QuoteCache<S, P> {
    /// Creates a cache over the given store and provider
    pub fn new(store: S, provider: P) -> Self {
        Self { store, provider }
    }

    /// Resolves the current price for one ticker
    ///
    /// Serves the stored price when the entry is younger than `ttl_minutes`
    /// (no provider call, no write). Otherwise fetches, stores an entry
    /// stamped with `now`, and returns the fresh price. A fetch failure
    /// writes nothing and leaves any stale entry in place, so a later call
    /// can retry the fetch; a stale price is never served.
    ///
    /// # Arguments
    /// * `ticker` - Raw ticker symbol; trimmed and uppercased first
    /// * `ttl_minutes` - Maximum entry age; zero or negative forces a refetch
    /// * `now` - The caller's clock reading, also used as `fetched_at`
    pub async fn resolve(
        &self,
        ticker: &str,
        ttl_minutes: i64,
        now: DateTime<Utc>,
    ) -> Result<f64, CacheError> {
        let ticker = normalize_ticker(ticker)?;

        if let Some(entry) = self.store.get(&ticker)? {
            if is_fresh(&entry, ttl_minutes, now) {
                debug!("cache hit for {} (price {})", ticker, entry.price);
                return Ok(entry.price);
            }
            debug!("stale entry for {}, refetching", ticker);
        } else {
            debug!("cache miss for {}, fetching", ticker);
        }

        let price = self.provider.fetch(&ticker).await?;
        if price < 0.0 {
            // A negative quote is a provider anomaly for this ticker; it
            // must not poison the store or abort a batch.
            return Err(CacheError::Fetch(FetchError::BadPrice {
                ticker,
                value: price.to_string(),
            }));
        }

        self.store.put(CacheEntry::new(ticker, price, now)?)?;
        Ok(price)
    }

    /// Resolves a batch of tickers, one result per requested ticker
    ///
    /// Tickers are resolved sequentially in the caller's order, so a
    /// duplicate later in the batch observes the entry written by its
    /// earlier occurrence. A failed fetch or invalid ticker is recorded in
    /// that ticker's `outcome` without affecting the rest; a storage
    /// failure aborts the whole batch.
    pub async fn resolve_many(
        &self,
        tickers: &[String],
        ttl_minutes: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<ResolvedQuote>, StorageError> {
        let mut results = Vec::with_capacity(tickers.len());
        for raw in tickers {
            let ticker = raw.trim().to_uppercase();
            match self.resolve(raw, ttl_minutes, now).await {
                Ok(price) => results.push(ResolvedQuote {
                    ticker,
                    outcome: Ok(price),
                }),
                Err(CacheError::Storage(err)) => return Err(err),
                Err(err) => results.push(ResolvedQuote {
                    ticker,
                    outcome: Err(err),
                }),
            }
        }
        Ok(results)
    }

    /// Empties the store unconditionally, regardless of entry freshness
    ///
    /// Runs before any resolve when the caller requests a forced refresh
    /// baseline. Dropping an empty store succeeds.
    pub fn drop_all(&self) -> Result<(), StorageError> {
        info!("dropping all cached quotes");
        self.store.clear_all()
    }
}
