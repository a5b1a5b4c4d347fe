//! Quote storage backends
//!
//! This module defines the `CacheEntry` record, the `QuoteStore` trait that
//! cache backends implement, and the `StorageError` type they surface. Two
//! backends are provided: an in-memory map and a JSON-file store in the
//! XDG cache directory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A single cached quote: one entry per normalized ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Normalized (uppercase) ticker symbol, the unique key
    pub ticker: String,
    /// Last fetched price; always non-negative
    pub price: f64,
    /// When the price was fetched; never touched on a cache hit
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates an entry for a freshly fetched price.
    ///
    /// # Returns
    /// * `Ok(CacheEntry)` for a non-negative price
    /// * `Err(StorageError::NegativePrice)` otherwise
    pub fn new(
        ticker: impl Into<String>,
        price: f64,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, StorageError> {
        let ticker = ticker.into();
        if price < 0.0 {
            return Err(StorageError::NegativePrice { ticker, price });
        }
        Ok(Self {
            ticker,
            price,
            fetched_at,
        })
    }
}

/// Errors surfaced by quote storage backends
///
/// Storage failures are systemic: a quote cannot be trusted if the backing
/// medium is unreliable, so these are never swallowed and abort a whole
/// batch resolve.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    #[error("cache store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be parsed
    #[error("corrupt cache record at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record carries a negative price, rejected at the store boundary
    #[error("negative price {price} for ticker {ticker}")]
    NegativePrice { ticker: String, price: f64 },

    /// No cache directory could be determined (e.g. no home directory)
    #[error("could not determine a cache directory")]
    NoCacheDir,
}

/// Key-value backend mapping normalized ticker to `CacheEntry`
///
/// Implementations must serialize `put`/`delete`/`clear_all` against each
/// other so no partial state is observable; a coarse lock is acceptable.
/// Only the cache layer mutates a store.
pub trait QuoteStore {
    /// Looks up the entry for a ticker. A miss is `Ok(None)`, not an error.
    fn get(&self, ticker: &str) -> Result<Option<CacheEntry>, StorageError>;

    /// Inserts or overwrites the entry for `entry.ticker`, persisting the
    /// side effect before returning.
    fn put(&self, entry: CacheEntry) -> Result<(), StorageError>;

    /// Removes the entry for a ticker if present; absent is not an error.
    fn delete(&self, ticker: &str) -> Result<(), StorageError>;

    /// Removes every entry. Clearing an empty store succeeds.
    fn clear_all(&self) -> Result<(), StorageError>;
}
