//! In-memory quote store
//!
//! Backs the cache with a plain `HashMap` behind a mutex. Used by tests and
//! by the `--memory` flag; nothing survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CacheEntry, QuoteStore, StorageError};

/// Quote store holding entries in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    /// Returns true if no entries are stored
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuoteStore for MemoryStore {
    fn get(&self, ticker: &str) -> Result<Option<CacheEntry>, StorageError> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(ticker).cloned())
    }

    fn put(&self, entry: CacheEntry) -> Result<(), StorageError> {
        if entry.price < 0.0 {
            return Err(StorageError::NegativePrice {
                ticker: entry.ticker,
                price: entry.price,
            });
        }
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(entry.ticker.clone(), entry);
        Ok(())
    }

    fn delete(&self, ticker: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.remove(ticker);
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.clear();
        Ok(())
    }
}
