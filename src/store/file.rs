//! File-backed quote store
//!
//! Persists each ticker's entry as a JSON file in an XDG-compliant cache
//! directory (`~/.cache/tickerwatch/` on Linux), so prices survive between
//! runs of the single-shot CLI. Writes go through a temp file and rename so
//! a crashed write never leaves a half-written record behind.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{CacheEntry, QuoteStore, StorageError};

/// Quote store writing one JSON file per ticker
#[derive(Debug)]
pub struct FileStore {
    /// Directory where entry files are stored
    store_dir: PathBuf,
    /// Serializes put/delete/clear_all so no partial state is observable
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a FileStore in the XDG-compliant cache directory
    ///
    /// Uses `~/.cache/tickerwatch/` on Linux, or the equivalent XDG path on
    /// other platforms.
    ///
    /// # Returns
    /// * `Ok(FileStore)` on success
    /// * `Err(StorageError::NoCacheDir)` if no cache directory can be
    ///   determined (e.g., no home directory)
    pub fn open_default() -> Result<Self, StorageError> {
        let project_dirs = ProjectDirs::from("", "", "tickerwatch").ok_or(StorageError::NoCacheDir)?;
        Ok(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a FileStore with a custom directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(store_dir: PathBuf) -> Self {
        Self {
            store_dir,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path of the entry file for the given ticker
    fn entry_path(&self, ticker: &str) -> PathBuf {
        self.store_dir.join(format!("{}.json", ticker))
    }

    /// Ensures the store directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.store_dir)
    }
}

impl QuoteStore for FileStore {
    fn get(&self, ticker: &str) -> Result<Option<CacheEntry>, StorageError> {
        let path = self.entry_path(ticker);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        // A malformed record means the medium can no longer be trusted;
        // surface it rather than treating it as a miss.
        let entry: CacheEntry =
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: path.clone(),
                source,
            })?;
        if entry.price < 0.0 {
            return Err(StorageError::NegativePrice {
                ticker: entry.ticker,
                price: entry.price,
            });
        }
        Ok(Some(entry))
    }

    fn put(&self, entry: CacheEntry) -> Result<(), StorageError> {
        if entry.price < 0.0 {
            return Err(StorageError::NegativePrice {
                ticker: entry.ticker,
                price: entry.price,
            });
        }

        let _guard = self.write_lock.lock().expect("store lock poisoned");
        self.ensure_dir()?;

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let path = self.entry_path(&entry.ticker);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn delete(&self, ticker: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().expect("store lock poisoned");
        match fs::remove_file(self.entry_path(ticker)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().expect("store lock poisoned");
        let dir = match fs::read_dir(&self.store_dir) {
            Ok(dir) => dir,
            // A store that was never written to has nothing to clear
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        for dir_entry in dir {
            let path = dir_entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
