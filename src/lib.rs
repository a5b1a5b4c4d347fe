//! Tickerwatch Library
//!
//! This module exposes the cache, store, provider, and CLI modules for use
//! in integration tests.

pub mod cache;
pub mod cli;
pub mod provider;
pub mod store;
