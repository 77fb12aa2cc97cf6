//! Local caching module for instant first paint.
//!
//! This module provides the `CacheStore` for persisting the last-known-good
//! portfolio content across restarts. Data is stored as JSON, one file per
//! collection, wrapped in a versioned envelope so the format can migrate
//! without corrupting old entries.
//!
//! Cached keys:
//! - `hero` (singleton profile)
//! - `projects`, `skills`, `experiences` (collections)

pub mod store;

pub use store::{keys, CacheEntry, CacheStore};
