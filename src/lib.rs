//! foliosync - the data synchronization core of a personal portfolio site.
//!
//! The crate keeps the public portfolio content (hero profile, skills,
//! experiences, projects) available immediately from an on-disk cache,
//! reconciles it with the remote content API in the background, and guards
//! the admin surface with an inactivity watchdog. Visitor contact messages
//! and admin content edits go through the same API client.
//!
//! The main pieces:
//!
//! - [`cache::CacheStore`] - versioned per-key JSON cache on disk
//! - [`sync::SyncCoordinator`] - cache-first render state with background
//!   reconciliation and a bounded first paint
//! - [`session::SessionWatchdog`] - admin session inactivity timeout
//! - [`admin::AdminGateway`] - content mutations for the dashboard
//! - [`app::App`] - top-level application state

pub mod admin;
pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod defaults;
pub mod models;
pub mod session;
pub mod sync;

pub use api::{ApiClient, ApiError, ContentStore};
pub use app::App;
pub use cache::CacheStore;
pub use config::Config;
pub use session::SessionWatchdog;
pub use sync::SyncCoordinator;
