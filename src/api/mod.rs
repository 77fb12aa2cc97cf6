//! Remote content store module.
//!
//! The portfolio's authoritative data lives in a hosted database exposed
//! through a small REST surface. `ContentStore` is the contract consumed by
//! the sync coordinator and the admin gateway; `ApiClient` is the production
//! implementation over HTTP.

pub mod client;
pub mod error;

#[cfg(test)]
pub(crate) mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ContactMessage, Experience, HeroProfile, Project, Skill, Stats};

pub use client::ApiClient;
pub use error::ApiError;

/// Fetch and mutation operations against the hosted content database.
///
/// Fetches are read-only and safe to issue concurrently. Mutations return
/// `Ok(())` only when the store acknowledged the write; callers surface
/// failures as recoverable so pending form state can be retried.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch_hero(&self) -> Result<Option<HeroProfile>>;
    async fn save_hero(&self, hero: &HeroProfile) -> Result<()>;

    async fn fetch_projects(&self) -> Result<Vec<Project>>;
    async fn save_project(&self, project: &Project) -> Result<()>;
    async fn delete_project(&self, id: &str) -> Result<()>;

    async fn fetch_skills(&self) -> Result<Vec<Skill>>;
    async fn save_skill(&self, skill: &Skill) -> Result<()>;
    async fn delete_skill(&self, id: &str) -> Result<()>;

    async fn fetch_experiences(&self) -> Result<Vec<Experience>>;
    async fn save_experience(&self, experience: &Experience) -> Result<()>;
    async fn delete_experience(&self, id: &str) -> Result<()>;

    async fn fetch_messages(&self) -> Result<Vec<ContactMessage>>;
    async fn save_message(&self, sender: &str, email: &str, body: &str) -> Result<()>;
    async fn mark_message_read(&self, id: &str) -> Result<()>;
    async fn delete_message(&self, id: &str) -> Result<()>;

    async fn fetch_stats(&self) -> Result<Stats>;
}
