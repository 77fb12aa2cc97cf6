//! Admin mutation gateway.
//!
//! A thin pass-through between the admin editing surface and the remote
//! content store. Saves report success as a bool: `false` means the write
//! was rejected or the store is unreachable, the pending form state should
//! be kept, and the admin can retry. The gateway holds no cache of its own;
//! after a successful mutation the caller re-fetches the affected
//! collection (and the stats aggregate) to stay consistent.

use anyhow::Result;
use tracing::{error, warn};

use crate::api::ContentStore;
use crate::models::{ContactMessage, Experience, HeroProfile, Project, Skill, Stats};

/// Snapshot of everything the admin overview renders.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub messages: Vec<ContactMessage>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub stats: Stats,
    pub hero: Option<HeroProfile>,
}

/// Pass-through mutation surface over a content store.
pub struct AdminGateway<'a, S: ContentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ContentStore + ?Sized> AdminGateway<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fetch the full admin dashboard state concurrently.
    pub async fn load_dashboard(&self) -> Result<DashboardSnapshot> {
        let (messages, projects, skills, experiences, stats, hero) = futures::join!(
            self.store.fetch_messages(),
            self.store.fetch_projects(),
            self.store.fetch_skills(),
            self.store.fetch_experiences(),
            self.store.fetch_stats(),
            self.store.fetch_hero(),
        );

        Ok(DashboardSnapshot {
            messages: messages?,
            projects: projects?,
            skills: skills?,
            experiences: experiences?,
            stats: stats?,
            hero: hero?,
        })
    }

    fn report(kind: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to save {kind} - check the database connection");
                false
            }
        }
    }

    /// Insert (no id) or update (id present) the hero profile.
    pub async fn save_hero(&self, hero: &HeroProfile) -> bool {
        Self::report("hero", self.store.save_hero(hero).await)
    }

    pub async fn save_project(&self, project: &Project) -> bool {
        Self::report("project", self.store.save_project(project).await)
    }

    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.store.delete_project(id).await
    }

    /// Save a skill, clamping the proficiency level to the valid range first.
    /// The remote store does not enforce the bound.
    pub async fn save_skill(&self, skill: &Skill) -> bool {
        let mut skill = skill.clone();
        if skill.clamp_level() {
            warn!(skill = %skill.name, "Skill level out of range, clamped to 100");
        }
        Self::report("skill", self.store.save_skill(&skill).await)
    }

    pub async fn delete_skill(&self, id: &str) -> Result<()> {
        self.store.delete_skill(id).await
    }

    pub async fn save_experience(&self, experience: &Experience) -> bool {
        Self::report("experience", self.store.save_experience(experience).await)
    }

    pub async fn delete_experience(&self, id: &str) -> Result<()> {
        self.store.delete_experience(id).await
    }

    pub async fn mark_message_read(&self, id: &str) -> Result<()> {
        self.store.mark_message_read(id).await
    }

    pub async fn delete_message(&self, id: &str) -> Result<()> {
        self.store.delete_message(id).await
    }
}

// ============================================================================
// Tests
// ============================================================================
