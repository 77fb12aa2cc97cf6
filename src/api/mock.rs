//! In-memory `ContentStore` used by unit tests.
//!
//! Collections are programmable, individual operations can be forced to
//! fail, and fetches can be delayed to exercise the failsafe timer under
//! paused tokio time.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;

use crate::models::{ContactMessage, Experience, HeroProfile, Project, Skill, Stats};

use super::ContentStore;

#[derive(Default)]
struct MockData {
    hero: Option<HeroProfile>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    experiences: Vec<Experience>,
    messages: Vec<ContactMessage>,
    failing: HashSet<&'static str>,
}

#[derive(Default)]
pub struct MockStore {
    data: Mutex<MockData>,
    fetch_delay: Mutex<Option<Duration>>,
    next_id: AtomicU64,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hero(&self, hero: HeroProfile) {
        self.data.lock().unwrap().hero = Some(hero);
    }

    pub fn set_projects(&self, projects: Vec<Project>) {
        self.data.lock().unwrap().projects = projects;
    }

    pub fn set_skills(&self, skills: Vec<Skill>) {
        self.data.lock().unwrap().skills = skills;
    }

    pub fn set_experiences(&self, experiences: Vec<Experience>) {
        self.data.lock().unwrap().experiences = experiences;
    }

    /// Force the named operation (e.g. "fetch_skills") to fail until cleared.
    pub fn fail(&self, op: &'static str) {
        self.data.lock().unwrap().failing.insert(op);
    }

    pub fn clear_failures(&self) {
        self.data.lock().unwrap().failing.clear();
    }

    /// Delay every fetch by the given duration (virtual time in paused tests).
    pub fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.lock().unwrap() = Some(delay);
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.data.lock().unwrap().messages.clone()
    }

    fn assign_id(&self) -> String {
        format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn begin(&self, op: &'static str) -> Result<()> {
        let delay = *self.fetch_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.data.lock().unwrap().failing.contains(op) {
            return Err(anyhow!("{} forced to fail", op));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MockStore {
    async fn fetch_hero(&self) -> Result<Option<HeroProfile>> {
        self.begin("fetch_hero").await?;
        Ok(self.data.lock().unwrap().hero.clone())
    }

    async fn save_hero(&self, hero: &HeroProfile) -> Result<()> {
        self.begin("save_hero").await?;
        let mut saved = hero.clone();
        if saved.id.is_none() {
            saved.id = Some(self.assign_id());
        }
        self.data.lock().unwrap().hero = Some(saved);
        Ok(())
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.begin("fetch_projects").await?;
        Ok(self.data.lock().unwrap().projects.clone())
    }

    async fn save_project(&self, project: &Project) -> Result<()> {
        self.begin("save_project").await?;
        let mut saved = project.clone();
        let mut data = self.data.lock().unwrap();
        match saved.id.as_deref() {
            Some(id) => {
                if let Some(existing) = data.projects.iter_mut().find(|p| p.id.as_deref() == Some(id)) {
                    *existing = saved;
                }
            }
            None => {
                saved.id = Some(self.assign_id());
                data.projects.push(saved);
            }
        }
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        self.begin("delete_project").await?;
        self.data
            .lock()
            .unwrap()
            .projects
            .retain(|p| p.id.as_deref() != Some(id));
        Ok(())
    }

    async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        self.begin("fetch_skills").await?;
        Ok(self.data.lock().unwrap().skills.clone())
    }

    async fn save_skill(&self, skill: &Skill) -> Result<()> {
        self.begin("save_skill").await?;
        let mut saved = skill.clone();
        let mut data = self.data.lock().unwrap();
        match saved.id.as_deref() {
            Some(id) => {
                if let Some(existing) = data.skills.iter_mut().find(|s| s.id.as_deref() == Some(id)) {
                    *existing = saved;
                }
            }
            None => {
                saved.id = Some(self.assign_id());
                data.skills.push(saved);
            }
        }
        Ok(())
    }

    async fn delete_skill(&self, id: &str) -> Result<()> {
        self.begin("delete_skill").await?;
        self.data
            .lock()
            .unwrap()
            .skills
            .retain(|s| s.id.as_deref() != Some(id));
        Ok(())
    }

    async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
        self.begin("fetch_experiences").await?;
        Ok(self.data.lock().unwrap().experiences.clone())
    }

    async fn save_experience(&self, experience: &Experience) -> Result<()> {
        self.begin("save_experience").await?;
        let mut saved = experience.clone();
        let mut data = self.data.lock().unwrap();
        match saved.id.as_deref() {
            Some(id) => {
                if let Some(existing) = data
                    .experiences
                    .iter_mut()
                    .find(|e| e.id.as_deref() == Some(id))
                {
                    *existing = saved;
                }
            }
            None => {
                saved.id = Some(self.assign_id());
                data.experiences.push(saved);
            }
        }
        Ok(())
    }

    async fn delete_experience(&self, id: &str) -> Result<()> {
        self.begin("delete_experience").await?;
        self.data
            .lock()
            .unwrap()
            .experiences
            .retain(|e| e.id.as_deref() != Some(id));
        Ok(())
    }

    async fn fetch_messages(&self) -> Result<Vec<ContactMessage>> {
        self.begin("fetch_messages").await?;
        Ok(self.data.lock().unwrap().messages.clone())
    }

    async fn save_message(&self, sender: &str, email: &str, body: &str) -> Result<()> {
        self.begin("save_message").await?;
        let message = ContactMessage {
            id: self.assign_id(),
            sender: sender.to_string(),
            email: email.to_string(),
            message: body.to_string(),
            created_at: Utc::now(),
            is_read: false,
        };
        self.data.lock().unwrap().messages.push(message);
        Ok(())
    }

    async fn mark_message_read(&self, id: &str) -> Result<()> {
        self.begin("mark_message_read").await?;
        if let Some(message) = self
            .data
            .lock()
            .unwrap()
            .messages
            .iter_mut()
            .find(|m| m.id == id)
        {
            message.is_read = true;
        }
        Ok(())
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        self.begin("delete_message").await?;
        self.data.lock().unwrap().messages.retain(|m| m.id != id);
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<Stats> {
        self.begin("fetch_stats").await?;
        let data = self.data.lock().unwrap();
        Ok(Stats {
            messages_received: data.messages.len(),
            projects_count: data.projects.len(),
            skills_count: data.skills.len(),
            experiences_count: data.experiences.len(),
            last_sync: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        })
    }
}
