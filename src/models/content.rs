//! Public-facing content types: hero profile, skills, experiences, projects.
//!
//! These are plain records with no identity of their own; `id` is assigned
//! by the remote content store on insert and is absent on locally created
//! entities until the first successful save.

use serde::{Deserialize, Serialize};

/// Maximum skill proficiency level.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// The singleton identity/biography block at the top of the page.
///
/// At most one live instance exists; absence means the bundled defaults
/// are shown instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub available: bool,
    /// Data URI or URL for the profile image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Skill grouping used by the three-column skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    /// Display title for this category.
    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools & DevOps",
        }
    }
}

/// A single skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    /// Clamp the proficiency level to the valid 0-100 range.
    ///
    /// The remote store does not enforce this bound, so it is applied at
    /// the mutation boundary before a save. Returns true when the value
    /// was out of range.
    pub fn clamp_level(&mut self) -> bool {
        if self.level > MAX_SKILL_LEVEL {
            self.level = MAX_SKILL_LEVEL;
            true
        } else {
            false
        }
    }
}

/// A position on the experience timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: String,
    pub company: String,
    pub period: String,
    /// Ordered bullet points describing the role.
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
