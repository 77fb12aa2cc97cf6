//! Data models for portfolio content.
//!
//! This module contains the data structures synchronized between the
//! remote content store, the local cache, and the render state:
//!
//! - `HeroProfile`: the singleton identity/biography block
//! - `Skill`, `Experience`, `Project`: the public collections
//! - `ContactMessage`: visitor messages, managed from the admin inbox
//! - `Stats`: the derived dashboard aggregate

pub mod content;
pub mod message;

pub use content::{Experience, HeroProfile, Project, Skill, SkillCategory};
pub use message::{ContactMessage, Stats};
