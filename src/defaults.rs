//! Bundled fallback content.
//!
//! Shown on a first-ever visit before any remote data has been cached, and
//! whenever both the cache and the remote store come up empty. The render
//! state is always seeded from here when a cache key is absent, so the page
//! never waits on the network to have something to show.
//!
//! All of this is placeholder sample content; the live values come from the
//! remote store.

use crate::models::{Experience, HeroProfile, Project, Skill, SkillCategory};

/// Default hero profile for a fresh install.
pub fn hero() -> HeroProfile {
    HeroProfile {
        id: None,
        name: "ALEX SAMPLE".to_string(),
        tagline: "Full Stack Developer | Next.js | React | TypeScript".to_string(),
        bio: "Building scalable digital solutions with a focus on performance.".to_string(),
        available: true,
        image: None,
    }
}

/// Default skill set across the three categories.
pub fn skills() -> Vec<Skill> {
    fn skill(name: &str, level: u8, category: SkillCategory) -> Skill {
        Skill {
            id: None,
            name: name.to_string(),
            level,
            category,
        }
    }

    vec![
        skill("Next.js & React", 90, SkillCategory::Frontend),
        skill("TypeScript", 85, SkillCategory::Frontend),
        skill("Tailwind CSS", 90, SkillCategory::Frontend),
        skill("Node.js", 85, SkillCategory::Backend),
        skill("PostgreSQL", 80, SkillCategory::Backend),
        skill("REST API Design", 85, SkillCategory::Backend),
        skill("Git & GitHub", 90, SkillCategory::Tools),
        skill("CI/CD Pipelines", 80, SkillCategory::Tools),
        skill("Cloud Deployment", 85, SkillCategory::Tools),
    ]
}

/// Default experience timeline.
pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: None,
            role: "Full Stack Developer".to_string(),
            company: "Example Agency".to_string(),
            period: "January 2024 – Present".to_string(),
            description: vec![
                "Built and maintained client-facing web applications end to end.".to_string(),
                "Designed REST APIs and database schemas for internal tooling.".to_string(),
                "Introduced automated testing and deployment pipelines.".to_string(),
                "Mentored junior developers on code review and release practices.".to_string(),
            ],
            technologies: Some(vec![
                "Next.js".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "CI/CD".to_string(),
            ]),
        },
        Experience {
            id: None,
            role: "Frontend Developer (Freelance)".to_string(),
            company: "Self-employed".to_string(),
            period: "June 2022 – December 2023".to_string(),
            description: vec![
                "Delivered responsive marketing sites for small businesses.".to_string(),
                "Migrated legacy pages to a component-based architecture.".to_string(),
                "Improved page performance scores across client projects.".to_string(),
            ],
            technologies: Some(vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ]),
        },
    ]
}

/// Default project cards.
pub fn projects() -> Vec<Project> {
    fn project(title: &str, description: &str, tech: &[&str], image: &str) -> Project {
        Project {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            link: Some("#".to_string()),
            github: Some("#".to_string()),
            image: Some(image.to_string()),
        }
    }

    vec![
        project(
            "Student Records Portal",
            "An academic management portal for tracking enrollment, subjects, and \
             real-time score reporting across an institution.",
            &["Next.js", "Node.js", "PostgreSQL", "Auth"],
            "/records_portal.png",
        ),
        project(
            "Payments & Reporting Dashboard",
            "A financial tracking tool for collecting fees and producing accurate, \
             transparent accounting reports.",
            &["React", "TypeScript", "Secure Data", "Reporting"],
            "/payments_dashboard.png",
        ),
        project(
            "Admin Control Center",
            "An administrative dashboard for secure data archiving, record \
             verification, and multi-tier audit trails.",
            &["Next.js", "PostgreSQL", "Auth", "Tailwind CSS"],
            "/control_center.png",
        ),
        project(
            "Brand & Multimedia Kit",
            "A collection of digital promotional materials and system-integrated \
             visuals for a consistent organizational brand presence.",
            &["Design Systems", "Brand Identity", "UI/UX Visuals"],
            "/brand_kit.png",
        ),
    ]
}
