//! Portfolio owner profile (Entity)
//!
//! Everything the site says about its owner lives here: the page sections
//! render it and the persona context is derived from it.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A titled group of skills ("Languages", "Frameworks", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

/// One work experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    /// One-line summary used in the persona context
    pub summary: String,
    /// Bullet points shown in the resume section
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    /// Short degree label for the persona context ("B.Tech in CSE")
    #[serde(default)]
    pub short_degree: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Parenthetical shown after the name in the persona ("CrewAI")
    #[serde(default)]
    pub note: Option<String>,
    /// Featured projects are named in the persona context
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Headline number shown in the about section ("30+ Projects")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    /// Wording used in the persona context; omitted stats are display-only
    #[serde(default)]
    pub persona: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

fn default_possessive() -> String {
    "their".to_string()
}

/// The portfolio owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Possessive used in the third-person greeting ("his", "her", "their")
    #[serde(default = "default_possessive")]
    pub possessive: String,
    /// Short brand mark for the navbar ("KD.AI")
    #[serde(default)]
    pub brand: Option<String>,
    pub role: String,
    pub tagline: String,
    pub summary: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    /// Flat list for the persona; falls back to all grouped skills when empty
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub tone: String,
    pub contact: Contact,
    /// Answer style rules appended to the persona context
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Profile {
    /// First word of the owner's name ("Kaustav")
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Brand mark, or initials when none is configured
    pub fn brand(&self) -> String {
        match &self.brand {
            Some(brand) => brand.clone(),
            None => self
                .name
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .collect(),
        }
    }

    /// Skills for the persona context
    pub fn persona_stack(&self) -> Vec<&str> {
        if !self.tech_stack.is_empty() {
            return self.tech_stack.iter().map(String::as_str).collect();
        }
        self.skill_groups
            .iter()
            .flat_map(|g| g.skills.iter().map(String::as_str))
            .collect()
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Default greeting for the chat widget
    pub fn greeting(&self) -> String {
        format!(
            "Hi! I'm {}'s AI Twin. Ask me anything about {} skills, experience, or projects! ✨",
            self.first_name(),
            self.possessive
        )
    }

    /// Reject profiles that cannot produce a usable persona
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidProfile("name is empty".to_string()));
        }
        if self.role.trim().is_empty() {
            return Err(DomainError::InvalidProfile("role is empty".to_string()));
        }
        if self.contact.email.trim().is_empty() {
            return Err(DomainError::InvalidProfile(
                "contact.email is empty".to_string(),
            ));
        }
        Ok(())
    }
}
