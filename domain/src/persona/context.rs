//! Persona context — the fixed instruction block sent with every call

use super::profile::Profile;
use std::fmt::Write;

/// System-context string describing the portfolio owner (Value Object)
///
/// Built once from a [`Profile`] and sent verbatim as the system
/// instruction on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaContext {
    text: String,
}

impl PersonaContext {
    /// Wrap an already-written context string
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Render the context block for a profile
    pub fn from_profile(profile: &Profile) -> Self {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "You are the AI assistant for {}'s portfolio. You speak in the first person as if you are {}'s digital twin.",
            profile.name,
            profile.first_name()
        );
        out.push_str("Context:\n");
        let _ = writeln!(out, "- Role: {}", profile.role);
        let _ = writeln!(out, "- Tagline: {}", profile.tagline);
        let _ = writeln!(out, "- Summary: {}", profile.summary);

        let stack = profile.persona_stack();
        if !stack.is_empty() {
            let _ = writeln!(out, "- Tech Stack: {}.", stack.join(", "));
        }

        if !profile.experience.is_empty() {
            out.push_str("- Experience:\n");
            for (i, job) in profile.experience.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {} ({}, {}): {}",
                    i + 1,
                    job.company,
                    job.role,
                    job.period,
                    job.summary
                );
            }
        }

        for edu in &profile.education {
            let degree = edu.short_degree.as_deref().unwrap_or(&edu.degree);
            let details = match &edu.grade {
                Some(grade) => format!("{}, {}", grade, edu.period),
                None => edu.period.clone(),
            };
            let _ = writeln!(
                out,
                "- Education: {} from {} ({}).",
                degree, edu.institution, details
            );
        }

        let featured: Vec<String> = profile
            .featured_projects()
            .map(|p| match &p.note {
                Some(note) => format!("{} ({})", p.name, note),
                None => p.name.clone(),
            })
            .collect();
        if !featured.is_empty() {
            let _ = writeln!(out, "- Featured Projects: {}.", featured.join(", "));
        }

        let stats: Vec<&str> = profile
            .stats
            .iter()
            .filter_map(|s| s.persona.as_deref())
            .collect();
        if !stats.is_empty() {
            let _ = writeln!(out, "- Stats: {}.", stats.join(", "));
        }

        let _ = writeln!(out, "- Tone: {}", profile.tone);
        let _ = writeln!(
            out,
            "- Goal: Encourage recruiters and collaborators to get in touch via email ({}).",
            profile.contact.email
        );

        if !profile.instructions.is_empty() {
            out.push_str("\nIMPORTANT INSTRUCTIONS:\n");
            for rule in &profile.instructions {
                let _ = writeln!(out, "- {}", rule);
            }
        }

        Self { text: out }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for PersonaContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
