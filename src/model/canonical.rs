//! The normalized, render-ready resume.

use serde::{Deserialize, Serialize};

/// Name shown when the input has none.
pub const PLACEHOLDER_NAME: &str = "John Doe";

/// A resume with every field present and typed.
///
/// Produced by [`crate::normalize::normalize`]. List fields are never
/// missing, so renderers decide whether to show a section purely by
/// checking emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResume {
    /// Candidate name, never empty
    pub name: String,

    /// Raw contact text; split into display tokens by the renderers
    pub contact_info: String,

    /// Professional summary (may be empty)
    pub summary: String,

    /// Skills in input order
    pub skills: Vec<String>,

    /// Certifications in input order
    pub certifications: Vec<String>,

    /// Spoken languages in input order
    pub languages: Vec<String>,

    /// Tools in input order
    pub tools: Vec<String>,

    /// One display line per education entry
    pub education: Vec<String>,

    /// One display line per project
    pub projects: Vec<String>,

    /// Roles with their bullet points
    pub experience: Vec<ExperienceEntry>,
}

impl CanonicalResume {
    /// Create an empty resume carrying only the placeholder name.
    pub fn new() -> Self {
        Self::with_name(PLACEHOLDER_NAME)
    }

    /// Create an empty resume with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: String::new(),
            summary: String::new(),
            skills: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            tools: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            experience: Vec::new(),
        }
    }

    /// Check if nothing beyond the header is filled in.
    pub fn has_no_content(&self) -> bool {
        self.summary.is_empty()
            && self.skills.is_empty()
            && self.certifications.is_empty()
            && self.languages.is_empty()
            && self.tools.is_empty()
            && self.education.is_empty()
            && self.projects.is_empty()
            && self.experience.is_empty()
    }

    /// Get the total number of bullet points across all roles.
    pub fn bullet_count(&self) -> usize {
        self.experience.iter().map(|e| e.bullets.len()).sum()
    }
}

impl Default for CanonicalResume {
    fn default() -> Self {
        Self::new()
    }
}

/// One role in the experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Role and company joined by `" @ "`
    pub title: String,

    /// Achievement bullets
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    /// Create a new entry.
    pub fn new(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_placeholder_name() {
        let resume = CanonicalResume::default();
        assert_eq!(resume.name, PLACEHOLDER_NAME);
        assert!(resume.has_no_content());
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut resume = CanonicalResume::with_name("Jane Doe");
        resume.contact_info = "jane@example.com".to_string();
        resume.experience.push(ExperienceEntry::new(
            "Engineer @ Acme",
            vec!["Shipped things".to_string()],
        ));

        let json = serde_json::to_string(&resume).unwrap();
        assert!(json.contains("\"contactInfo\":\"jane@example.com\""));
        assert!(json.contains("\"title\":\"Engineer @ Acme\""));
        assert_eq!(resume.bullet_count(), 1);
    }
}
