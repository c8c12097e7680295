//! Section content shared by the screen and print renderers.
//!
//! Renderers decide layout and decoration; what a section *contains* is
//! decided once, here. A section kind yields content exactly when
//! [`SectionKind::is_present`] holds for the resume.

use serde::{Deserialize, Serialize};

use super::sections::SectionKind;
use crate::model::{CanonicalResume, ExperienceEntry};
use crate::normalize::PART_SEPARATOR;

/// One education line split into display parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    /// The full summary line
    pub line: String,
    /// Degree initials, when the line has at least two parts
    pub degree_abbr: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
}

impl EducationItem {
    /// Split a summary line such as `"Bachelor of Science — XYZ University — 2020"`.
    ///
    /// A line without the separator is kept verbatim with no abbreviation.
    pub fn from_line(line: &str) -> Self {
        let parts: Vec<&str> = line.split(PART_SEPARATOR).map(str::trim).collect();
        if parts.len() < 2 {
            return Self {
                line: line.to_string(),
                degree_abbr: None,
                institution: None,
                year: None,
            };
        }

        Self {
            line: line.to_string(),
            degree_abbr: Some(degree_abbreviation(parts[0])),
            institution: Some(parts[1].to_string()).filter(|s| !s.is_empty()),
            year: parts.get(2).filter(|s| !s.is_empty()).map(|s| s.to_string()),
        }
    }
}

/// Content of one present section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Header { name: String, contact: Vec<String> },
    Summary(String),
    Education(Vec<EducationItem>),
    Experience(Vec<ExperienceEntry>),
    /// Skills, projects, certifications, languages and tools
    Items(Vec<String>),
}

impl SectionContent {
    /// Number of leaf items this content holds.
    pub fn item_count(&self) -> usize {
        match self {
            SectionContent::Header { contact, .. } => 1 + contact.len(),
            SectionContent::Summary(_) => 1,
            SectionContent::Education(items) => items.len(),
            SectionContent::Experience(entries) => entries.len(),
            SectionContent::Items(items) => items.len(),
        }
    }
}

/// Build the content of a section, or `None` when the section is absent.
pub fn build_section(resume: &CanonicalResume, kind: SectionKind) -> Option<SectionContent> {
    if !kind.is_present(resume) {
        return None;
    }

    let content = match kind {
        SectionKind::Header => SectionContent::Header {
            name: resume.name.clone(),
            contact: contact_tokens(&resume.contact_info),
        },
        SectionKind::Summary => SectionContent::Summary(resume.summary.clone()),
        SectionKind::Education => SectionContent::Education(
            resume
                .education
                .iter()
                .map(|line| EducationItem::from_line(line))
                .collect(),
        ),
        SectionKind::Experience => SectionContent::Experience(
            resume.experience.iter().filter_map(clean_entry).collect(),
        ),
        SectionKind::Skills => SectionContent::Items(resume.skills.clone()),
        SectionKind::Projects => SectionContent::Items(resume.projects.clone()),
        SectionKind::Certifications => SectionContent::Items(resume.certifications.clone()),
        SectionKind::Languages => SectionContent::Items(resume.languages.clone()),
        SectionKind::Tools => SectionContent::Items(resume.tools.clone()),
    };
    Some(content)
}

/// Strip bullet glyphs and drop blank bullets.
///
/// Returns `None` when nothing visible is left.
pub fn clean_entry(entry: &ExperienceEntry) -> Option<ExperienceEntry> {
    let bullets: Vec<String> = entry
        .bullets
        .iter()
        .map(|b| strip_bullet_glyph(b))
        .filter(|b| !b.is_empty())
        .collect();
    let title = entry.title.trim();
    if title.is_empty() && bullets.is_empty() {
        return None;
    }
    Some(ExperienceEntry::new(title, bullets))
}

/// Initials of each whitespace-separated word, upper-cased.
///
/// ```
/// use resumekit::render::degree_abbreviation;
///
/// assert_eq!(degree_abbreviation("Bachelor of Science"), "BOS");
/// ```
pub fn degree_abbreviation(degree: &str) -> String {
    degree
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Split contact text on commas, semicolons and newlines.
pub fn contact_tokens(contact: &str) -> Vec<String> {
    contact
        .split([',', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop a leading `•` that generated bullets sometimes carry.
pub fn strip_bullet_glyph(bullet: &str) -> String {
    let trimmed = bullet.trim();
    trimmed
        .strip_prefix('•')
        .map(str::trim_start)
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_only_entry_is_dropped() {
        let mut resume = CanonicalResume::with_name("Jane");
        resume.experience = vec![
            ExperienceEntry::new("", vec!["•".to_string(), " ".to_string()]),
            ExperienceEntry::new("Engineer", vec!["• Shipped".to_string(), "•".to_string()]),
        ];

        let Some(SectionContent::Experience(entries)) =
            build_section(&resume, SectionKind::Experience)
        else {
            panic!("expected experience content");
        };
        assert_eq!(entries, vec![ExperienceEntry::new("Engineer", vec!["Shipped".to_string()])]);
    }

    #[test]
    fn test_only_glyph_entries_means_no_experience() {
        let mut resume = CanonicalResume::with_name("Jane");
        resume.experience = vec![ExperienceEntry::new(" ", vec!["•".to_string()])];

        assert!(!SectionKind::Experience.is_present(&resume));
        assert!(build_section(&resume, SectionKind::Experience).is_none());
    }

    #[test]
    fn test_education_item_three_parts() {
        let item = EducationItem::from_line("Bachelor of Science — XYZ University — 2020");
        assert_eq!(item.degree_abbr.as_deref(), Some("BOS"));
        assert_eq!(item.institution.as_deref(), Some("XYZ University"));
        assert_eq!(item.year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_education_item_single_part() {
        let item = EducationItem::from_line("Self-taught");
        assert_eq!(item.line, "Self-taught");
        assert!(item.degree_abbr.is_none());
        assert!(item.institution.is_none());
    }

    #[test]
    fn test_education_item_two_parts() {
        let item = EducationItem::from_line("Master of Arts — Oxford");
        assert_eq!(item.degree_abbr.as_deref(), Some("MOA"));
        assert!(item.year.is_none());
    }

    #[test]
    fn test_contact_tokens() {
        assert_eq!(
            contact_tokens("jane@example.com; 555-0100,\nlinkedin.com/in/jane, "),
            vec!["jane@example.com", "555-0100", "linkedin.com/in/jane"]
        );
        assert!(contact_tokens(" ,; ").is_empty());
    }

    #[test]
    fn test_strip_bullet_glyph() {
        assert_eq!(strip_bullet_glyph("• Led team"), "Led team");
        assert_eq!(strip_bullet_glyph("Led team"), "Led team");
    }

    #[test]
    fn test_absent_section_has_no_content() {
        let resume = CanonicalResume::with_name("Jane");
        assert!(build_section(&resume, SectionKind::Skills).is_none());
        assert!(build_section(&resume, SectionKind::Header).is_some());
    }

    #[test]
    fn test_experience_bullets_are_cleaned() {
        let mut resume = CanonicalResume::with_name("Jane");
        resume.experience.push(ExperienceEntry::new(
            "Engineer @ Acme",
            vec!["• Shipped v2".to_string(), "•".to_string()],
        ));
        match build_section(&resume, SectionKind::Experience) {
            Some(SectionContent::Experience(entries)) => {
                assert_eq!(entries[0].bullets, vec!["Shipped v2"]);
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }
}
