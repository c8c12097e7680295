//! Section kinds and their layout order.
//!
//! Both renderers walk an explicit, ordered list of section slots. The
//! screen list puts Education before Summary; downstream output
//! comparisons depend on that order, so it is fixed here rather than
//! derived.

use serde::{Deserialize, Serialize};

use super::content::clean_entry;
use crate::model::CanonicalResume;

/// A named, independently presentable block of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Education,
    Summary,
    Skills,
    Experience,
    Projects,
    Certifications,
    Languages,
    Tools,
}

impl SectionKind {
    /// Get the section's identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Education => "education",
            SectionKind::Summary => "summary",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
            SectionKind::Tools => "tools",
        }
    }

    /// Check whether the resume has content for this section.
    pub fn is_present(self, resume: &CanonicalResume) -> bool {
        match self {
            SectionKind::Header => !resume.name.is_empty() || !resume.contact_info.is_empty(),
            SectionKind::Education => !resume.education.is_empty(),
            SectionKind::Summary => !resume.summary.is_empty(),
            SectionKind::Skills => !resume.skills.is_empty(),
            SectionKind::Experience => resume.experience.iter().any(|e| clean_entry(e).is_some()),
            SectionKind::Projects => !resume.projects.is_empty(),
            SectionKind::Certifications => !resume.certifications.is_empty(),
            SectionKind::Languages => !resume.languages.is_empty(),
            SectionKind::Tools => !resume.tools.is_empty(),
        }
    }

    /// Heading text in the screen preview.
    pub fn screen_heading(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Education => Some("Education"),
            SectionKind::Summary => Some("Professional Summary"),
            SectionKind::Skills => Some("Technical Skills"),
            SectionKind::Experience => Some("Professional Experience"),
            SectionKind::Projects => Some("Key Projects"),
            SectionKind::Certifications => Some("Certifications"),
            SectionKind::Languages => Some("Languages"),
            SectionKind::Tools => Some("Tools"),
        }
    }

    /// Heading text in the printed document.
    ///
    /// The summary sits inside the header band and has no heading.
    pub fn print_heading(self) -> Option<&'static str> {
        match self {
            SectionKind::Header | SectionKind::Summary => None,
            SectionKind::Education => Some("Education"),
            SectionKind::Skills => Some("Skills"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::Certifications => Some("Certifications"),
            SectionKind::Languages => Some("Languages"),
            SectionKind::Tools => Some("Tools"),
        }
    }
}

/// Where a section is placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Single flowing column (screen)
    Flow,
    /// Header band spanning both print columns
    Header,
    /// Left print column
    ColumnA,
    /// Right print column
    ColumnB,
}

/// A section kind at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    pub kind: SectionKind,
    pub placement: Placement,
}

impl SectionSlot {
    const fn new(kind: SectionKind, placement: Placement) -> Self {
        Self { kind, placement }
    }
}

/// Screen preview order.
pub const SCREEN_SECTION_ORDER: [SectionKind; 9] = [
    SectionKind::Header,
    SectionKind::Education,
    SectionKind::Summary,
    SectionKind::Skills,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Certifications,
    SectionKind::Languages,
    SectionKind::Tools,
];

/// Print layout: header band, then the left column, then the right column.
pub const PRINT_LAYOUT: [SectionSlot; 9] = [
    SectionSlot::new(SectionKind::Header, Placement::Header),
    SectionSlot::new(SectionKind::Summary, Placement::Header),
    SectionSlot::new(SectionKind::Experience, Placement::ColumnA),
    SectionSlot::new(SectionKind::Projects, Placement::ColumnA),
    SectionSlot::new(SectionKind::Skills, Placement::ColumnB),
    SectionSlot::new(SectionKind::Education, Placement::ColumnB),
    SectionSlot::new(SectionKind::Certifications, Placement::ColumnB),
    SectionSlot::new(SectionKind::Languages, Placement::ColumnB),
    SectionSlot::new(SectionKind::Tools, Placement::ColumnB),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_education_precedes_summary_on_screen() {
        let education = SCREEN_SECTION_ORDER
            .iter()
            .position(|k| *k == SectionKind::Education);
        let summary = SCREEN_SECTION_ORDER
            .iter()
            .position(|k| *k == SectionKind::Summary);
        assert!(education < summary);
        assert_eq!(SCREEN_SECTION_ORDER[0], SectionKind::Header);
    }

    #[test]
    fn test_layouts_cover_the_same_kinds() {
        let screen: BTreeSet<_> = SCREEN_SECTION_ORDER.iter().copied().collect();
        let print: BTreeSet<_> = PRINT_LAYOUT.iter().map(|s| s.kind).collect();
        assert_eq!(screen, print);
        assert_eq!(screen.len(), 9);
    }

    #[test]
    fn test_print_columns() {
        let column = |placement| -> Vec<_> {
            PRINT_LAYOUT
                .iter()
                .filter(|s| s.placement == placement)
                .map(|s| s.kind)
                .collect()
        };
        assert_eq!(
            column(Placement::ColumnA),
            vec![SectionKind::Experience, SectionKind::Projects]
        );
        assert_eq!(
            column(Placement::ColumnB)[..4],
            [
                SectionKind::Skills,
                SectionKind::Education,
                SectionKind::Certifications,
                SectionKind::Languages
            ]
        );
    }

    #[test]
    fn test_header_presence() {
        let mut resume = CanonicalResume::with_name("");
        assert!(!SectionKind::Header.is_present(&resume));
        resume.contact_info = "jane@example.com".to_string();
        assert!(SectionKind::Header.is_present(&resume));
    }
}
