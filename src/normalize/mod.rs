//! Resume normalization.
//!
//! Turns a [`RawResume`] of any shape into a [`CanonicalResume`]. The
//! conversion is pure: the same input always yields the same output, and
//! normalizing an already-canonical resume is a no-op.
//!
//! # Example
//!
//! ```
//! use resumekit::normalize::normalize_json;
//!
//! let resume = normalize_json(r#"{
//!     "name": "Jane Doe",
//!     "skills": "Rust, TypeScript",
//!     "experienceBullets": [{"role": "Engineer", "company": "Acme", "bullets": ["Shipped v2"]}]
//! }"#)?;
//!
//! assert_eq!(resume.skills, vec!["Rust", "TypeScript"]);
//! assert_eq!(resume.experience[0].title, "Engineer @ Acme");
//! # Ok::<(), resumekit::Error>(())
//! ```

mod coerce;

pub use coerce::{
    summary_line, to_experience, to_ordered_string_list, to_summary_lines, PART_SEPARATOR,
    ROLE_SEPARATOR,
};

use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{CanonicalResume, RawResume, TextField, PLACEHOLDER_NAME};

/// Options for normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Normalize every output string to Unicode NFC
    pub unicode_nfc: bool,
}

impl NormalizeOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_nfc(mut self, enabled: bool) -> Self {
        self.unicode_nfc = enabled;
        self
    }
}

/// Normalize a raw resume with default options.
pub fn normalize(raw: &RawResume) -> CanonicalResume {
    normalize_with_options(raw, &NormalizeOptions::default())
}

/// Normalize a raw resume.
pub fn normalize_with_options(raw: &RawResume, options: &NormalizeOptions) -> CanonicalResume {
    let name = text(&raw.name);
    let mut resume = CanonicalResume {
        name: if name.is_empty() {
            PLACEHOLDER_NAME.to_string()
        } else {
            name
        },
        contact_info: text(&raw.contact_info),
        summary: text(&raw.summary),
        skills: to_ordered_string_list(&raw.skills),
        certifications: to_ordered_string_list(&raw.certifications),
        languages: to_ordered_string_list(&raw.languages),
        tools: to_ordered_string_list(&raw.tools),
        education: to_summary_lines(&raw.education),
        projects: to_summary_lines(&raw.projects),
        experience: raw
            .experience_sources()
            .into_iter()
            .map(to_experience)
            .find(|entries| !entries.is_empty())
            .unwrap_or_default(),
    };

    if options.unicode_nfc {
        apply_nfc(&mut resume);
    }

    log::debug!(
        "Normalized resume for '{}': {} skills, {} roles, {} education, {} projects",
        resume.name,
        resume.skills.len(),
        resume.experience.len(),
        resume.education.len(),
        resume.projects.len()
    );

    resume
}

/// Normalize a raw resume held as a JSON value.
///
/// Values that are not objects produce a resume with only the placeholder
/// name.
pub fn normalize_value(value: &Value) -> CanonicalResume {
    normalize(&RawResume::from_value(value))
}

/// Parse and normalize a JSON string.
///
/// Only malformed JSON is an error; any well-formed value normalizes.
pub fn normalize_json(json: &str) -> Result<CanonicalResume> {
    let value: Value = serde_json::from_str(json)?;
    Ok(normalize_value(&value))
}

fn text(field: &TextField) -> String {
    field.as_str().map(str::trim).unwrap_or_default().to_string()
}

fn apply_nfc(resume: &mut CanonicalResume) {
    fn nfc(s: &mut String) {
        *s = s.nfc().collect();
    }

    nfc(&mut resume.name);
    nfc(&mut resume.contact_info);
    nfc(&mut resume.summary);
    for list in [
        &mut resume.skills,
        &mut resume.certifications,
        &mut resume.languages,
        &mut resume.tools,
        &mut resume.education,
        &mut resume.projects,
    ] {
        list.iter_mut().for_each(nfc);
    }
    for entry in &mut resume.experience {
        nfc(&mut entry.title);
        entry.bullets.iter_mut().for_each(nfc);
    }
}
