//! Export service contracts.
//!
//! PDF and DOCX files are produced by an external service. This module
//! builds the request bodies that service expects and derives the download
//! filename from its response.

mod disposition;

pub use disposition::filename_from_content_disposition;

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{CanonicalResume, PLACEHOLDER_NAME};
use crate::render::{to_html, to_text, HtmlOptions, RenderedDocument};

/// Maximum number of content sections for a one-page layout.
pub const ONE_PAGE_MAX_SECTIONS: usize = 4;

/// Estimated characters below which content fits on one page.
pub const ONE_PAGE_MAX_CHARS: usize = 2000;

/// Characters counted per skill in the one-page estimate.
pub const SKILL_CHAR_WEIGHT: usize = 10;

/// Downloadable file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// MIME type of the downloaded file.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn whitespace_run() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Replace whitespace runs in a name with underscores.
///
/// A blank name uses the placeholder name.
pub fn file_stem(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { PLACEHOLDER_NAME } else { name };
    whitespace_run().replace_all(name, "_").into_owned()
}

/// Default download filename, e.g. `Jane_Doe_Resume.pdf`.
pub fn download_file_name(name: &str, format: ExportFormat) -> String {
    format!("{}_Resume.{}", file_stem(name), format.extension())
}

/// Estimate whether a resume fits on a single printed page.
///
/// Counts the non-empty content sections (summary, experience, skills,
/// education, projects, certifications, languages) and an approximate
/// character total where each skill counts as a fixed width.
pub fn estimate_fits_one_page(resume: &CanonicalResume) -> bool {
    fn chars(s: &str) -> usize {
        s.chars().count()
    }
    fn sum(list: &[String]) -> usize {
        list.iter().map(|s| chars(s)).sum()
    }

    let sections = [
        !resume.summary.is_empty(),
        !resume.experience.is_empty(),
        !resume.skills.is_empty(),
        !resume.education.is_empty(),
        !resume.projects.is_empty(),
        !resume.certifications.is_empty(),
        !resume.languages.is_empty(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    let experience: usize = resume
        .experience
        .iter()
        .map(|e| chars(&e.title) + sum(&e.bullets))
        .sum();

    let total = chars(&resume.summary)
        + experience
        + resume.skills.len() * SKILL_CHAR_WEIGHT
        + sum(&resume.education)
        + sum(&resume.projects)
        + sum(&resume.certifications)
        + sum(&resume.languages);

    log::debug!(
        "One-page estimate: {} sections, {} characters",
        sections,
        total
    );
    sections <= ONE_PAGE_MAX_SECTIONS && total < ONE_PAGE_MAX_CHARS
}

/// Resume fields the PDF service reads besides the HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResumeMeta {
    pub name: String,
}

/// Request body for the PDF export service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportRequest {
    /// Print-mode HTML of the resume
    pub html: String,
    /// Filename stem, without extension
    pub file_name: String,
    pub resume_data: ExportResumeMeta,
    /// Ask the service to scale the content onto one page
    pub force_one_page: bool,
}

impl PdfExportRequest {
    /// Build a request from a print-mode document.
    ///
    /// Screen documents are rejected: the service lays out fixed pages.
    pub fn from_document(
        doc: &RenderedDocument,
        resume: &CanonicalResume,
        options: &HtmlOptions,
    ) -> Result<Self> {
        if doc.mode != crate::render::RenderMode::Print {
            return Err(Error::Render(
                "PDF export needs a print-mode document".to_string(),
            ));
        }
        Ok(Self {
            html: to_html(doc, options),
            file_name: file_stem(&resume.name),
            resume_data: ExportResumeMeta {
                name: resume.name.clone(),
            },
            force_one_page: estimate_fits_one_page(resume),
        })
    }

    /// Serialize the request body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Request body for the DOCX export service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocxExportRequest {
    pub resume_data: CanonicalResume,
    /// Plain-text rendering of the same content as the PDF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl DocxExportRequest {
    /// Build a request carrying only the canonical resume.
    pub fn new(resume: CanonicalResume) -> Self {
        Self {
            resume_data: resume,
            plain_text: None,
        }
    }

    /// Attach the plain-text rendering of a document.
    pub fn with_document(mut self, doc: &RenderedDocument) -> Self {
        self.plain_text = Some(to_text(doc));
        self
    }

    /// Serialize the request body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
