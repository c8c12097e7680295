//! # resumekit
//!
//! Resume normalization and multi-template rendering.
//!
//! This library takes semi-structured resume records (as produced by an AI
//! generation service or a user upload), coerces them into a canonical
//! model, and renders that model deterministically for screen preview and
//! print export in one of five built-in templates.
//!
//! ## Quick Start
//!
//! ```
//! use resumekit::{normalize_json, render};
//!
//! fn main() -> resumekit::Result<()> {
//!     let resume = normalize_json(r#"{"name": "Jane Doe", "skills": "Rust, Go"}"#)?;
//!
//!     let doc = render::render_for_export_with_template(&resume, "modern")?;
//!     let html = render::to_html(&doc, &render::HtmlOptions::default());
//!     assert!(html.contains("Jane Doe"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total normalization**: any JSON shape yields a canonical resume
//! - **Two layouts**: fluid screen preview and fixed A4/Letter print pages
//! - **Content parity**: both layouts draw from one section-content builder
//! - **Multiple output formats**: HTML, plain text, JSON
//! - **Export contracts**: request bodies for the PDF and DOCX services

pub mod detect;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use detect::{detect_shape, PreviewInput, ShapeKind};
pub use error::{Error, Result};
pub use export::{
    download_file_name, estimate_fits_one_page, filename_from_content_disposition,
    DocxExportRequest, ExportFormat, PdfExportRequest,
};
pub use model::{CanonicalResume, ExperienceEntry, RawResume, ResumeAnalysis};
pub use normalize::{normalize, normalize_json, normalize_value, NormalizeOptions};
pub use render::{
    render_for_export, render_preview, HtmlOptions, JsonFormat, PageSize, RenderOptions,
    RenderStats, RenderedDocument,
};
pub use template::{get_template, list_templates, TemplateId, TemplateStyle};

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Read a JSON file and classify it for preview.
///
/// # Example
///
/// ```no_run
/// use resumekit::{load_file, render_preview};
///
/// let input = load_file("resume.json")?;
/// let doc = render_preview(&input, "modern");
/// # Ok::<(), resumekit::Error>(())
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<PreviewInput> {
    let json = fs::read_to_string(path)?;
    PreviewInput::from_json_str(&json)
}

/// Read and normalize a resume JSON file.
///
/// Files that do not hold a JSON object are an error.
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<CanonicalResume> {
    let input = load_file(path)?;
    input.require_structured().cloned()
}

/// Render a JSON preview value to an HTML fragment.
///
/// # Example
///
/// ```
/// let html = resumekit::preview_html(r##""# Jane Doe""##, "creative")?;
/// assert!(html.contains("Jane Doe"));
/// # Ok::<(), resumekit::Error>(())
/// ```
pub fn preview_html(json: &str, template_id: &str) -> Result<String> {
    let input = PreviewInput::from_json_str(json)?;
    let doc = render_preview(&input, template_id);
    Ok(render::to_html(&doc, &HtmlOptions::default()))
}

/// Render a canonical resume to standalone print HTML.
pub fn export_html(resume: &CanonicalResume, template_id: &str) -> Result<String> {
    let doc = render::render_for_export_with_template(resume, template_id)?;
    Ok(render::to_html(&doc, &HtmlOptions::new().with_standalone(true)))
}

/// Builder for loading and rendering resumes.
///
/// # Example
///
/// ```
/// use resumekit::ResumeKit;
///
/// let html = ResumeKit::new()
///     .with_template("minimalist")
///     .standalone()
///     .load_json(r#"{"name": "Jane Doe", "summary": "Engineer."}"#)?
///     .to_export_html()?;
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// # Ok::<(), resumekit::Error>(())
/// ```
pub struct ResumeKit {
    normalize_options: NormalizeOptions,
    render_options: RenderOptions,
    html_options: HtmlOptions,
}

impl ResumeKit {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            normalize_options: NormalizeOptions::default(),
            render_options: RenderOptions::default(),
            html_options: HtmlOptions::default(),
        }
    }

    /// Set the template by id; unknown ids use the default template.
    pub fn with_template(mut self, id: &str) -> Self {
        self.render_options = self.render_options.with_template_id(id);
        self
    }

    /// Replace the template's colors with a caller-supplied style.
    pub fn with_style(mut self, style: TemplateStyle) -> Self {
        self.render_options = self.render_options.with_style(style);
        self
    }

    /// Set the print page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.render_options = self.render_options.with_page_size(size);
        self
    }

    /// Normalize strings to Unicode NFC.
    pub fn with_unicode_nfc(mut self) -> Self {
        self.normalize_options = self.normalize_options.with_unicode_nfc(true);
        self
    }

    /// Emit standalone HTML documents.
    pub fn standalone(mut self) -> Self {
        self.html_options = self.html_options.with_standalone(true);
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.html_options = self.html_options.with_class_prefix(prefix);
        self
    }

    /// Load a JSON value.
    pub fn load_value(self, value: &Value) -> ResumeKitResult {
        let input = match detect_shape(value) {
            ShapeKind::Structured => PreviewInput::Structured(normalize::normalize_with_options(
                &RawResume::from_value(value),
                &self.normalize_options,
            )),
            _ => PreviewInput::from_value(value),
        };
        ResumeKitResult {
            input,
            render_options: self.render_options,
            html_options: self.html_options,
        }
    }

    /// Parse and load JSON text.
    pub fn load_json(self, json: &str) -> Result<ResumeKitResult> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.load_value(&value))
    }

    /// Read and load a JSON file.
    pub fn load_file<P: AsRef<Path>>(self, path: P) -> Result<ResumeKitResult> {
        let json = fs::read_to_string(path)?;
        self.load_json(&json)
    }
}

impl Default for ResumeKit {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded resume ready to render.
pub struct ResumeKitResult {
    /// The classified input
    pub input: PreviewInput,
    render_options: RenderOptions,
    html_options: HtmlOptions,
}

impl ResumeKitResult {
    /// Get the normalized resume, if the input was structured.
    pub fn resume(&self) -> Option<&CanonicalResume> {
        self.input.require_structured().ok()
    }

    /// Render the screen preview.
    ///
    /// Fails only when a caller-supplied style is invalid.
    pub fn preview(&self) -> Result<RenderedDocument> {
        render::ScreenRenderer::new(self.render_options.clone()).render(&self.input)
    }

    /// Render the print document. Requires structured input.
    pub fn export(&self) -> Result<RenderedDocument> {
        let resume = self.input.require_structured()?;
        render::PrintRenderer::new(self.render_options.clone()).render(resume)
    }

    /// Screen preview as HTML.
    pub fn to_html(&self) -> Result<String> {
        Ok(render::to_html(&self.preview()?, &self.html_options))
    }

    /// Print document as HTML.
    pub fn to_export_html(&self) -> Result<String> {
        Ok(render::to_html(&self.export()?, &self.html_options))
    }

    /// Print document as plain text, or the preview for non-structured input.
    pub fn to_text(&self) -> Result<String> {
        Ok(render::to_text(&self.text_document()?))
    }

    /// Screen preview as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.preview()?, format)
    }

    /// Statistics of the print document, or of the preview for
    /// non-structured input.
    pub fn stats(&self) -> Result<RenderStats> {
        Ok(RenderStats::from_document(&self.text_document()?))
    }

    /// The print document, or the preview when the input is not a
    /// structured resume. Other errors propagate.
    fn text_document(&self) -> Result<RenderedDocument> {
        match self.export() {
            Err(Error::UnsupportedFormat(_)) => self.preview(),
            other => other,
        }
    }

    /// Build the PDF service request.
    pub fn pdf_request(&self) -> Result<PdfExportRequest> {
        let resume = self.input.require_structured()?;
        let doc = self.export()?;
        PdfExportRequest::from_document(&doc, resume, &self.html_options)
    }

    /// Build the DOCX service request.
    pub fn docx_request(&self) -> Result<DocxExportRequest> {
        let resume = self.input.require_structured()?;
        let doc = self.export()?;
        Ok(DocxExportRequest::new(resume.clone()).with_document(&doc))
    }
}
