//! Rendering options and configuration.

use super::document::PageGeometry;
use crate::error::Result;
use crate::template::{TemplateId, TemplateStyle};

/// Options for rendering a resume.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Template to render with
    pub template: TemplateId,

    /// Caller-supplied style that replaces the template's colors
    pub style: Option<TemplateStyle>,

    /// Page size for print output
    pub page_size: PageSize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template.
    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = template;
        self
    }

    /// Set the template by id, falling back to the default for unknown ids.
    pub fn with_template_id(mut self, id: &str) -> Self {
        self.template = TemplateId::resolve(id);
        self
    }

    /// Override the template's style.
    pub fn with_style(mut self, style: TemplateStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the print page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// The style in effect: the override if set, else the template's.
    pub fn effective_style(&self) -> &TemplateStyle {
        self.style.as_ref().unwrap_or_else(|| self.template.style())
    }

    /// Validate the style in effect and find the template it came from.
    ///
    /// A caller-supplied style maps back to a built-in only on an exact
    /// match.
    pub fn resolve_style(&self) -> Result<(&TemplateStyle, Option<TemplateId>)> {
        let Some(style) = &self.style else {
            return Ok((self.template.style(), Some(self.template)));
        };
        if let Err(e) = style.validate() {
            log::warn!("Refusing to render with invalid style: {}", e);
            return Err(e);
        }
        let template = TemplateId::ALL.into_iter().find(|id| id.style() == style);
        Ok((style, template))
    }
}

/// Print page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Parse a page size name ("a4", "letter").
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            other => Err(format!("Unknown page size: {}", other)),
        }
    }

    /// Page geometry for this size.
    pub fn geometry(self) -> PageGeometry {
        match self {
            PageSize::A4 => PageGeometry::a4(),
            PageSize::Letter => PageGeometry::letter(),
        }
    }
}
