//! Print/export renderer.
//!
//! Lays a canonical resume out on a fixed page: a full-width header band
//! (name, contact line, summary) over two columns. Template decorations
//! other than colors and the header bar are not applied in print.

use super::content::{build_section, SectionContent};
use super::document::{
    Block, DocumentBody, EducationDisplay, Geometry, Heading, Inline, PageGeometry, PillTone,
    RenderMode, RenderedDocument, Section,
};
use super::options::RenderOptions;
use super::sections::{SectionKind, PRINT_LAYOUT};
use crate::error::Result;
use crate::model::CanonicalResume;
use crate::template::{BulletGlyph, Capabilities, HeaderStyle, HeadingFill, HeadingRule, TemplateId, TemplateStyle};

/// Height of the colored bar above the header.
pub const HEADER_BAR_HEIGHT_PT: f32 = 8.0;

/// Renders a canonical resume for print.
#[derive(Debug, Clone, Default)]
pub struct PrintRenderer {
    options: RenderOptions,
}

impl PrintRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a resume.
    ///
    /// Fails only when a caller-supplied style is invalid.
    pub fn render(&self, resume: &CanonicalResume) -> Result<RenderedDocument> {
        let (style, template) = self.options.resolve_style()?;
        layout(resume, style, template, self.options.page_size.geometry())
    }
}

fn layout(
    resume: &CanonicalResume,
    style: &TemplateStyle,
    template: Option<TemplateId>,
    page: PageGeometry,
) -> Result<RenderedDocument> {
    if let Err(e) = style.validate() {
        log::warn!("Refusing to render with invalid style: {}", e);
        return Err(e);
    }

    let sections: Vec<Section> = PRINT_LAYOUT
        .iter()
        .map(|slot| match build_section(resume, slot.kind) {
            Some(content) => Section {
                kind: slot.kind,
                present: true,
                placement: slot.placement,
                heading: slot
                    .kind
                    .print_heading()
                    .map(|text| Heading::new(text, 2).with_rule(HeadingRule::Solid)),
                blocks: print_blocks(slot.kind, content, style),
            },
            None => Section::absent(slot.kind, slot.placement),
        })
        .collect();

    log::debug!(
        "Laid out print document for '{}' with {} present sections",
        resume.name,
        sections.iter().filter(|s| s.present).count()
    );

    Ok(RenderedDocument {
        mode: RenderMode::Print,
        template,
        style: style.clone(),
        capabilities: Capabilities::print(),
        geometry: Geometry::Page(page),
        title: format!("{}-Resume", resume.name),
        body: DocumentBody::Sections(sections),
    })
}

fn print_blocks(kind: SectionKind, content: SectionContent, style: &TemplateStyle) -> Vec<Block> {
    let glyph = BulletGlyph::Dot;
    match content {
        SectionContent::Header { name, contact } => {
            let mut blocks = Vec::new();
            if style.header_style.has_header_bar() {
                blocks.push(Block::HeaderBar {
                    color: style.primary_color.to_string(),
                    height_pt: HEADER_BAR_HEIGHT_PT,
                });
            }
            if !name.is_empty() {
                blocks.push(Block::Title {
                    text: name,
                    fill: HeadingFill::Text,
                });
            }
            if !contact.is_empty() {
                blocks.push(Block::ContactLine { tokens: contact });
            }
            if style.header_style == HeaderStyle::Minimal {
                blocks.push(Block::Rule);
            }
            blocks
        }
        SectionContent::Summary(text) => vec![Block::Paragraph {
            inlines: vec![Inline::Text(text)],
        }],
        SectionContent::Education(items) => vec![Block::Education {
            items,
            display: EducationDisplay::FullLine,
        }],
        SectionContent::Experience(entries) => entries
            .into_iter()
            .map(|entry| Block::Entry {
                title: entry.title,
                marker: false,
                glyph,
                bullets: entry.bullets,
            })
            .collect(),
        SectionContent::Items(items) => match kind {
            SectionKind::Projects | SectionKind::Certifications => vec![Block::BulletList {
                glyph,
                items: items.into_iter().map(|s| vec![Inline::Text(s)]).collect(),
            }],
            _ => vec![Block::Pills {
                items,
                tone: PillTone::Neutral,
            }],
        },
    }
}

/// Render a resume for export with an explicit style.
///
/// The style is validated first; an invalid style is an error.
pub fn render_for_export(resume: &CanonicalResume, style: &TemplateStyle) -> Result<RenderedDocument> {
    let template = TemplateId::ALL.into_iter().find(|id| id.style() == style);
    layout(resume, style, template, PageGeometry::a4())
}

/// Render a resume for export with a built-in template.
///
/// Unknown ids fall back to the default template.
pub fn render_for_export_with_template(resume: &CanonicalResume, template_id: &str) -> Result<RenderedDocument> {
    let options = RenderOptions::new().with_template_id(template_id);
    PrintRenderer::new(options).render(resume)
}
