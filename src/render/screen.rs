//! Screen preview renderer.

use super::content::{build_section, SectionContent};
use super::document::{
    Block, DocumentBody, EducationDisplay, ErrorState, Geometry, Heading, Inline, PillTone,
    Placeholder, RenderMode, RenderedDocument, ResponsiveScale, Section,
};
use super::markdown::markdown_blocks;
use super::options::RenderOptions;
use super::sections::{Placement, SectionKind, SCREEN_SECTION_ORDER};
use crate::detect::PreviewInput;
use crate::error::Result;
use crate::model::CanonicalResume;
use crate::template::{BulletGlyph, Capabilities, HeadingFill, HeadingRule, TemplateId, TemplateStyle};

/// Renders preview input for on-screen display.
#[derive(Debug, Clone, Default)]
pub struct ScreenRenderer {
    options: RenderOptions,
}

impl ScreenRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render preview input.
    ///
    /// Missing input yields the empty-state placeholder and unsupported
    /// input a visible error state. Fails only when a caller-supplied style
    /// is invalid.
    pub fn render(&self, input: &PreviewInput) -> Result<RenderedDocument> {
        let (style, template) = self.options.resolve_style()?;
        Ok(self.layout(input, style, template))
    }

    fn layout(
        &self,
        input: &PreviewInput,
        style: &TemplateStyle,
        template: Option<TemplateId>,
    ) -> RenderedDocument {
        let caps = Capabilities::for_template(self.options.template);

        let (title, body) = match input {
            PreviewInput::Missing => ("Resume".to_string(), DocumentBody::Empty(Placeholder::default())),
            PreviewInput::Markdown(text) => (
                "Resume".to_string(),
                DocumentBody::Markdown(markdown_blocks(text, &caps)),
            ),
            PreviewInput::Structured(resume) => (
                resume.name.clone(),
                DocumentBody::Sections(self.structured_sections(resume, &caps)),
            ),
            PreviewInput::Unsupported(shape) => (
                "Resume".to_string(),
                DocumentBody::Unsupported(ErrorState::unsupported(*shape)),
            ),
        };

        RenderedDocument {
            mode: RenderMode::Screen,
            template,
            style: style.clone(),
            capabilities: caps,
            geometry: Geometry::Fluid(ResponsiveScale::default()),
            title,
            body,
        }
    }

    fn structured_sections(&self, resume: &CanonicalResume, caps: &Capabilities) -> Vec<Section> {
        SCREEN_SECTION_ORDER
            .iter()
            .map(|&kind| match build_section(resume, kind) {
                Some(content) => Section {
                    kind,
                    present: true,
                    placement: Placement::Flow,
                    heading: kind.screen_heading().map(|text| {
                        Heading::new(text, 2)
                            .with_dot(caps.show_heading_dot)
                            .with_rule(HeadingRule::Solid)
                    }),
                    blocks: screen_blocks(kind, content, caps),
                },
                None => Section::absent(kind, Placement::Flow),
            })
            .collect()
    }
}

fn screen_blocks(kind: SectionKind, content: SectionContent, caps: &Capabilities) -> Vec<Block> {
    match content {
        SectionContent::Header { name, contact } => {
            let mut blocks = Vec::new();
            if !name.is_empty() {
                blocks.push(Block::Title {
                    text: name,
                    fill: HeadingFill::Primary,
                });
            }
            if !contact.is_empty() {
                blocks.push(Block::ContactLine { tokens: contact });
            }
            blocks
        }
        SectionContent::Summary(text) => vec![Block::Paragraph {
            inlines: vec![Inline::Text(text)],
        }],
        SectionContent::Education(items) => vec![Block::Education {
            items,
            display: EducationDisplay::Abbreviated,
        }],
        SectionContent::Experience(entries) => entries
            .into_iter()
            .map(|entry| Block::Entry {
                title: entry.title,
                marker: caps.show_heading_dot,
                glyph: caps.bullet_glyph,
                bullets: entry.bullets,
            })
            .collect(),
        SectionContent::Items(items) => match kind {
            SectionKind::Skills => vec![Block::Pills {
                items,
                tone: PillTone::Primary,
            }],
            SectionKind::Projects => vec![Block::Cards { items }],
            SectionKind::Certifications => vec![Block::BulletList {
                glyph: BulletGlyph::Check,
                items: items.into_iter().map(|s| vec![Inline::Text(s)]).collect(),
            }],
            _ => vec![Block::Pills {
                items,
                tone: PillTone::Neutral,
            }],
        },
    }
}

/// Render preview input with a template id.
///
/// Unknown ids fall back to the default template.
pub fn render_preview(input: &PreviewInput, template_id: &str) -> RenderedDocument {
    let template = TemplateId::resolve(template_id);
    ScreenRenderer::new(RenderOptions::new().with_template(template)).layout(
        input,
        template.style(),
        Some(template),
    )
}
