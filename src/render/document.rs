//! The rendered document tree.
//!
//! Both renderers produce a [`RenderedDocument`]: a typed description of
//! what to draw, independent of any output format. Serializers in this
//! module's siblings turn it into HTML, plain text or JSON.

use serde::{Deserialize, Serialize};

use super::content::EducationItem;
use super::sections::{Placement, SectionKind};
use crate::detect::ShapeKind;
use crate::template::{BulletGlyph, Capabilities, HeadingFill, HeadingRule, TemplateId, TemplateStyle};

/// Target medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Screen,
    Print,
}

/// Font sizes for one medium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScale {
    pub name: f32,
    pub heading: f32,
    pub role: f32,
    pub body: f32,
    pub pill: f32,
}

impl TypeScale {
    /// Fixed print sizes in points.
    pub const PRINT: TypeScale = TypeScale {
        name: 18.0,
        heading: 12.0,
        role: 11.0,
        body: 10.0,
        pill: 9.0,
    };

    /// Screen sizes in pixels below the desktop breakpoint.
    pub const MOBILE: TypeScale = TypeScale {
        name: 24.0,
        heading: 16.0,
        role: 14.0,
        body: 12.0,
        pill: 12.0,
    };

    /// Screen sizes in pixels at and above the desktop breakpoint.
    pub const DESKTOP: TypeScale = TypeScale {
        name: 30.0,
        heading: 18.0,
        role: 16.0,
        body: 14.0,
        pill: 14.0,
    };
}

/// A fixed-size page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub padding_pt: f32,
    pub scale: TypeScale,
}

impl PageGeometry {
    /// ISO A4 (210 × 297 mm).
    pub const fn a4() -> Self {
        Self {
            width_pt: 595.0,
            height_pt: 842.0,
            padding_pt: 28.0,
            scale: TypeScale::PRINT,
        }
    }

    /// US Letter (8.5 × 11 in).
    pub const fn letter() -> Self {
        Self {
            width_pt: 612.0,
            height_pt: 792.0,
            padding_pt: 28.0,
            scale: TypeScale::PRINT,
        }
    }

    /// Width in millimetres.
    pub fn width_mm(&self) -> f32 {
        self.width_pt * 25.4 / 72.0
    }
}

/// Responsive sizes for the fluid screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveScale {
    pub mobile: TypeScale,
    pub desktop: TypeScale,
    /// Viewport width in pixels where the desktop scale applies
    pub breakpoint_px: u32,
}

impl Default for ResponsiveScale {
    fn default() -> Self {
        Self {
            mobile: TypeScale::MOBILE,
            desktop: TypeScale::DESKTOP,
            breakpoint_px: 768,
        }
    }
}

/// Document geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Fluid(ResponsiveScale),
    Page(PageGeometry),
}

/// Visible state shown when there is nothing to render yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub title: String,
    pub message: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            title: "Your professional resume".to_string(),
            message: "Your beautifully formatted resume will appear here once generated."
                .to_string(),
        }
    }
}

/// Visible state shown for input the preview cannot display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorState {
    pub title: String,
    pub message: String,
    pub shape: ShapeKind,
}

impl ErrorState {
    /// Create the unsupported-format state for a shape.
    pub fn unsupported(shape: ShapeKind) -> Self {
        Self {
            title: "Unable to display resume".to_string(),
            message: "The resume data is in an unexpected format.".to_string(),
            shape,
        }
    }
}

/// A section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub level: u8,
    /// Colored dot before the text
    pub dot: bool,
    /// Rule drawn under the heading, if any
    pub rule: Option<HeadingRule>,
}

impl Heading {
    /// Create a heading with no decoration.
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
            dot: false,
            rule: None,
        }
    }

    /// Set the dot flag.
    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    /// Set the rule.
    pub fn with_rule(mut self, rule: HeadingRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// Inline run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
    Code(String),
    Strikethrough(String),
    Link { text: String, url: String },
    LineBreak,
}

impl Inline {
    /// Visible text of this run.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(s)
            | Inline::Strong(s)
            | Inline::Emphasis(s)
            | Inline::Code(s)
            | Inline::Strikethrough(s) => s,
            Inline::Link { text, .. } => text,
            Inline::LineBreak => "\n",
        }
    }
}

/// Concatenate the visible text of inline runs.
pub fn inline_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}

/// Color family for a row of pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillTone {
    /// Primary color on accent background
    Primary,
    /// Text color on a neutral background
    Neutral,
}

/// How an education entry is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationDisplay {
    /// Degree initials, institution and year
    Abbreviated,
    /// The whole summary line
    FullLine,
}

/// Typed visual block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Colored band drawn above the printed header
    HeaderBar { color: String, height_pt: f32 },
    /// Document title; the text is already in display case
    Title { text: String, fill: HeadingFill },
    /// Heading inside a markdown body
    Heading(Heading),
    ContactLine { tokens: Vec<String> },
    Paragraph { inlines: Vec<Inline> },
    Pills { items: Vec<String>, tone: PillTone },
    BulletList { glyph: BulletGlyph, items: Vec<Vec<Inline>> },
    /// One experience role
    Entry {
        title: String,
        /// Show the colored marker before the role title
        marker: bool,
        glyph: BulletGlyph,
        bullets: Vec<String>,
    },
    Education { items: Vec<EducationItem>, display: EducationDisplay },
    /// Project cards
    Cards { items: Vec<String> },
    CodeBlock { text: String },
    Rule,
}

impl Block {
    /// Number of leaf items in this block.
    pub fn item_count(&self) -> usize {
        match self {
            Block::ContactLine { tokens } => tokens.len(),
            Block::Pills { items, .. } | Block::Cards { items } => items.len(),
            Block::BulletList { items, .. } => items.len(),
            Block::Entry { bullets, .. } => 1 + bullets.len(),
            Block::Education { items, .. } => items.len(),
            Block::Title { .. } | Block::Heading(_) | Block::Paragraph { .. } => 1,
            Block::CodeBlock { .. } => 1,
            Block::HeaderBar { .. } | Block::Rule => 0,
        }
    }

    /// Visible text lines of this block, in reading order.
    pub fn text_lines(&self) -> Vec<String> {
        match self {
            Block::HeaderBar { .. } | Block::Rule => Vec::new(),
            Block::Title { text, .. } => vec![text.clone()],
            Block::Heading(heading) => vec![heading.text.clone()],
            Block::ContactLine { tokens } => vec![tokens.join(" | ")],
            Block::Paragraph { inlines } => vec![inline_text(inlines)],
            Block::Pills { items, .. } => vec![items.join(", ")],
            Block::BulletList { glyph, items } => items
                .iter()
                .map(|item| format!("{} {}", glyph.as_char(), inline_text(item)))
                .collect(),
            Block::Entry {
                title,
                glyph,
                bullets,
                ..
            } => std::iter::once(title.clone())
                .filter(|t| !t.is_empty())
                .chain(bullets.iter().map(|b| format!("  {} {}", glyph.as_char(), b)))
                .collect(),
            Block::Education { items, display } => items
                .iter()
                .map(|item| match (display, &item.degree_abbr) {
                    (EducationDisplay::Abbreviated, Some(abbr)) => {
                        let mut parts = vec![abbr.as_str()];
                        parts.extend(item.institution.as_deref());
                        parts.extend(item.year.as_deref());
                        parts.join(" • ")
                    }
                    _ => item.line.clone(),
                })
                .collect(),
            Block::Cards { items } => items.clone(),
            Block::CodeBlock { text } => text.lines().map(str::to_string).collect(),
        }
    }
}

/// One slot of a layout list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Whether the resume has content for this slot
    pub present: bool,
    pub placement: Placement,
    pub heading: Option<Heading>,
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create an absent slot.
    pub fn absent(kind: SectionKind, placement: Placement) -> Self {
        Self {
            kind,
            present: false,
            placement,
            heading: None,
            blocks: Vec::new(),
        }
    }
}

/// Body of a rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum DocumentBody {
    Empty(Placeholder),
    Sections(Vec<Section>),
    Markdown(Vec<Block>),
    Unsupported(ErrorState),
}

/// A fully laid-out resume for one medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub mode: RenderMode,
    /// Template the styling came from; `None` for a caller-supplied style
    pub template: Option<TemplateId>,
    pub style: TemplateStyle,
    pub capabilities: Capabilities,
    pub geometry: Geometry,
    /// Document title, used for the HTML `<title>`
    pub title: String,
    pub body: DocumentBody,
}

impl RenderedDocument {
    /// Section slots, or an empty slice for non-section bodies.
    pub fn sections(&self) -> &[Section] {
        match &self.body {
            DocumentBody::Sections(sections) => sections,
            _ => &[],
        }
    }

    /// Get the slot for a section kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections().iter().find(|s| s.kind == kind)
    }

    /// Kinds of the present sections, in layout order.
    pub fn present_kinds(&self) -> Vec<SectionKind> {
        self.sections()
            .iter()
            .filter(|s| s.present)
            .map(|s| s.kind)
            .collect()
    }

    /// Check if this is the empty-state placeholder.
    pub fn is_empty_state(&self) -> bool {
        matches!(self.body, DocumentBody::Empty(_))
    }

    /// Check if this is the unsupported-format state.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.body, DocumentBody::Unsupported(_))
    }
}
