//! Rendering module: lays resumes out for screen and print, and serializes
//! the result to HTML, text or JSON.

mod content;
mod document;
mod html;
mod json;
mod markdown;
mod options;
mod print;
mod result;
mod screen;
mod sections;
mod text;
pub mod visitor;

pub use content::{
    build_section, clean_entry, contact_tokens, degree_abbreviation, strip_bullet_glyph, EducationItem,
    SectionContent,
};
pub use document::{
    inline_text, Block, DocumentBody, EducationDisplay, ErrorState, Geometry, Heading, Inline,
    PageGeometry, PillTone, Placeholder, RenderMode, RenderedDocument, ResponsiveScale, Section,
    TypeScale,
};
pub use html::{escape_html, to_html, HtmlOptions, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::markdown_blocks;
pub use options::{PageSize, RenderOptions};
pub use print::{
    render_for_export, render_for_export_with_template, PrintRenderer, HEADER_BAR_HEIGHT_PT,
};
pub use result::{RenderResult, RenderStats};
pub use screen::{render_preview, ScreenRenderer};
pub use sections::{Placement, SectionKind, SectionSlot, PRINT_LAYOUT, SCREEN_SECTION_ORDER};
pub use text::to_text;
pub use visitor::{
    CompositeVisitor, DefaultVisitor, SectionVisitor, SkipSectionsVisitor, VisitorAction,
};
