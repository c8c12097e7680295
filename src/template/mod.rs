//! Template registry.
//!
//! A fixed catalogue of named templates. Each template pairs an immutable
//! [`TemplateStyle`] (colors, header treatment) with a [`Capabilities`]
//! entry that controls decorations such as heading dots and bullet glyphs.

mod capabilities;
mod registry;

pub use capabilities::{BulletGlyph, Capabilities, HeadingFill, HeadingRule, TitleCase};
pub use registry::{get_template, list_templates, HeaderStyle, Template, TemplateId, TemplateStyle};
