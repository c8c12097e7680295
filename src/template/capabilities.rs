//! Per-template rendering capabilities.
//!
//! Renderers resolve a [`Capabilities`] value once per render and pass it
//! down, instead of comparing template ids inside every section.

use serde::{Deserialize, Serialize};

use super::TemplateId;

/// Glyph placed before list items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletGlyph {
    #[default]
    Dot,
    Check,
}

impl BulletGlyph {
    /// The glyph character.
    pub fn as_char(self) -> char {
        match self {
            BulletGlyph::Dot => '•',
            BulletGlyph::Check => '✓',
        }
    }
}

/// How the top-level title text is colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingFill {
    /// Primary-to-secondary gradient clipped to the text
    #[default]
    Gradient,
    /// Solid primary color
    Primary,
    /// Solid text color
    Text,
}

/// Letter case applied to the top-level title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleCase {
    #[default]
    AsIs,
    Uppercase,
}

/// Rule drawn under section headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingRule {
    #[default]
    Solid,
    /// Dashed accent-colored rule with primary-colored heading text
    Dashed,
}

/// Styling switches resolved from a template id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Colored dot before each section heading
    pub show_heading_dot: bool,
    pub bullet_glyph: BulletGlyph,
    pub heading_fill: HeadingFill,
    pub title_case: TitleCase,
    pub heading_rule: HeadingRule,
}

impl Capabilities {
    /// Resolve the capability table entry for a template.
    pub const fn for_template(id: TemplateId) -> Self {
        match id {
            TemplateId::Minimalist => Self {
                show_heading_dot: false,
                bullet_glyph: BulletGlyph::Dot,
                heading_fill: HeadingFill::Text,
                title_case: TitleCase::AsIs,
                heading_rule: HeadingRule::Solid,
            },
            TemplateId::Creative => Self {
                show_heading_dot: true,
                bullet_glyph: BulletGlyph::Check,
                heading_fill: HeadingFill::Gradient,
                title_case: TitleCase::AsIs,
                heading_rule: HeadingRule::Dashed,
            },
            TemplateId::Professional => Self {
                show_heading_dot: true,
                bullet_glyph: BulletGlyph::Dot,
                heading_fill: HeadingFill::Primary,
                title_case: TitleCase::Uppercase,
                heading_rule: HeadingRule::Solid,
            },
            TemplateId::Modern | TemplateId::International => Self {
                show_heading_dot: true,
                bullet_glyph: BulletGlyph::Dot,
                heading_fill: HeadingFill::Gradient,
                title_case: TitleCase::AsIs,
                heading_rule: HeadingRule::Solid,
            },
        }
    }

    /// Capabilities for the print layout, which has no template-specific
    /// decoration.
    pub const fn print() -> Self {
        Self {
            show_heading_dot: false,
            bullet_glyph: BulletGlyph::Dot,
            heading_fill: HeadingFill::Primary,
            title_case: TitleCase::AsIs,
            heading_rule: HeadingRule::Solid,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_template(TemplateId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimalist_has_no_dot_and_plain_fill() {
        let caps = Capabilities::for_template(TemplateId::Minimalist);
        assert!(!caps.show_heading_dot);
        assert_eq!(caps.heading_fill, HeadingFill::Text);
    }

    #[test]
    fn test_only_creative_uses_checkmarks() {
        for id in TemplateId::ALL {
            let glyph = Capabilities::for_template(id).bullet_glyph;
            if id == TemplateId::Creative {
                assert_eq!(glyph.as_char(), '✓');
            } else {
                assert_eq!(glyph.as_char(), '•');
            }
        }
    }

    #[test]
    fn test_gradient_never_on_minimalist() {
        for id in TemplateId::ALL {
            let fill = Capabilities::for_template(id).heading_fill;
            if id == TemplateId::Minimalist {
                assert_ne!(fill, HeadingFill::Gradient);
            }
        }
    }
}
