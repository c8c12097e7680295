//! Built-in template catalogue.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Stable template identifiers.
///
/// These strings are persisted by clients, so they never change between
/// versions. Unknown ids resolve to [`TemplateId::Professional`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Professional,
    Modern,
    Minimalist,
    Creative,
    International,
}

impl TemplateId {
    /// All templates in catalogue order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Professional,
        TemplateId::Modern,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::International,
    ];

    /// Get the wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Professional => "professional",
            TemplateId::Modern => "modern",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Creative => "creative",
            TemplateId::International => "international",
        }
    }

    /// Parse an identifier, ignoring case and surrounding whitespace.
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(id))
    }

    /// Parse an identifier, falling back to the default template.
    pub fn resolve(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            log::debug!("Unknown template '{}', using {}", id, TemplateId::default());
            TemplateId::default()
        })
    }

    /// Get the catalogue entry.
    pub fn template(self) -> &'static Template {
        &TEMPLATES[self as usize]
    }

    /// Get the style descriptor.
    pub fn style(self) -> &'static TemplateStyle {
        &self.template().style
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the document header is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    Gradient,
    #[default]
    Solid,
    Minimal,
    Creative,
}

impl HeaderStyle {
    /// Parse a header style name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradient" => Some(HeaderStyle::Gradient),
            "solid" => Some(HeaderStyle::Solid),
            "minimal" => Some(HeaderStyle::Minimal),
            "creative" => Some(HeaderStyle::Creative),
            _ => None,
        }
    }

    /// Whether a colored bar is drawn above the printed header.
    pub fn has_header_bar(self) -> bool {
        self != HeaderStyle::Solid
    }
}

/// Colors and header treatment for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub primary_color: Cow<'static, str>,
    pub secondary_color: Cow<'static, str>,
    pub background_color: Cow<'static, str>,
    pub text_color: Cow<'static, str>,
    pub accent_color: Cow<'static, str>,
    pub header_style: HeaderStyle,
}

const COLOR_FIELDS: [&str; 5] = [
    "primaryColor",
    "secondaryColor",
    "backgroundColor",
    "textColor",
    "accentColor",
];

fn hex_color() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
    })
}

impl TemplateStyle {
    const fn builtin(
        primary: &'static str,
        secondary: &'static str,
        background: &'static str,
        text: &'static str,
        accent: &'static str,
        header_style: HeaderStyle,
    ) -> Self {
        Self {
            primary_color: Cow::Borrowed(primary),
            secondary_color: Cow::Borrowed(secondary),
            background_color: Cow::Borrowed(background),
            text_color: Cow::Borrowed(text),
            accent_color: Cow::Borrowed(accent),
            header_style,
        }
    }

    /// Colors in `COLOR_FIELDS` order.
    fn colors(&self) -> [&str; 5] {
        [
            &self.primary_color,
            &self.secondary_color,
            &self.background_color,
            &self.text_color,
            &self.accent_color,
        ]
    }

    /// Check that every color is a `#rgb` or `#rrggbb` hex value.
    pub fn validate(&self) -> Result<()> {
        for (field, color) in COLOR_FIELDS.iter().zip(self.colors()) {
            if !hex_color().is_match(color) {
                return Err(Error::InvalidStyle(format!(
                    "{} must be a hex color, got '{}'",
                    field, color
                )));
            }
        }
        Ok(())
    }

    /// Read a style descriptor supplied by an external collaborator.
    ///
    /// All five colors are required. `headerStyle` defaults to solid.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Read a style descriptor from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let color = |field: &str| -> Result<Cow<'static, str>> {
            value
                .get(field)
                .and_then(Value::as_str)
                .map(|s| Cow::Owned(s.trim().to_string()))
                .ok_or_else(|| Error::InvalidStyle(format!("{} is missing", field)))
        };

        let header_style = match value.get("headerStyle").and_then(Value::as_str) {
            Some(s) => HeaderStyle::parse(s)
                .ok_or_else(|| Error::InvalidStyle(format!("unknown headerStyle '{}'", s)))?,
            None => HeaderStyle::default(),
        };

        let style = Self {
            primary_color: color("primaryColor")?,
            secondary_color: color("secondaryColor")?,
            background_color: color("backgroundColor")?,
            text_color: color("textColor")?,
            accent_color: color("accentColor")?,
            header_style,
        };
        style.validate()?;
        Ok(style)
    }
}

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub style: TemplateStyle,
}

static TEMPLATES: [Template; 5] = [
    Template {
        id: TemplateId::Professional,
        display_name: "Professional",
        description: "Clean corporate layout for formal job applications",
        style: TemplateStyle::builtin(
            "#57534e",
            "#44403c",
            "#ffffff",
            "#374151",
            "#f5f5f4",
            HeaderStyle::Gradient,
        ),
    },
    Template {
        id: TemplateId::Modern,
        display_name: "Modern",
        description: "Contemporary design with creative elements",
        style: TemplateStyle::builtin(
            "#d97706",
            "#b45309",
            "#fffbeb",
            "#1f2937",
            "#fef3c7",
            HeaderStyle::Solid,
        ),
    },
    Template {
        id: TemplateId::Minimalist,
        display_name: "Minimalist",
        description: "Simple and clean layout with focus on content",
        style: TemplateStyle::builtin(
            "#000000",
            "#4b5563",
            "#ffffff",
            "#111827",
            "#f3f4f6",
            HeaderStyle::Minimal,
        ),
    },
    Template {
        id: TemplateId::Creative,
        display_name: "Creative",
        description: "Colorful design for creative industries",
        style: TemplateStyle::builtin(
            "#78350f",
            "#5a3807",
            "#fef7ed",
            "#4b5563",
            "#fed7aa",
            HeaderStyle::Creative,
        ),
    },
    Template {
        id: TemplateId::International,
        display_name: "International",
        description: "Designed for global job applications",
        style: TemplateStyle::builtin(
            "#44403c",
            "#292524",
            "#fafaf9",
            "#064e3b",
            "#e7e5e4",
            HeaderStyle::Gradient,
        ),
    },
];

/// Get a template's style, falling back to `professional` for unknown ids.
pub fn get_template(id: &str) -> &'static TemplateStyle {
    TemplateId::resolve(id).style()
}

/// List all templates in catalogue order.
pub fn list_templates() -> &'static [Template] {
    &TEMPLATES
}
