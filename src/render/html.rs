//! HTML serialization.
//!
//! The print-mode HTML is the payload sent to the PDF export service, so
//! output is byte-stable: the same document and options always produce the
//! same string. Colors are exposed as CSS custom properties on the root
//! element (`--primary-color`, `--secondary-color`, `--bg-color`,
//! `--text-color`, `--accent-color`).

use std::fmt::Write;

use super::document::{
    Block, DocumentBody, EducationDisplay, Geometry, Heading, Inline, PageGeometry, PillTone,
    RenderMode, RenderedDocument, ResponsiveScale, Section,
};
use super::markdown::is_accented;
use super::result::RenderResult;
use super::sections::{Placement, SectionKind};
use super::visitor::{SectionVisitor, VisitorAction};
use crate::template::HeadingFill;

/// Options for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Emit a full `<!DOCTYPE html>` document instead of a fragment
    pub standalone: bool,

    /// Prefix for every CSS class
    pub class_prefix: String,

    /// Emit the `<style>` block
    pub include_styles: bool,
}

impl HtmlOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a standalone document.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Enable or disable the `<style>` block.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            class_prefix: "rk".to_string(),
            include_styles: true,
        }
    }
}

/// HTML renderer with optional visitor hooks.
pub struct HtmlRenderer {
    options: HtmlOptions,
    visitor: Option<Box<dyn SectionVisitor>>,
}

impl HtmlRenderer {
    /// Create a new renderer.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            visitor: None,
        }
    }

    /// Attach a visitor.
    pub fn with_visitor<V: SectionVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render a document to HTML.
    pub fn render(&mut self, doc: &RenderedDocument) -> String {
        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_start(doc);
        }

        let mut out = String::new();
        let p = self.options.class_prefix.clone();

        if self.options.standalone {
            out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
            out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
            let _ = writeln!(out, "<title>{}</title>", escape_html(&doc.title));
            if self.options.include_styles {
                self.write_styles(&mut out, doc);
            }
            out.push_str("</head>\n<body>\n");
        } else if self.options.include_styles {
            self.write_styles(&mut out, doc);
        }

        let mode = match doc.mode {
            RenderMode::Screen => "screen",
            RenderMode::Print => "print",
        };
        let mut classes = format!("{p} {p}-{mode}");
        if let Some(template) = doc.template {
            let _ = write!(classes, " {p}-template-{}", template.as_str());
        }
        let _ = writeln!(
            out,
            "<div class=\"{}\" style=\"{}\">",
            classes,
            escape_html(&root_style(doc))
        );

        match &doc.body {
            DocumentBody::Empty(placeholder) => {
                let _ = writeln!(out, "<div class=\"{p}-empty\">");
                let _ = writeln!(out, "<h3 class=\"{p}-empty-title\">{}</h3>", escape_html(&placeholder.title));
                let _ = writeln!(out, "<p class=\"{p}-empty-message\">{}</p>", escape_html(&placeholder.message));
                out.push_str("</div>\n");
            }
            DocumentBody::Unsupported(state) => {
                let _ = writeln!(out, "<div class=\"{p}-error\" data-shape=\"{}\">", state.shape);
                let _ = writeln!(out, "<div class=\"{p}-error-title\">{}</div>", escape_html(&state.title));
                let _ = writeln!(out, "<div class=\"{p}-error-message\">{}</div>", escape_html(&state.message));
                out.push_str("</div>\n");
            }
            DocumentBody::Markdown(blocks) => {
                let _ = writeln!(out, "<article class=\"{p}-markdown\">");
                for block in blocks {
                    self.write_block(&mut out, None, block);
                }
                out.push_str("</article>\n");
            }
            DocumentBody::Sections(sections) => match doc.mode {
                RenderMode::Screen => {
                    for section in sections {
                        self.write_section(&mut out, section);
                    }
                }
                RenderMode::Print => self.write_print_layout(&mut out, sections),
            },
        }

        out.push_str("</div>\n");
        if self.options.standalone {
            out.push_str("</body>\n</html>\n");
        }

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_end(doc);
        }
        out
    }

    /// Render a document and collect statistics.
    pub fn render_with_stats(&mut self, doc: &RenderedDocument) -> RenderResult {
        let content = self.render(doc);
        RenderResult::new(content, doc)
    }

    fn write_styles(&self, out: &mut String, doc: &RenderedDocument) {
        let p = &self.options.class_prefix;
        out.push_str("<style>\n");
        out.push_str(&base_css(p));
        match doc.geometry {
            Geometry::Fluid(scale) => out.push_str(&screen_css(p, &scale)),
            Geometry::Page(page) => out.push_str(&print_css(p, &page)),
        }
        out.push_str("</style>\n");
    }

    fn write_print_layout(&mut self, out: &mut String, sections: &[Section]) {
        let p = self.options.class_prefix.clone();
        let in_place = |placement: Placement| sections.iter().filter(move |s| s.placement == placement);

        let _ = writeln!(out, "<div class=\"{p}-band\">");
        for section in in_place(Placement::Header) {
            self.write_section(out, section);
        }
        out.push_str("</div>\n");

        let _ = writeln!(out, "<div class=\"{p}-columns\">");
        for (placement, column) in [(Placement::ColumnA, "a"), (Placement::ColumnB, "b")] {
            let _ = writeln!(out, "<div class=\"{p}-column {p}-column-{column}\">");
            for section in in_place(placement) {
                self.write_section(out, section);
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }

    fn write_section(&mut self, out: &mut String, section: &Section) {
        if !section.present {
            return;
        }
        if let Some(visitor) = self.visitor.as_mut() {
            match visitor.visit_section(section) {
                VisitorAction::Continue => {}
                VisitorAction::Skip => return,
                VisitorAction::Replace(markup) => {
                    out.push_str(&markup);
                    out.push('\n');
                    return;
                }
            }
        }

        let p = self.options.class_prefix.clone();
        let tag = if section.kind == SectionKind::Header {
            "header"
        } else {
            "section"
        };
        let _ = writeln!(
            out,
            "<{tag} class=\"{p}-section {p}-{}\">",
            section.kind.as_str()
        );
        if let Some(heading) = &section.heading {
            self.write_heading(out, heading);
        }
        for block in &section.blocks {
            self.write_block(out, Some(section.kind), block);
        }
        let _ = writeln!(out, "</{tag}>");
    }

    fn write_heading(&self, out: &mut String, heading: &Heading) {
        let p = &self.options.class_prefix;
        let level = heading.level.clamp(2, 6);
        let mut classes = format!("{p}-heading {p}-heading-{level}");
        if heading.rule.is_some() {
            let _ = write!(classes, " {p}-heading-ruled");
        }
        if is_accented(heading) {
            let _ = write!(classes, " {p}-heading-dashed");
        }
        let _ = write!(out, "<h{level} class=\"{classes}\">");
        if heading.dot {
            let _ = write!(out, "<span class=\"{p}-dot\"></span>");
        }
        let _ = writeln!(out, "<span>{}</span></h{level}>", escape_html(&heading.text));
    }

    fn write_block(&mut self, out: &mut String, kind: Option<SectionKind>, block: &Block) {
        if let Some(visitor) = self.visitor.as_mut() {
            match visitor.visit_block(kind, block) {
                VisitorAction::Continue => {}
                VisitorAction::Skip => return,
                VisitorAction::Replace(markup) => {
                    out.push_str(&markup);
                    out.push('\n');
                    return;
                }
            }
        }

        let p = &self.options.class_prefix;
        match block {
            Block::HeaderBar { color, height_pt } => {
                let _ = writeln!(
                    out,
                    "<div class=\"{p}-header-bar\" style=\"background-color:{};height:{}pt\"></div>",
                    escape_html(color),
                    height_pt
                );
            }
            Block::Title { text, fill } => {
                let fill = match fill {
                    HeadingFill::Gradient => "gradient",
                    HeadingFill::Primary => "primary",
                    HeadingFill::Text => "text",
                };
                let _ = writeln!(
                    out,
                    "<h1 class=\"{p}-title {p}-fill-{fill}\">{}</h1>",
                    escape_html(text)
                );
            }
            Block::Heading(heading) => self.write_heading(out, heading),
            Block::ContactLine { tokens } => {
                let _ = write!(out, "<div class=\"{p}-contact\">");
                for token in tokens {
                    let _ = write!(out, "<span class=\"{p}-contact-item\">{}</span>", escape_html(token));
                }
                out.push_str("</div>\n");
            }
            Block::Paragraph { inlines } => {
                let _ = writeln!(out, "<p class=\"{p}-paragraph\">{}</p>", inline_html(inlines));
            }
            Block::Pills { items, tone } => {
                let tone = match tone {
                    PillTone::Primary => "primary",
                    PillTone::Neutral => "neutral",
                };
                let _ = write!(out, "<ul class=\"{p}-pills {p}-pills-{tone}\">");
                for item in items {
                    let _ = write!(out, "<li class=\"{p}-pill\">{}</li>", escape_html(item));
                }
                out.push_str("</ul>\n");
            }
            Block::BulletList { glyph, items } => {
                let _ = writeln!(out, "<ul class=\"{p}-list\">");
                for item in items {
                    let _ = writeln!(
                        out,
                        "<li><span class=\"{p}-glyph\">{}</span><span>{}</span></li>",
                        glyph.as_char(),
                        inline_html(item)
                    );
                }
                out.push_str("</ul>\n");
            }
            Block::Entry {
                title,
                marker,
                glyph,
                bullets,
            } => {
                let _ = writeln!(out, "<div class=\"{p}-entry\">");
                if !title.is_empty() {
                    let _ = write!(out, "<h3 class=\"{p}-entry-title\">");
                    if *marker {
                        let _ = write!(out, "<span class=\"{p}-dot\"></span>");
                    }
                    let _ = writeln!(out, "{}</h3>", escape_html(title));
                }
                if !bullets.is_empty() {
                    let _ = writeln!(out, "<ul class=\"{p}-list\">");
                    for bullet in bullets {
                        let _ = writeln!(
                            out,
                            "<li><span class=\"{p}-glyph\">{}</span><span>{}</span></li>",
                            glyph.as_char(),
                            escape_html(bullet)
                        );
                    }
                    out.push_str("</ul>\n");
                }
                out.push_str("</div>\n");
            }
            Block::Education { items, display } => {
                let _ = writeln!(out, "<ul class=\"{p}-education\">");
                for item in items {
                    let _ = write!(out, "<li class=\"{p}-education-item\">");
                    match (display, &item.degree_abbr) {
                        (EducationDisplay::Abbreviated, Some(abbr)) => {
                            let _ = write!(out, "<span class=\"{p}-degree\">{}</span>", escape_html(abbr));
                            if let Some(institution) = &item.institution {
                                let _ = write!(
                                    out,
                                    "<span class=\"{p}-institution\">{}</span>",
                                    escape_html(institution)
                                );
                            }
                            if let Some(year) = &item.year {
                                let _ = write!(out, "<span class=\"{p}-year\">{}</span>", escape_html(year));
                            }
                        }
                        _ => out.push_str(&escape_html(&item.line)),
                    }
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }
            Block::Cards { items } => {
                let _ = writeln!(out, "<div class=\"{p}-cards\">");
                for item in items {
                    let _ = writeln!(out, "<div class=\"{p}-card\">{}</div>", escape_html(item));
                }
                out.push_str("</div>\n");
            }
            Block::CodeBlock { text } => {
                let _ = writeln!(out, "<pre class=\"{p}-code\"><code>{}</code></pre>", escape_html(text));
            }
            Block::Rule => {
                let _ = writeln!(out, "<hr class=\"{p}-rule\">");
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(HtmlOptions::default())
    }
}

/// Convert a document to HTML.
pub fn to_html(doc: &RenderedDocument, options: &HtmlOptions) -> String {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link targets that may be written into an `href`.
fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    !(lower.starts_with("javascript:") || lower.starts_with("vbscript:") || lower.starts_with("data:"))
}

fn inline_html(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(s) => out.push_str(&escape_html(s)),
            Inline::Strong(s) => {
                let _ = write!(out, "<strong>{}</strong>", escape_html(s));
            }
            Inline::Emphasis(s) => {
                let _ = write!(out, "<em>{}</em>", escape_html(s));
            }
            Inline::Code(s) => {
                let _ = write!(out, "<code>{}</code>", escape_html(s));
            }
            Inline::Strikethrough(s) => {
                let _ = write!(out, "<del>{}</del>", escape_html(s));
            }
            Inline::Link { text, url } if is_safe_url(url) => {
                let _ = write!(out, "<a href=\"{}\">{}</a>", escape_html(url), escape_html(text));
            }
            Inline::Link { text, .. } => out.push_str(&escape_html(text)),
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
    out
}

fn root_style(doc: &RenderedDocument) -> String {
    let style = &doc.style;
    let mut css = format!(
        "--primary-color:{};--secondary-color:{};--bg-color:{};--text-color:{};--accent-color:{};background-color:var(--bg-color)",
        style.primary_color, style.secondary_color, style.background_color, style.text_color, style.accent_color
    );
    match doc.geometry {
        Geometry::Fluid(_) => css.push_str(";width:100%;max-width:100%"),
        Geometry::Page(page) => {
            let _ = write!(
                css,
                ";width:{:.0}mm;min-height:{:.0}mm;padding:{}pt;box-sizing:border-box",
                page.width_mm(),
                page.height_pt * 25.4 / 72.0,
                page.padding_pt
            );
        }
    }
    css
}

fn base_css(p: &str) -> String {
    format!(
        "\
.{p} {{ color: var(--text-color); line-height: 1.5; }}
.{p} ul {{ list-style: none; margin: 0; padding: 0; }}
.{p}-fill-primary {{ color: var(--primary-color); }}
.{p}-fill-text {{ color: var(--text-color); }}
.{p}-fill-gradient {{ background: linear-gradient(90deg, var(--primary-color), var(--secondary-color)); -webkit-background-clip: text; background-clip: text; color: transparent; }}
.{p}-heading {{ display: flex; align-items: center; font-weight: 600; color: var(--text-color); }}
.{p}-heading-ruled {{ padding-bottom: 4px; border-bottom: 1px solid #e5e7eb; }}
.{p}-heading-dashed {{ color: var(--primary-color); border-bottom: 2px dashed var(--accent-color); }}
.{p}-dot {{ display: inline-block; width: 8px; height: 8px; border-radius: 9999px; margin-right: 8px; background-color: var(--primary-color); }}
.{p}-glyph {{ color: var(--primary-color); margin-right: 6px; }}
.{p}-pills {{ display: flex; flex-wrap: wrap; gap: 6px; }}
.{p}-pill {{ border-radius: 9999px; padding: 2px 8px; font-weight: 500; }}
.{p}-pills-primary .{p}-pill {{ background-color: var(--accent-color); color: var(--primary-color); }}
.{p}-pills-neutral .{p}-pill {{ background-color: #f3f4f6; color: var(--text-color); }}
.{p}-contact {{ display: flex; flex-wrap: wrap; justify-content: center; gap: 4px 8px; }}
.{p}-degree {{ font-weight: 600; color: var(--primary-color); margin-right: 6px; }}
.{p}-year {{ margin-left: 6px; opacity: 0.8; }}
.{p}-card {{ border: 1px solid #e5e7eb; border-radius: 8px; padding: 8px 12px; margin-bottom: 6px; }}
.{p}-error-title {{ color: #ef4444; }}
"
    )
}

fn screen_css(p: &str, scale: &ResponsiveScale) -> String {
    let m = scale.mobile;
    let d = scale.desktop;
    format!(
        "\
.{p}-screen {{ padding: 16px; border-radius: 12px; }}
.{p}-screen .{p}-header {{ text-align: center; margin-bottom: 16px; }}
.{p}-screen .{p}-section {{ margin-bottom: 16px; }}
.{p}-screen .{p}-title {{ font-size: {}px; font-weight: 700; margin: 0 0 6px; }}
.{p}-screen .{p}-heading {{ font-size: {}px; margin: 0 0 8px; }}
.{p}-screen .{p}-entry-title {{ font-size: {}px; font-weight: 500; margin: 0 0 4px; }}
.{p}-screen {{ font-size: {}px; }}
.{p}-screen .{p}-pill {{ font-size: {}px; }}
@media (min-width: {}px) {{
  .{p}-screen {{ padding: 24px; border-radius: 16px; font-size: {}px; }}
  .{p}-screen .{p}-section {{ margin-bottom: 24px; }}
  .{p}-screen .{p}-title {{ font-size: {}px; }}
  .{p}-screen .{p}-heading {{ font-size: {}px; }}
  .{p}-screen .{p}-entry-title {{ font-size: {}px; }}
  .{p}-screen .{p}-pill {{ font-size: {}px; }}
}}
",
        m.name,
        m.heading,
        m.role,
        m.body,
        m.pill,
        scale.breakpoint_px,
        d.body,
        d.name,
        d.heading,
        d.role,
        d.pill
    )
}

fn print_css(p: &str, page: &PageGeometry) -> String {
    let s = page.scale;
    format!(
        "\
@page {{ size: {}pt {}pt; margin: 0; }}
.{p}-print {{ font-family: Helvetica, Arial, sans-serif; font-size: {}pt; }}
.{p}-print .{p}-header-bar {{ margin: -{pad}pt -{pad}pt 12pt; }}
.{p}-print .{p}-band {{ margin-bottom: 12pt; }}
.{p}-print .{p}-columns {{ display: flex; gap: 16pt; }}
.{p}-print .{p}-column-a {{ flex: 3; }}
.{p}-print .{p}-column-b {{ flex: 2; }}
.{p}-print .{p}-section {{ margin-bottom: 10pt; }}
.{p}-print .{p}-title {{ font-size: {}pt; font-weight: 700; margin: 0 0 4pt; }}
.{p}-print .{p}-heading {{ font-size: {}pt; color: var(--primary-color); margin: 0 0 6pt; }}
.{p}-print .{p}-entry-title {{ font-size: {}pt; font-weight: 600; margin: 0 0 2pt; }}
.{p}-print .{p}-pill {{ font-size: {}pt; }}
.{p}-print .{p}-rule {{ border: 0; border-top: 0.5pt solid var(--accent-color); }}
",
        page.width_pt,
        page.height_pt,
        s.body,
        s.name,
        s.heading,
        s.role,
        s.pill,
        pad = page.padding_pt
    )
}
