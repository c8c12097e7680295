//! Markdown preview bodies.
//!
//! Generated resumes sometimes arrive as markdown text instead of a
//! structured record. The text is parsed with `pulldown-cmark` and mapped
//! onto the same [`Block`] vocabulary the structured renderer uses, with
//! template decorations applied per heading level. GitHub tables and
//! strikethrough are recognized; each table row becomes one list item with
//! its cells separated by `" | "` and the header cells in bold.

use crate::template::{Capabilities, HeadingRule, TitleCase};

use super::document::{Block, Heading, Inline};

/// Apply the template's title case.
fn cased(text: String, case: TitleCase) -> String {
    match case {
        TitleCase::AsIs => text,
        TitleCase::Uppercase => text.to_uppercase(),
    }
}

/// Heading block for a markdown level 2 or deeper.
fn section_heading(text: String, level: u8, caps: &Capabilities) -> Block {
    let heading = Heading::new(text, level);
    let heading = match level {
        2 => heading
            .with_dot(caps.show_heading_dot)
            .with_rule(caps.heading_rule),
        3 => heading.with_dot(true),
        _ => heading,
    };
    Block::Heading(heading)
}

/// Parse markdown text into blocks.
#[cfg(feature = "markdown")]
pub fn markdown_blocks(text: &str, caps: &Capabilities) -> Vec<Block> {
    use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

    let mut blocks = Vec::new();
    let mut inlines: Vec<Inline> = Vec::new();
    let mut list_items: Vec<Vec<Inline>> = Vec::new();
    let mut strong = 0u32;
    let mut emphasis = 0u32;
    let mut strikethrough = 0u32;
    let mut table_rows: Vec<Vec<Inline>> = Vec::new();
    let mut cells_in_row = 0usize;
    let mut link: Option<(String, String)> = None;
    let mut code_block: Option<String> = None;
    let mut list_depth = 0u32;

    let push_text = |inlines: &mut Vec<Inline>,
                     link: &mut Option<(String, String)>,
                     (strong, emphasis, strikethrough): (u32, u32, u32),
                     text: &str| {
        if let Some((link_text, _)) = link.as_mut() {
            link_text.push_str(text);
        } else if strong > 0 {
            inlines.push(Inline::Strong(text.to_string()));
        } else if emphasis > 0 {
            inlines.push(Inline::Emphasis(text.to_string()));
        } else if strikethrough > 0 {
            inlines.push(Inline::Strikethrough(text.to_string()));
        } else {
            inlines.push(Inline::Text(text.to_string()));
        }
    };

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_block = Some(String::new()),
            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = code_block.take() {
                    blocks.push(Block::CodeBlock {
                        text: code.trim_end().to_string(),
                    });
                }
            }
            Event::Text(t) if code_block.is_some() => {
                if let Some(code) = code_block.as_mut() {
                    code.push_str(&t);
                }
            }
            Event::Start(Tag::Strong) => strong += 1,
            Event::End(TagEnd::Strong) => strong = strong.saturating_sub(1),
            Event::Start(Tag::Emphasis) => emphasis += 1,
            Event::End(TagEnd::Emphasis) => emphasis = emphasis.saturating_sub(1),
            Event::Start(Tag::Strikethrough) => strikethrough += 1,
            Event::End(TagEnd::Strikethrough) => {
                strikethrough = strikethrough.saturating_sub(1)
            }
            Event::Start(Tag::TableHead) => strong += 1,
            Event::Start(Tag::TableCell) => {
                if cells_in_row > 0 {
                    inlines.push(Inline::Text(" | ".to_string()));
                }
                cells_in_row += 1;
            }
            Event::End(TagEnd::TableHead) => {
                strong = strong.saturating_sub(1);
                cells_in_row = 0;
                if !inlines.is_empty() {
                    table_rows.push(std::mem::take(&mut inlines));
                }
            }
            Event::End(TagEnd::TableRow) => {
                cells_in_row = 0;
                if !inlines.is_empty() {
                    table_rows.push(std::mem::take(&mut inlines));
                }
            }
            Event::End(TagEnd::Table) => {
                if !table_rows.is_empty() {
                    blocks.push(Block::BulletList {
                        glyph: caps.bullet_glyph,
                        items: std::mem::take(&mut table_rows),
                    });
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                link = Some((String::new(), dest_url.to_string()));
            }
            Event::End(TagEnd::Link) => {
                if let Some((text, url)) = link.take() {
                    inlines.push(Inline::Link { text, url });
                }
            }
            Event::Start(Tag::List(_)) => {
                // Nested lists flatten into the outer one.
                if list_depth > 0 && !inlines.is_empty() {
                    list_items.push(std::mem::take(&mut inlines));
                }
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 && !list_items.is_empty() {
                    blocks.push(Block::BulletList {
                        glyph: caps.bullet_glyph,
                        items: std::mem::take(&mut list_items),
                    });
                }
            }
            Event::End(TagEnd::Item) => {
                if !inlines.is_empty() {
                    list_items.push(std::mem::take(&mut inlines));
                }
            }
            Event::End(TagEnd::Heading(level)) => {
                let text: String = std::mem::take(&mut inlines)
                    .iter()
                    .map(Inline::text)
                    .collect::<String>()
                    .trim()
                    .to_string();
                let block = match level {
                    HeadingLevel::H1 => Block::Title {
                        text: cased(text, caps.title_case),
                        fill: caps.heading_fill,
                    },
                    HeadingLevel::H2 => section_heading(text, 2, caps),
                    HeadingLevel::H3 => section_heading(text, 3, caps),
                    HeadingLevel::H4 => section_heading(text, 4, caps),
                    HeadingLevel::H5 => section_heading(text, 5, caps),
                    HeadingLevel::H6 => section_heading(text, 6, caps),
                };
                blocks.push(block);
            }
            Event::End(TagEnd::Paragraph) => {
                // Paragraphs inside list items stay with the item.
                if list_depth == 0 && !inlines.is_empty() {
                    blocks.push(Block::Paragraph {
                        inlines: std::mem::take(&mut inlines),
                    });
                }
            }
            Event::Text(t) => push_text(
                &mut inlines,
                &mut link,
                (strong, emphasis, strikethrough),
                &t,
            ),
            Event::Code(c) => {
                if let Some((link_text, _)) = link.as_mut() {
                    link_text.push_str(&c);
                } else {
                    inlines.push(Inline::Code(c.to_string()));
                }
            }
            Event::SoftBreak => push_text(
                &mut inlines,
                &mut link,
                (strong, emphasis, strikethrough),
                " ",
            ),
            Event::HardBreak => inlines.push(Inline::LineBreak),
            Event::Rule => blocks.push(Block::Rule),
            _ => {}
        }
    }

    if !inlines.is_empty() {
        blocks.push(Block::Paragraph { inlines });
    }

    log::debug!("Parsed markdown preview into {} blocks", blocks.len());
    blocks
}

/// Fallback when markdown support is compiled out: ATX headings, `-`/`*`
/// list items and paragraphs, with no inline formatting.
#[cfg(not(feature = "markdown"))]
pub fn markdown_blocks(text: &str, caps: &Capabilities) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list_items: Vec<Vec<Inline>> = Vec::new();

    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>, items: &mut Vec<Vec<Inline>>, glyph: crate::template::BulletGlyph) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph {
                inlines: vec![Inline::Text(paragraph.join(" "))],
            });
            paragraph.clear();
        }
        if !items.is_empty() {
            blocks.push(Block::BulletList {
                glyph,
                items: std::mem::take(items),
            });
        }
    }

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut list_items, caps.bullet_glyph);
        } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            list_items.push(vec![Inline::Text(rest.trim().to_string())]);
        } else if line.starts_with('#') {
            flush(&mut blocks, &mut paragraph, &mut list_items, caps.bullet_glyph);
            let level = line.chars().take_while(|c| *c == '#').count().min(6) as u8;
            let text = line[level as usize..].trim().to_string();
            blocks.push(if level == 1 {
                Block::Title {
                    text: cased(text, caps.title_case),
                    fill: caps.heading_fill,
                }
            } else {
                section_heading(text, level, caps)
            });
        } else if line == "---" {
            flush(&mut blocks, &mut paragraph, &mut list_items, caps.bullet_glyph);
            blocks.push(Block::Rule);
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut blocks, &mut paragraph, &mut list_items, caps.bullet_glyph);
    blocks
}

/// Whether a heading rule should be drawn dashed in the primary color.
pub fn is_accented(heading: &Heading) -> bool {
    heading.rule == Some(HeadingRule::Dashed)
}
