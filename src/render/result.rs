//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use super::document::{Block, DocumentBody, RenderedDocument};

/// Result of serializing a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The serialized content (HTML, text, JSON)
    pub content: String,

    /// Document title
    pub title: String,

    /// Statistics of the rendered document
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, doc: &RenderedDocument) -> Self {
        Self {
            content,
            title: doc.title.clone(),
            stats: RenderStats::from_document(doc),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected from a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of present sections
    pub section_count: u32,

    /// Number of blocks across all sections
    pub block_count: u32,

    /// Number of leaf items (pills, bullets, entries, lines)
    pub item_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &RenderedDocument) -> Self {
        let mut stats = Self::new();
        match &doc.body {
            DocumentBody::Sections(sections) => {
                for section in sections.iter().filter(|s| s.present) {
                    stats.section_count += 1;
                    if let Some(heading) = &section.heading {
                        stats.count_text(&heading.text);
                    }
                    section.blocks.iter().for_each(|b| stats.add_block(b));
                }
            }
            DocumentBody::Markdown(blocks) => blocks.iter().for_each(|b| stats.add_block(b)),
            DocumentBody::Empty(_) | DocumentBody::Unsupported(_) => {}
        }
        stats
    }

    /// Count one block and its text.
    pub fn add_block(&mut self, block: &Block) {
        self.block_count += 1;
        self.item_count += block.item_count() as u32;
        for line in block.text_lines() {
            self.count_text(&line);
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.block_count += other.block_count;
        self.item_count += other.item_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::PreviewInput;
    use crate::model::CanonicalResume;
    use crate::render::render_preview;

    #[test]
    fn test_render_stats_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats {
            section_count: 2,
            item_count: 5,
            ..Default::default()
        };
        let stats2 = RenderStats {
            section_count: 1,
            word_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.section_count, 3);
        assert_eq!(stats1.item_count, 5);
        assert_eq!(stats1.word_count, 4);
    }

    #[test]
    fn test_stats_from_document() {
        let mut resume = CanonicalResume::with_name("Jane Doe");
        resume.skills = vec!["Rust".to_string(), "Go".to_string()];
        let doc = render_preview(&PreviewInput::Structured(resume), "modern");

        let stats = RenderStats::from_document(&doc);
        assert_eq!(stats.section_count, 2);
        // title + two pills
        assert_eq!(stats.item_count, 3);
        // "Jane Doe", "Technical Skills", "Rust, Go"
        assert_eq!(stats.word_count, 6);
    }

    #[test]
    fn test_empty_state_has_no_stats() {
        let doc = render_preview(&PreviewInput::Missing, "modern");
        assert_eq!(RenderStats::from_document(&doc), RenderStats::default());
    }
}
