//! Integration tests for the visitor pattern.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use resumekit::render::visitor::{
    CompositeVisitor, DefaultVisitor, SectionVisitor, SkipSectionsVisitor, VisitorAction,
};
use resumekit::render::{Block, HtmlOptions, HtmlRenderer, Section, SectionKind};
use resumekit::{normalize_value, render_for_export, render_preview, PreviewInput, TemplateId};
use serde_json::json;

fn sample_input() -> PreviewInput {
    PreviewInput::Structured(normalize_value(&json!({
        "name": "Jane Doe",
        "contactInfo": "jane@example.com",
        "summary": "Engineer.",
        "skills": ["Rust", "Go"],
        "tools": ["Git"],
        "experience": [{"role": "Engineer", "company": "Acme", "bullets": ["Shipped v2"]}]
    })))
}

/// Counts sections, blocks and document callbacks through shared counters.
#[derive(Clone, Default)]
struct CountingVisitor {
    sections: Arc<AtomicUsize>,
    blocks: Arc<AtomicUsize>,
    documents: Arc<AtomicUsize>,
}

impl SectionVisitor for CountingVisitor {
    fn visit_section(&mut self, _section: &Section) -> VisitorAction {
        self.sections.fetch_add(1, Ordering::SeqCst);
        VisitorAction::Continue
    }

    fn visit_block(&mut self, _kind: Option<SectionKind>, _block: &Block) -> VisitorAction {
        self.blocks.fetch_add(1, Ordering::SeqCst);
        VisitorAction::Continue
    }

    fn on_document_end(&mut self, _doc: &resumekit::RenderedDocument) {
        self.documents.fetch_add(1, Ordering::SeqCst);
    }
}

/// Replaces every skill pill list with a comma-separated paragraph.
struct InlineSkills;

impl SectionVisitor for InlineSkills {
    fn visit_block(&mut self, kind: Option<SectionKind>, block: &Block) -> VisitorAction {
        match (kind, block) {
            (Some(SectionKind::Skills), Block::Pills { items, .. }) => {
                VisitorAction::Replace(format!("<p>{}</p>", items.join(", ")))
            }
            _ => VisitorAction::Continue,
        }
    }
}

#[test]
fn test_default_visitor_changes_nothing() {
    let doc = render_preview(&sample_input(), "modern");
    let plain = HtmlRenderer::default().render(&doc);
    let visited = HtmlRenderer::default()
        .with_visitor(DefaultVisitor::new())
        .render(&doc);
    assert_eq!(plain, visited);
}

#[test]
fn test_counting_visitor_sees_present_sections() {
    let doc = render_preview(&sample_input(), "modern");
    let counter = CountingVisitor::default();

    HtmlRenderer::default()
        .with_visitor(counter.clone())
        .render(&doc);

    assert_eq!(
        counter.sections.load(Ordering::SeqCst),
        doc.present_kinds().len()
    );
    let total_blocks: usize = doc
        .sections()
        .iter()
        .filter(|s| s.present)
        .map(|s| s.blocks.len())
        .sum();
    assert_eq!(counter.blocks.load(Ordering::SeqCst), total_blocks);
    assert_eq!(counter.documents.load(Ordering::SeqCst), 1);
}

#[test]
fn test_skip_sections_in_print() {
    let resume = sample_input().require_structured().unwrap().clone();
    let doc = render_for_export(&resume, TemplateId::Professional.style()).unwrap();

    let html = HtmlRenderer::new(HtmlOptions::default())
        .with_visitor(SkipSectionsVisitor::new([SectionKind::Tools, SectionKind::Skills]))
        .render(&doc);

    assert!(!html.contains("rk-tools"));
    assert!(!html.contains("rk-skills"));
    assert!(html.contains("rk-experience"));
}

#[test]
fn test_replace_block() {
    let doc = render_preview(&sample_input(), "creative");
    let html = HtmlRenderer::default().with_visitor(InlineSkills).render(&doc);

    assert!(html.contains("<p>Rust, Go</p>"));
    assert!(!html.contains("rk-pills-primary\">"));
    // Tools pills are untouched
    assert!(html.contains("rk-pills-neutral\">"));
}

#[test]
fn test_composite_first_non_continue_wins() {
    let doc = render_preview(&sample_input(), "modern");
    let counter = CountingVisitor::default();

    let composite = CompositeVisitor::new()
        .with_visitor(SkipSectionsVisitor::new([SectionKind::Summary]))
        .with_visitor(counter.clone());
    assert!(!composite.is_empty());

    let html = HtmlRenderer::default().with_visitor(composite).render(&doc);

    assert!(!html.contains("rk-summary"));
    assert_eq!(
        counter.sections.load(Ordering::SeqCst),
        doc.present_kinds().len() - 1
    );
}

#[test]
fn test_render_with_stats() {
    let doc = render_preview(&sample_input(), "modern");
    let result = HtmlRenderer::default().render_with_stats(&doc);

    assert_eq!(result.title, "Jane Doe");
    assert_eq!(result.stats.section_count as usize, doc.present_kinds().len());
    assert!(result.content_len() > 0);
}
