//! Visitor pattern for customizing HTML output.
//!
//! A visitor sees each present section and each block before the HTML
//! renderer writes it, and may skip it or substitute its own markup.
//!
//! # Example
//!
//! ```
//! use resumekit::render::visitor::{SectionVisitor, VisitorAction};
//! use resumekit::render::{Section, SectionKind};
//!
//! struct HideContact;
//!
//! impl SectionVisitor for HideContact {
//!     fn visit_section(&mut self, section: &Section) -> VisitorAction {
//!         if section.kind == SectionKind::Header {
//!             VisitorAction::Replace("<header>Contact on request</header>".to_string())
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use super::document::{Block, RenderedDocument, Section};
use super::sections::SectionKind;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom markup, written as-is.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting rendered document elements.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait SectionVisitor: Send + Sync {
    /// Called before rendering a present section.
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        let _ = section;
        VisitorAction::Continue
    }

    /// Called before rendering a block.
    ///
    /// `kind` is the enclosing section, or `None` inside a markdown body.
    fn visit_block(&mut self, kind: Option<SectionKind>, block: &Block) -> VisitorAction {
        let _ = (kind, block);
        VisitorAction::Continue
    }

    /// Called before anything is written.
    fn on_document_start(&mut self, doc: &RenderedDocument) {
        let _ = doc;
    }

    /// Called after everything is written.
    fn on_document_end(&mut self, doc: &RenderedDocument) {
        let _ = doc;
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl SectionVisitor for DefaultVisitor {}

/// Visitor that omits the given section kinds.
#[derive(Debug, Clone, Default)]
pub struct SkipSectionsVisitor {
    kinds: Vec<SectionKind>,
}

impl SkipSectionsVisitor {
    /// Create a visitor that skips the given kinds.
    pub fn new(kinds: impl IntoIterator<Item = SectionKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }
}

impl SectionVisitor for SkipSectionsVisitor {
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        if self.kinds.contains(&section.kind) {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn SectionVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: SectionVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionVisitor for CompositeVisitor {
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_section(section);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn visit_block(&mut self, kind: Option<SectionKind>, block: &Block) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_block(kind, block);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn on_document_start(&mut self, doc: &RenderedDocument) {
        for visitor in &mut self.visitors {
            visitor.on_document_start(doc);
        }
    }

    fn on_document_end(&mut self, doc: &RenderedDocument) {
        for visitor in &mut self.visitors {
            visitor.on_document_end(doc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sections::Placement;

    #[test]
    fn test_visitor_action_default() {
        assert_eq!(VisitorAction::default(), VisitorAction::Continue);
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.should_skip());
        assert_eq!(
            VisitorAction::Replace("hello".into()).replacement(),
            Some("hello")
        );
    }

    #[test]
    fn test_skip_sections_visitor() {
        let mut visitor = SkipSectionsVisitor::new([SectionKind::Tools]);
        let tools = Section::absent(SectionKind::Tools, Placement::Flow);
        let skills = Section::absent(SectionKind::Skills, Placement::Flow);
        assert!(visitor.visit_section(&tools).should_skip());
        assert!(!visitor.visit_section(&skills).should_skip());
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(DefaultVisitor)
            .with_visitor(SkipSectionsVisitor::new([SectionKind::Summary]));

        let summary = Section::absent(SectionKind::Summary, Placement::Flow);
        assert!(composite.visit_section(&summary).should_skip());
        assert_eq!(
            composite.visit_block(None, &Block::Rule),
            VisitorAction::Continue
        );
    }
}
