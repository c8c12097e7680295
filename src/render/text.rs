//! Plain text rendering.
//!
//! Used for terminal output and as the body of the DOCX export request.

use super::document::{DocumentBody, RenderedDocument};

/// Convert a document to plain text.
///
/// Present sections are separated by a blank line; headings are
/// upper-cased.
pub fn to_text(doc: &RenderedDocument) -> String {
    let mut chunks: Vec<String> = Vec::new();

    match &doc.body {
        DocumentBody::Empty(placeholder) => {
            chunks.push(format!("{}\n{}", placeholder.title, placeholder.message));
        }
        DocumentBody::Unsupported(state) => {
            chunks.push(format!("{}\n{}", state.title, state.message));
        }
        DocumentBody::Markdown(blocks) => {
            for block in blocks {
                let lines = block.text_lines();
                if !lines.is_empty() {
                    chunks.push(lines.join("\n"));
                }
            }
        }
        DocumentBody::Sections(sections) => {
            for section in sections.iter().filter(|s| s.present) {
                let mut lines = Vec::new();
                if let Some(heading) = &section.heading {
                    lines.push(heading.text.to_uppercase());
                }
                for block in &section.blocks {
                    lines.extend(block.text_lines());
                }
                if !lines.is_empty() {
                    chunks.push(lines.join("\n"));
                }
            }
        }
    }

    chunks.join("\n\n").trim().to_string()
}
