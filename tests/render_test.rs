//! Integration tests for the screen and print renderers.

use resumekit::render::{
    render_for_export, render_for_export_with_template, render_preview, to_html, to_text, Block,
    DocumentBody, Geometry, HtmlOptions, PrintRenderer, RenderMode, RenderOptions, SectionKind,
};
use resumekit::{normalize_value, CanonicalResume, PageSize, PreviewInput, TemplateId, TemplateStyle};
use serde_json::json;

fn full_resume() -> CanonicalResume {
    normalize_value(&json!({
        "name": "Jane Doe",
        "contactInfo": "jane@example.com; 555-0100",
        "summary": "Backend engineer with a taste for compilers.",
        "skills": ["Rust", "Go", "SQL"],
        "education": [{"degree": "Bachelor of Science", "institution": "XYZ University", "year": "2020"}],
        "experience": [
            {"role": "Engineer", "company": "Acme", "bullets": ["Shipped v2", "Cut p99 latency"]},
            {"role": "Intern", "company": "Initech", "bullets": []}
        ],
        "projects": ["resumekit — resume renderer"],
        "certifications": ["AWS Solutions Architect"],
        "languages": ["English", "Spanish"],
        "tools": ["Git", "Docker"]
    }))
}

fn sorted_kinds(mut kinds: Vec<SectionKind>) -> Vec<SectionKind> {
    kinds.sort_by_key(|k| k.as_str());
    kinds
}

#[test]
fn test_screen_and_print_show_the_same_sections() {
    let resume = full_resume();
    let input = PreviewInput::Structured(resume.clone());

    for id in TemplateId::ALL {
        let screen = render_preview(&input, id.as_str());
        let print = render_for_export_with_template(&resume, id.as_str()).unwrap();

        assert_eq!(
            sorted_kinds(screen.present_kinds()),
            sorted_kinds(print.present_kinds()),
            "section mismatch for {}",
            id.as_str()
        );

        for kind in screen.present_kinds() {
            let count = |doc: &resumekit::RenderedDocument| -> usize {
                doc.section(kind)
                    .map(|s| s.blocks.iter().map(Block::item_count).sum())
                    .unwrap_or(0)
            };
            if kind != SectionKind::Header {
                assert_eq!(count(&screen), count(&print), "{:?} items differ", kind);
            }
        }
    }
}

fn partial_resumes() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        (
            "skills and projects",
            json!({"name": "Jane", "skills": "Rust, Go", "projects": ["resumekit"]}),
        ),
        ("tools only", json!({"name": "Jane", "tools": ["Git"]})),
        (
            "bullets key only",
            json!({"name": "Jane", "experienceBullets": [{"title": "Engineer", "bullets": ["Shipped"]}]}),
        ),
        (
            "empty experience with bullets key",
            json!({"name": "Jane", "experience": [], "experienceBullets": ["Engineer @ Acme"]}),
        ),
        ("summary only", json!({"name": "Jane", "summary": "Builds compilers."})),
        (
            "certifications and languages",
            json!({"name": "Jane", "certifications": ["CKA"], "languages": "English, French"}),
        ),
        (
            "glyph-only experience",
            json!({"name": "Jane", "experience": [{"title": "", "bullets": ["•"]}], "tools": ["Vim"]}),
        ),
        (
            "blank education",
            json!({"name": "Jane", "education": [{}], "skills": ["SQL"]}),
        ),
    ]
}

#[test]
fn test_partial_resumes_keep_parity() {
    for (label, value) in partial_resumes() {
        let resume = normalize_value(&value);
        let input = PreviewInput::Structured(resume.clone());

        for id in TemplateId::ALL {
            let screen = render_preview(&input, id.as_str());
            let print = render_for_export_with_template(&resume, id.as_str()).unwrap();
            assert!(screen.present_kinds().contains(&SectionKind::Header));
            assert_eq!(
                sorted_kinds(screen.present_kinds()),
                sorted_kinds(print.present_kinds()),
                "{} differs for {}",
                label,
                id.as_str()
            );
        }
    }
}

#[test]
fn test_partial_resumes_render_deterministically() {
    let options = HtmlOptions::new().with_standalone(true);
    for (label, value) in partial_resumes() {
        let resume = normalize_value(&value);
        let input = PreviewInput::Structured(resume.clone());

        for id in TemplateId::ALL {
            let first = render_preview(&input, id.as_str());
            let second = render_preview(&input, id.as_str());
            assert_eq!(
                to_html(&first, &options),
                to_html(&second, &options),
                "screen html for {} ({})",
                label,
                id.as_str()
            );

            let first = render_for_export_with_template(&resume, id.as_str()).unwrap();
            let second = render_for_export_with_template(&resume, id.as_str()).unwrap();
            assert_eq!(
                to_html(&first, &options),
                to_html(&second, &options),
                "print html for {} ({})",
                label,
                id.as_str()
            );
        }
    }
}

#[test]
fn test_partial_resume_sections() {
    let kinds = |value: serde_json::Value| {
        let resume = normalize_value(&value);
        sorted_kinds(render_for_export_with_template(&resume, "modern").unwrap().present_kinds())
    };

    assert_eq!(
        kinds(json!({"name": "Jane", "tools": ["Git"]})),
        sorted_kinds(vec![SectionKind::Header, SectionKind::Tools])
    );
    assert_eq!(
        kinds(json!({"name": "Jane", "experience": [], "experienceBullets": ["Engineer"]})),
        sorted_kinds(vec![SectionKind::Header, SectionKind::Experience])
    );
    assert_eq!(
        kinds(json!({"name": "Jane", "experience": [{"title": "", "bullets": ["•"]}]})),
        vec![SectionKind::Header]
    );
}

#[test]
fn test_education_abbreviated_on_screen_full_in_print() {
    let resume = full_resume();
    let screen = render_preview(&PreviewInput::Structured(resume.clone()), "modern");
    let screen_html = to_html(&screen, &HtmlOptions::default());
    assert!(screen_html.contains("<span class=\"rk-degree\">BOS</span>"));
    assert!(screen_html.contains("<span class=\"rk-institution\">XYZ University</span>"));
    assert!(screen_html.contains("<span class=\"rk-year\">2020</span>"));

    let print = render_for_export_with_template(&resume, "modern").unwrap();
    let text = to_text(&print);
    assert!(text.contains("Bachelor of Science — XYZ University — 2020"));
}

#[test]
fn test_header_only_resume() {
    let resume = CanonicalResume::with_name("Jane Doe");
    let screen = render_preview(&PreviewInput::Structured(resume.clone()), "creative");
    assert_eq!(screen.present_kinds(), vec![SectionKind::Header]);
    assert!(!screen.is_empty_state());

    let print = render_for_export_with_template(&resume, "creative").unwrap();
    assert_eq!(print.present_kinds(), vec![SectionKind::Header]);
    assert_eq!(print.title, "Jane Doe-Resume");
    assert_eq!(to_text(&print), "Jane Doe");
}

#[test]
fn test_missing_and_unsupported_inputs() {
    let missing = render_preview(&PreviewInput::from_value(&json!(null)), "modern");
    assert!(missing.is_empty_state());
    let html = to_html(&missing, &HtmlOptions::default());
    assert!(html.contains("Your professional resume"));

    let list = render_preview(&PreviewInput::from_value(&json!(["Rust"])), "modern");
    assert!(list.is_unsupported());
    let html = to_html(&list, &HtmlOptions::default());
    assert!(html.contains("data-shape=\"list\""));
    assert!(html.contains("Unable to display resume"));
}

#[test]
fn test_markdown_preview() {
    let input = PreviewInput::from_value(&json!("# Jane Doe\n\n## Skills\n\n- Rust\n- **Go**"));
    let doc = render_preview(&input, "minimalist");
    let DocumentBody::Markdown(blocks) = &doc.body else {
        panic!("expected a markdown body");
    };
    assert!(matches!(blocks[0], Block::Title { .. }));

    let html = to_html(&doc, &HtmlOptions::default());
    assert!(html.contains("<strong>Go</strong>"));
    assert!(html.contains("rk-markdown"));
}

#[test]
fn test_unknown_template_falls_back() {
    let input = PreviewInput::Structured(full_resume());
    let doc = render_preview(&input, "does-not-exist");
    assert_eq!(doc.template, Some(TemplateId::Professional));
    assert_eq!(doc.style, *TemplateId::Professional.style());
}

#[test]
fn test_print_geometry() {
    let resume = full_resume();
    let a4 = render_for_export_with_template(&resume, "modern").unwrap();
    assert_eq!(a4.mode, RenderMode::Print);
    assert!(matches!(&a4.geometry, Geometry::Page(page) if page.width_pt == 595.0));

    let options = RenderOptions::new().with_page_size(PageSize::Letter);
    let letter = PrintRenderer::new(options).render(&resume).unwrap();
    assert!(matches!(&letter.geometry, Geometry::Page(page) if page.width_pt == 612.0));
}

#[test]
fn test_header_bar_follows_header_style() {
    let resume = full_resume();
    let has_bar = |id: &str| {
        let doc = render_for_export_with_template(&resume, id).unwrap();
        doc.section(SectionKind::Header)
            .map(|s| s.blocks.iter().any(|b| matches!(b, Block::HeaderBar { .. })))
            .unwrap_or(false)
    };

    assert!(!has_bar("modern"));
    assert!(has_bar("professional"));
    assert!(has_bar("minimalist"));
}

#[test]
fn test_custom_style() {
    let resume = full_resume();
    let style = TemplateStyle::from_value(&json!({
        "primaryColor": "#112233",
        "secondaryColor": "#445566",
        "backgroundColor": "#ffffff",
        "textColor": "#000000",
        "accentColor": "#eeeeee"
    }))
    .unwrap();

    let doc = render_for_export(&resume, &style).unwrap();
    assert_eq!(doc.template, None);
    let html = to_html(&doc, &HtmlOptions::default());
    assert!(html.contains("#112233"));

    let builtin = render_for_export(&resume, TemplateId::Creative.style()).unwrap();
    assert_eq!(builtin.template, Some(TemplateId::Creative));
}

#[test]
fn test_html_output_is_deterministic() {
    let resume = full_resume();
    let options = HtmlOptions::new().with_standalone(true);
    for id in TemplateId::ALL {
        let first = render_for_export_with_template(&resume, id.as_str()).unwrap();
        let second = render_for_export_with_template(&resume, id.as_str()).unwrap();
        assert_eq!(to_html(&first, &options), to_html(&second, &options));
    }
}

#[test]
fn test_print_columns() {
    let doc = render_for_export_with_template(&full_resume(), "international").unwrap();
    let html = to_html(&doc, &HtmlOptions::default());

    let band = html.find("rk-band").unwrap();
    let column_a = html.find("rk-column-a").unwrap();
    let column_b = html.find("rk-column-b").unwrap();
    assert!(band < column_a && column_a < column_b);
    assert!(html.contains("@page"));
}

#[test]
fn test_untrusted_text_is_escaped() {
    let resume = normalize_value(&json!({
        "name": "<script>alert(1)</script>",
        "skills": ["C & C++"]
    }));
    let doc = render_preview(&PreviewInput::Structured(resume), "modern");
    let html = to_html(&doc, &HtmlOptions::default());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("C &amp; C++"));
}
