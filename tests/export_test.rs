//! Integration tests for the export service contracts.

use resumekit::export::{file_stem, ONE_PAGE_MAX_CHARS};
use resumekit::{
    download_file_name, estimate_fits_one_page, filename_from_content_disposition,
    normalize_value, ExportFormat, ResumeKit,
};
use serde_json::{json, Value};

#[test]
fn test_pdf_request_body() {
    let result = ResumeKit::new()
        .with_template("international")
        .load_value(&json!({"name": "Jane  Doe", "summary": "Engineer."}));
    let request = result.pdf_request().unwrap();

    let body: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(body["fileName"], "Jane_Doe");
    assert_eq!(body["resumeData"]["name"], "Jane  Doe");
    assert_eq!(body["forceOnePage"], true);

    let html = body["html"].as_str().unwrap();
    assert!(html.contains("rk-print"));
    assert!(html.contains("rk-template-international"));
}

#[test]
fn test_docx_request_body() {
    let result = ResumeKit::new().load_value(&json!({
        "name": "Jane Doe",
        "experience": [{"role": "Engineer", "company": "Acme", "bullets": ["Shipped v2"]}]
    }));
    let request = result.docx_request().unwrap();

    let body: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(body["resumeData"]["experience"][0]["title"], "Engineer @ Acme");
    assert!(body["plainText"].as_str().unwrap().contains("EXPERIENCE"));
}

#[test]
fn test_long_resume_does_not_force_one_page() {
    let bullets: Vec<String> = (0..40).map(|i| format!("Delivered project number {i} on time and under budget")).collect();
    let resume = normalize_value(&json!({
        "name": "Jane Doe",
        "experience": [{"role": "Engineer", "bullets": bullets}]
    }));

    let total: usize = resume.experience[0].bullets.iter().map(|b| b.chars().count()).sum();
    assert!(total >= ONE_PAGE_MAX_CHARS);
    assert!(!estimate_fits_one_page(&resume));
}

#[test]
fn test_filenames() {
    assert_eq!(file_stem("Jane Q. Public"), "Jane_Q._Public");
    assert_eq!(download_file_name("", ExportFormat::Pdf), "John_Doe_Resume.pdf");
    assert_eq!(ExportFormat::Docx.to_string(), "docx");
}

#[test]
fn test_content_disposition_round_trip_with_download_name() {
    let name = download_file_name("Jane Doe", ExportFormat::Pdf);
    let header = format!("attachment; filename=\"{}\"", name);
    assert_eq!(filename_from_content_disposition(&header), Some(name));
}
