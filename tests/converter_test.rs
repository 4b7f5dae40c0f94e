//! Integration tests for the exporter registry.

use std::sync::Arc;

use cvforge::convert::{
    DocumentExporter, DocxExporter, ExportFormat, ExportResult, ExporterRegistry, PdfExporter,
};
use cvforge::error::{Error, Result};
use cvforge::model::{Cv, CvData};
use cvforge::render::{ExportOptions, ExportStats};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/full_cv.json");

fn fixture() -> Cv {
    cvforge::from_json(FIXTURE.as_bytes()).unwrap()
}

/// Mock exporter for testing.
struct MockExporter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockExporter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentExporter for MockExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn name(&self) -> &str {
        self.name
    }

    fn export(&self, cv: &Cv, _options: &ExportOptions) -> Result<ExportResult> {
        Ok(ExportResult::new(
            cv,
            ExportFormat::Json,
            format!("Exported by {}", self.name).into_bytes(),
        ))
    }

    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }
}

#[test]
fn test_export_options_builder() {
    let options = ExportOptions::new().with_stats(true);
    assert!(options.collect_stats);
    assert!(options.exported_at.is_none());
}

#[test]
fn test_registry_new() {
    let registry = ExporterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("pdf"));
    assert!(!registry.supports("docx"));
    assert!(registry.supported_extensions().is_empty());
}

#[test]
fn test_registry_with_defaults() {
    let registry = ExporterRegistry::with_defaults();

    assert!(registry.supports("pdf"));
    assert!(registry.supports("DOCX")); // Case insensitive
    assert!(registry.supports(".json"));
    assert!(!registry.supports("odt"));
    assert_eq!(registry.supported_extensions(), vec!["docx", "json", "pdf"]);
}

#[test]
fn test_registry_register_mock() {
    let mut registry = ExporterRegistry::new();
    registry.register(Arc::new(MockExporter::new(vec!["txt", "text"], "text")));

    assert!(registry.supports("txt"));
    assert!(registry.supports("TEXT"));

    let result = registry
        .export(&fixture(), "txt", &ExportOptions::default())
        .unwrap();
    assert_eq!(result.bytes, b"Exported by text".to_vec());
}

#[test]
fn test_registry_later_registration_wins() {
    let mut registry = ExporterRegistry::new();
    registry.register(Arc::new(PdfExporter::new()));
    registry.register(Arc::new(MockExporter::new(vec!["pdf"], "fake-pdf")));

    let exporter = registry.get_by_extension("pdf").unwrap();
    assert_eq!(exporter.name(), "fake-pdf");
    // The replaced exporter is still reachable by name.
    assert_eq!(registry.get_by_name("PDF").unwrap().format(), ExportFormat::Pdf);
}

#[test]
fn test_registry_unknown_extension() {
    let registry = ExporterRegistry::with_defaults();
    let err = registry
        .export(&fixture(), "odt", &ExportOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "odt"));
}

#[test]
fn test_export_all_in_parallel() {
    let registry = ExporterRegistry::with_defaults();
    let results = registry
        .export_all(
            &fixture(),
            &["docx", "pdf", "json"],
            &ExportOptions::default().with_stats(true),
        )
        .unwrap();

    let formats: Vec<_> = results.iter().map(|r| r.format).collect();
    assert_eq!(
        formats,
        vec![ExportFormat::Docx, ExportFormat::Pdf, ExportFormat::Json]
    );

    // Every format walks the same outline.
    let content = |s: &ExportStats| {
        (s.section_count, s.entry_count, s.bullet_count, s.paragraph_count)
    };
    let first = content(results[0].stats.as_ref().unwrap());
    for result in &results[1..] {
        assert_eq!(content(result.stats.as_ref().unwrap()), first);
    }
    assert_eq!(first.0, 6);
}

#[test]
fn test_export_all_rejects_unknown_before_rendering() {
    let registry = ExporterRegistry::with_defaults();
    let result = registry.export_all(&fixture(), &["pdf", "rtf"], &ExportOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_export_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.DOCX");

    let registry = ExporterRegistry::with_defaults();
    let result = registry
        .export_to_path(&fixture(), &path, &ExportOptions::default())
        .unwrap();

    assert_eq!(result.format, ExportFormat::Docx);
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, result.bytes);
    assert_eq!(
        cvforge::detect_format_from_path(&path).unwrap(),
        ExportFormat::Docx
    );
}

#[test]
fn test_export_to_path_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ExporterRegistry::with_defaults();
    let result = registry.export_to_path(
        &fixture(),
        &dir.path().join("resume"),
        &ExportOptions::default(),
    );
    assert!(matches!(result, Err(Error::Other(_))));
}

#[test]
fn test_export_result_filename_and_mime() {
    let cv = fixture();
    let result = DocxExporter::new()
        .export(&cv, &ExportOptions::default())
        .unwrap();

    assert_eq!(result.filename, "Ada Lovelace – Engineer.docx");
    assert_eq!(
        result.mime_type,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert!(!result.is_empty());
    assert_eq!(result.len(), result.bytes.len());
}

#[test]
fn test_blank_title_uses_default_stem() {
    let result = PdfExporter::new()
        .export(&Cv::new("   ", CvData::default()), &ExportOptions::default())
        .unwrap();
    assert_eq!(result.filename, "cv.pdf");
}
