//! # cvforge
//!
//! Résumé export engine for Rust.
//!
//! This library turns a structured CV record into print-ready documents:
//! a paginated A4 PDF with embedded Unicode fonts, a Word-compatible DOCX
//! package, and a JSON export document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cvforge::{generate_docx, generate_pdf, load_file};
//!
//! fn main() -> cvforge::Result<()> {
//!     let cv = load_file("cv.json")?;
//!
//!     std::fs::write("cv.pdf", generate_pdf(&cv)?)?;
//!     std::fs::write("cv.docx", generate_docx(&cv)?)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One outline, many formats**: PDF and DOCX render the same normalized
//!   section list, so headings, order and bullet lines always agree
//! - **Unicode PDF text**: embedded DejaVu Sans faces with extractable text
//! - **Style overrides**: five configurable style slots with built-in defaults
//! - **Localized labels**: section headings and the "Present" word
//! - **Deterministic output**: identical input produces identical bytes
//! - **Parallel export**: render several formats at once with Rayon

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{
    suggested_filename, DocumentExporter, ExportFormat, ExportResult, ExporterRegistry,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path};
pub use error::{Error, Result};
pub use model::{
    Certification, Cv, CvData, CvExport, CvVersion, Education, Experience, FontStyle, Language,
    PersonalInfo, Rgb, SectionLabels, SkillGroup, StyleConfig,
};
pub use render::{
    format_date_range, from_json, generate_docx, generate_pdf, import_json, normalize_description,
    to_json, EffectiveStyles, ExportOptions, ExportStats, ImportedCv, JsonFormat, PageSetup,
};

use std::path::Path;

/// Load a CV from a JSON file.
///
/// Accepts both a `{title, data}` record and an export document.
///
/// # Example
///
/// ```no_run
/// use cvforge::load_file;
///
/// let cv = load_file("cv.json").unwrap();
/// println!("{}", cv.title);
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Cv> {
    let bytes = std::fs::read(path)?;
    from_json(&bytes)
}

/// Export a CV in one format with default options.
///
/// # Example
///
/// ```no_run
/// use cvforge::{export, Cv, CvData, ExportFormat};
///
/// let cv = Cv::new("My CV", CvData::default());
/// let result = export(&cv, ExportFormat::Docx).unwrap();
/// std::fs::write(&result.filename, &result.bytes).unwrap();
/// ```
pub fn export(cv: &Cv, format: ExportFormat) -> Result<ExportResult> {
    export_with_options(cv, format, &ExportOptions::default())
}

/// Export a CV in one format with custom options.
pub fn export_with_options(cv: &Cv, format: ExportFormat, options: &ExportOptions) -> Result<ExportResult> {
    ExporterRegistry::with_defaults().export(cv, format.extension(), options)
}

/// Builder for exporting CVs.
///
/// # Example
///
/// ```no_run
/// use cvforge::{CvForge, ExportFormat, JsonFormat, PageSetup};
///
/// let cv = cvforge::load_file("cv.json")?;
/// let results = CvForge::new()
///     .with_page(PageSetup::letter())
///     .with_json_format(JsonFormat::Compact)
///     .with_stats()
///     .export_all(&cv, &ExportFormat::ALL)?;
/// # Ok::<(), cvforge::Error>(())
/// ```
pub struct CvForge {
    options: ExportOptions,
    registry: ExporterRegistry,
}

impl CvForge {
    /// Create a new builder with the default exporters.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
            registry: ExporterRegistry::with_defaults(),
        }
    }

    /// Set the PDF page geometry.
    pub fn with_page(mut self, page: PageSetup) -> Self {
        self.options = self.options.with_page(page);
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.options = self.options.with_json_format(format);
        self
    }

    /// Collect rendering statistics.
    pub fn with_stats(mut self) -> Self {
        self.options = self.options.with_stats(true);
        self
    }

    /// Pin the JSON export timestamp.
    pub fn with_exported_at(mut self, at: chrono::DateTime<chrono::Utc>) -> Self {
        self.options = self.options.with_exported_at(at);
        self
    }

    /// Register an additional exporter.
    pub fn with_exporter(mut self, exporter: std::sync::Arc<dyn DocumentExporter>) -> Self {
        self.registry.register(exporter);
        self
    }

    /// The options used for every export.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render a PDF.
    pub fn pdf(&self, cv: &Cv) -> Result<Vec<u8>> {
        Ok(render::render_pdf(cv, &self.options.page)?.bytes)
    }

    /// Render a DOCX package.
    pub fn docx(&self, cv: &Cv) -> Result<Vec<u8>> {
        generate_docx(cv)
    }

    /// Render a JSON export document.
    pub fn json(&self, cv: &Cv) -> Result<String> {
        render::cv_to_json(cv, self.options.export_time(), self.options.json_format)
    }

    /// Export in one format.
    pub fn export(&self, cv: &Cv, format: ExportFormat) -> Result<ExportResult> {
        self.registry.export(cv, format.extension(), &self.options)
    }

    /// Export in several formats in parallel, keeping the requested order.
    pub fn export_all(&self, cv: &Cv, formats: &[ExportFormat]) -> Result<Vec<ExportResult>> {
        let exts: Vec<&str> = formats.iter().map(|f| f.extension()).collect();
        self.registry.export_all(cv, &exts, &self.options)
    }

    /// Export to a file, choosing the format from its extension.
    pub fn export_to_path<P: AsRef<Path>>(&self, cv: &Cv, path: P) -> Result<ExportResult> {
        self.registry.export_to_path(cv, path.as_ref(), &self.options)
    }
}

impl Default for CvForge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cv {
        let mut data = CvData::default();
        data.personal.first_name = "Margaret".into();
        data.personal.last_name = "Hamilton".into();
        data.summary = "Software engineering pioneer.".into();
        Cv::new("Hamilton CV", data)
    }

    #[test]
    fn test_builder_defaults() {
        let forge = CvForge::default();
        assert_eq!(forge.options().page, PageSetup::a4());
        assert!(!forge.options().collect_stats);
        assert_eq!(forge.options().json_format, JsonFormat::Pretty);
    }

    #[test]
    fn test_builder_chained() {
        let forge = CvForge::new()
            .with_page(PageSetup::letter())
            .with_json_format(JsonFormat::Compact)
            .with_stats();
        assert_eq!(forge.options().page, PageSetup::letter());
        assert_eq!(forge.options().json_format, JsonFormat::Compact);
        assert!(forge.options().collect_stats);
    }

    #[test]
    fn test_export_free_function() {
        let result = export(&sample(), ExportFormat::Pdf).unwrap();
        assert_eq!(result.filename, "Hamilton CV.pdf");
        assert_eq!(detect_format_from_bytes(&result.bytes).unwrap(), ExportFormat::Pdf);
    }

    #[test]
    fn test_export_all_keeps_order() {
        let results = CvForge::new()
            .with_stats()
            .export_all(&sample(), &[ExportFormat::Json, ExportFormat::Docx, ExportFormat::Pdf])
            .unwrap();
        let formats: Vec<_> = results.iter().map(|r| r.format).collect();
        assert_eq!(
            formats,
            vec![ExportFormat::Json, ExportFormat::Docx, ExportFormat::Pdf]
        );
        for result in &results {
            assert_eq!(detect_format_from_bytes(&result.bytes).unwrap(), result.format);
            assert_eq!(result.stats.as_ref().unwrap().section_count, 1);
        }
    }

    #[test]
    fn test_builder_pdf_matches_free_function() {
        let cv = sample();
        assert_eq!(CvForge::new().pdf(&cv).unwrap(), generate_pdf(&cv).unwrap());
        assert_eq!(CvForge::new().docx(&cv).unwrap(), generate_docx(&cv).unwrap());
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file("/nonexistent/cv.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
