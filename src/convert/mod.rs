//! Exporter registry providing a plugin architecture for output formats.
//!
//! Each output format is produced by a [`DocumentExporter`]. The
//! [`ExporterRegistry`] maps file extensions to exporters and dispatches
//! exports, optionally rendering several formats in parallel.
//!
//! # Example
//!
//! ```no_run
//! use cvforge::convert::{ExporterRegistry, PdfExporter};
//! use cvforge::model::{Cv, CvData};
//! use cvforge::render::ExportOptions;
//! use std::sync::Arc;
//!
//! fn main() -> cvforge::Result<()> {
//!     let mut registry = ExporterRegistry::new();
//!     registry.register(Arc::new(PdfExporter::new()));
//!
//!     let cv = Cv::new("My CV", CvData::default());
//!     let result = registry.export(&cv, "pdf", &ExportOptions::default())?;
//!     std::fs::write(&result.filename, &result.bytes)?;
//!     Ok(())
//! }
//! ```

mod docx;
mod json;
mod pdf;

pub use docx::DocxExporter;
pub use json::JsonExporter;
pub use pdf::PdfExporter;

use crate::error::{Error, Result};
use crate::model::Cv;
use crate::render::{ExportOptions, ExportStats};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Fallback filename stem when a CV title is blank.
pub const DEFAULT_FILE_STEM: &str = "cv";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Docx, ExportFormat::Json];

    /// Lowercase file extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Json => "application/json",
        }
    }

    /// Look up a format by extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Docx => "DOCX",
            ExportFormat::Json => "JSON",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Result of exporting a CV.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Complete output document
    pub bytes: Vec<u8>,

    /// Suggested filename, `<sanitized title>.<ext>`
    pub filename: String,

    /// Format of the output
    pub format: ExportFormat,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// Rendering statistics (if collected)
    pub stats: Option<ExportStats>,
}

impl ExportResult {
    /// Create a new export result for `cv` in `format`.
    pub fn new(cv: &Cv, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            filename: suggested_filename(&cv.title, format),
            format,
            mime_type: format.mime_type(),
            stats: None,
        }
    }

    /// Set rendering statistics.
    pub fn with_stats(mut self, stats: ExportStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Get output length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Build a download filename from a CV title.
///
/// Path separators, quotes, characters reserved on common filesystems and
/// control characters become `_`. A blank title yields [`DEFAULT_FILE_STEM`].
pub fn suggested_filename(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' | ':' | '*' | '?' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_matches('.');
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    format!("{}.{}", stem, format.extension())
}

/// Trait for output exporters.
///
/// Implement this trait to add support for a new output format.
pub trait DocumentExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// Render a CV.
    fn export(&self, cv: &Cv, options: &ExportOptions) -> Result<ExportResult>;

    /// Get the file extensions handled by this exporter.
    ///
    /// Extensions are lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Check if this exporter handles the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for exporters.
///
/// The registry maps file extensions to exporters and provides
/// convenient methods for exporting CVs.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn DocumentExporter>>,
    by_name: HashMap<String, Arc<dyn DocumentExporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the PDF, DOCX and JSON exporters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExporter::new()));
        registry.register(Arc::new(DocxExporter::new()));
        registry.register(Arc::new(JsonExporter::new()));
        registry
    }

    /// Register an exporter for all its supported extensions.
    pub fn register(&mut self, exporter: Arc<dyn DocumentExporter>) {
        for ext in exporter.supported_extensions() {
            self.exporters.insert(ext.to_lowercase(), exporter.clone());
        }
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.exporters
            .get(&ext.trim_start_matches('.').to_lowercase())
            .cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.exporters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Export a CV in the format registered for `ext`.
    pub fn export(&self, cv: &Cv, ext: &str, options: &ExportOptions) -> Result<ExportResult> {
        let exporter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;
        exporter.export(cv, options)
    }

    /// Export a CV to `path`, choosing the format from its extension.
    pub fn export_to_path(&self, cv: &Cv, path: &Path, options: &ExportOptions) -> Result<ExportResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other(format!("Output path has no extension: {}", path.display())))?;

        let result = self.export(cv, ext, options)?;
        std::fs::write(path, &result.bytes)?;
        log::debug!("Wrote {} ({} bytes)", path.display(), result.len());
        Ok(result)
    }

    /// Export a CV in several formats in parallel.
    ///
    /// Results keep the order of `exts`. The first failure is returned.
    pub fn export_all(&self, cv: &Cv, exts: &[&str], options: &ExportOptions) -> Result<Vec<ExportResult>> {
        let exporters = exts
            .iter()
            .map(|ext| {
                self.get_by_extension(ext)
                    .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        exporters
            .par_iter()
            .map(|exporter| exporter.export(cv, options))
            .collect()
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("PDF"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_extension(".docx"), Some(ExportFormat::Docx));
        assert_eq!(ExportFormat::from_extension("odt"), None);
        assert!(matches!(
            "txt".parse::<ExportFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("My CV", ExportFormat::Pdf), "My CV.pdf");
        assert_eq!(suggested_filename("   ", ExportFormat::Docx), "cv.docx");
        assert_eq!(
            suggested_filename("a/b\\c \"d\"", ExportFormat::Json),
            "a_b_c _d_.json"
        );
        assert_eq!(suggested_filename("x\ny", ExportFormat::Pdf), "x_y.pdf");
        assert_eq!(suggested_filename("..", ExportFormat::Pdf), "cv.pdf");
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExporterRegistry::with_defaults();
        assert!(registry.supports("pdf"));
        assert!(registry.supports("DOCX"));
        assert!(registry.supports(".json"));
        assert!(!registry.supports("odt"));
        assert_eq!(registry.supported_extensions(), vec!["docx", "json", "pdf"]);
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ExporterRegistry::with_defaults();
        let exporter = registry.get_by_name("DOCX").unwrap();
        assert_eq!(exporter.format(), ExportFormat::Docx);
    }

    #[test]
    fn test_registry_unknown_extension() {
        let registry = ExporterRegistry::new();
        let result = registry.export(&Cv::default(), "pdf", &ExportOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedFormat(ext)) if ext == "pdf"));
    }
}
