//! DOCX exporter implementation.

use crate::error::Result;
use crate::model::Cv;
use crate::render::{render_docx, ExportOptions};

use super::{DocumentExporter, ExportFormat, ExportResult};

/// DOCX exporter.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter {
    _private: (),
}

impl DocxExporter {
    /// Create a new DOCX exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExporter for DocxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn export(&self, cv: &Cv, options: &ExportOptions) -> Result<ExportResult> {
        let rendered = render_docx(cv)?;
        let result = ExportResult::new(cv, ExportFormat::Docx, rendered.bytes);
        Ok(if options.collect_stats {
            result.with_stats(rendered.stats)
        } else {
            result
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }
}
