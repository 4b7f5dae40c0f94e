//! PDF exporter implementation.

use crate::error::Result;
use crate::model::Cv;
use crate::render::{render_pdf, ExportOptions};

use super::{DocumentExporter, ExportFormat, ExportResult};

/// PDF exporter.
///
/// Renders paginated PDFs on the page geometry given in the options.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    _private: (),
}

impl PdfExporter {
    /// Create a new PDF exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn export(&self, cv: &Cv, options: &ExportOptions) -> Result<ExportResult> {
        let rendered = render_pdf(cv, &options.page)?;
        let result = ExportResult::new(cv, ExportFormat::Pdf, rendered.bytes);
        Ok(if options.collect_stats {
            result.with_stats(rendered.stats)
        } else {
            result
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }
}
