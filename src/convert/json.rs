//! JSON exporter implementation.

use crate::error::Result;
use crate::model::Cv;
use crate::render::{cv_to_json, walk, ExportOptions, ExportStats, ResumeOutline};

use super::{DocumentExporter, ExportFormat, ExportResult};

/// JSON exporter.
///
/// Writes the CV as an export document stamped with the export time.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    _private: (),
}

impl JsonExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn name(&self) -> &str {
        "json"
    }

    fn export(&self, cv: &Cv, options: &ExportOptions) -> Result<ExportResult> {
        let json = cv_to_json(cv, options.export_time(), options.json_format)?;
        let result = ExportResult::new(cv, ExportFormat::Json, json.into_bytes());

        if !options.collect_stats {
            return Ok(result);
        }
        let mut stats = ExportStats::new();
        walk(&ResumeOutline::build(cv), &mut stats);
        Ok(result.with_stats(stats))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
