//! Export options and page geometry.

use chrono::{DateTime, Utc};

use super::JsonFormat;

/// Page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Page width
    pub width_mm: f32,

    /// Page height
    pub height_mm: f32,

    /// Left, top and right margin
    pub margin_mm: f32,

    /// Distance from the bottom edge that triggers a page break
    pub break_margin_mm: f32,
}

impl PageSetup {
    /// Portrait A4 with 25 mm margins on every side.
    pub const fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 25.0,
            break_margin_mm: 25.0,
        }
    }

    /// Portrait US Letter with the same margins as [`PageSetup::a4`].
    pub const fn letter() -> Self {
        Self {
            width_mm: 215.9,
            height_mm: 279.4,
            margin_mm: 25.0,
            break_margin_mm: 25.0,
        }
    }

    /// Set the left, top and right margin.
    pub fn with_margin(mut self, margin_mm: f32) -> Self {
        self.margin_mm = margin_mm.max(0.0);
        self
    }

    /// Set the bottom break margin.
    pub fn with_break_margin(mut self, margin_mm: f32) -> Self {
        self.break_margin_mm = margin_mm.max(0.0);
        self
    }

    /// Width available between the side margins.
    pub fn content_width(&self) -> f32 {
        (self.width_mm - 2.0 * self.margin_mm).max(0.0)
    }

    /// Lowest y coordinate a line may reach before breaking.
    pub fn break_threshold(&self) -> f32 {
        self.height_mm - self.break_margin_mm
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

/// Options controlling an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// PDF page geometry
    pub page: PageSetup,

    /// Layout of JSON output
    pub json_format: JsonFormat,

    /// Collect statistics during rendering
    pub collect_stats: bool,

    /// Timestamp written into JSON exports; the current time when unset
    pub exported_at: Option<DateTime<Utc>>,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageSetup) -> Self {
        self.page = page;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Pin the JSON export timestamp.
    pub fn with_exported_at(mut self, at: DateTime<Utc>) -> Self {
        self.exported_at = Some(at);
        self
    }

    /// The JSON export timestamp to use for this call.
    pub fn export_time(&self) -> DateTime<Utc> {
        self.exported_at.unwrap_or_else(Utc::now)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page: PageSetup::a4(),
            json_format: JsonFormat::Pretty,
            collect_stats: false,
            exported_at: None,
        }
    }
}
