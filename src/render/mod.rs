//! Rendering module for exporting CVs to the supported output formats.

pub mod dates;
pub mod docx;
mod json;
pub mod normalize;
mod options;
pub mod outline;
pub mod pdf;
mod result;
pub mod style;
pub mod visitor;

pub use dates::{format_date_range, format_date_range_with, format_month_year};
pub use docx::{generate_docx, render_docx, RenderedDocx};
pub use json::{cv_to_json, from_json, import_json, to_json, ImportedCv, JsonFormat, IMPORTED_TITLE};
pub use normalize::{normalize_description, BULLET_GLYPHS};
pub use options::{ExportOptions, PageSetup};
pub use outline::{ResumeOutline, SectionKind};
pub use pdf::{generate_pdf, layout_pdf, render_pdf, PdfLayout, RenderedPdf};
pub use result::ExportStats;
pub use style::{EffectiveStyles, StyleSlot, TextRole};
pub use visitor::{walk, CompositeVisitor, HeadingCollector, OutlineVisitor};
