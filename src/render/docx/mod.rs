//! DOCX rendering.
//!
//! The document body is composed by walking the résumé outline; the
//! result is packaged with four static parts into a ZIP container.

pub mod document;
pub mod package;

pub use document::{escape_xml, DocumentComposer, DocxParagraph, ParagraphStyle, BULLET_PREFIX};
pub use package::{write_package, PARTS};

use crate::error::Result;
use crate::model::Cv;
use crate::render::outline::ResumeOutline;
use crate::render::result::ExportStats;
use crate::render::visitor::{walk, CompositeVisitor};

/// A rendered DOCX package with the paragraphs it contains.
#[derive(Debug, Clone)]
pub struct RenderedDocx {
    pub bytes: Vec<u8>,
    pub paragraphs: Vec<DocxParagraph>,
    pub stats: ExportStats,
}

impl RenderedDocx {
    /// Section headings in emission order.
    pub fn headings(&self) -> Vec<&str> {
        self.paragraphs
            .iter()
            .filter(|p| p.style == ParagraphStyle::Heading1)
            .map(|p| p.text.as_str())
            .collect()
    }
}

/// Render a CV as a DOCX package.
pub fn generate_docx(cv: &Cv) -> Result<Vec<u8>> {
    Ok(render_docx(cv)?.bytes)
}

/// Render a CV, keeping the paragraph log and statistics.
pub fn render_docx(cv: &Cv) -> Result<RenderedDocx> {
    let outline = ResumeOutline::build(cv);

    let mut composer = DocumentComposer::new();
    let mut stats = ExportStats::new();
    walk(
        &outline,
        &mut CompositeVisitor::new()
            .with_visitor(&mut composer)
            .with_visitor(&mut stats),
    );

    let (document_xml, paragraphs) = composer.finish();
    let bytes = write_package(&document_xml)?;
    Ok(RenderedDocx {
        bytes,
        paragraphs,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CvData, Experience};

    #[test]
    fn test_render_docx_headings() {
        let data = CvData {
            summary: "S".into(),
            experience: vec![Experience {
                title: "Dev".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let rendered = render_docx(&Cv::new("CV", data)).unwrap();
        assert_eq!(rendered.headings(), vec!["Summary", "Professional Experience"]);
        assert_eq!(rendered.stats.section_count, 2);
        assert_eq!(rendered.stats.page_count, 0);
        assert!(rendered.bytes.starts_with(b"PK\x03\x04"));
    }
}
