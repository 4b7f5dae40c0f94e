//! PDF rendering.
//!
//! Rendering runs in two passes: [`layout`] walks the résumé outline and
//! places text on pages, then [`writer`] serializes the placed runs with
//! the embedded fonts.

pub mod fonts;
pub mod layout;
mod writer;

pub use fonts::{font_set, FaceKind};
pub use layout::{LayoutElement, PageContent, PdfLayout, TextRun, BULLET_MARK};
pub use writer::PRODUCER;

use crate::error::Result;
use crate::model::Cv;
use crate::render::options::PageSetup;
use crate::render::outline::ResumeOutline;
use crate::render::result::ExportStats;
use crate::render::style::EffectiveStyles;
use crate::render::visitor::{walk, CompositeVisitor};

use layout::LayoutEngine;

/// A rendered PDF together with its layout and statistics.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub layout: PdfLayout,
    pub stats: ExportStats,
}

/// Render a CV as an A4 PDF.
pub fn generate_pdf(cv: &Cv) -> Result<Vec<u8>> {
    Ok(render_pdf(cv, &PageSetup::a4())?.bytes)
}

/// Lay out a CV without serializing it.
pub fn layout_pdf(cv: &Cv, page: &PageSetup) -> Result<PdfLayout> {
    let fonts = font_set()?;
    let mut engine = LayoutEngine::new(fonts, EffectiveStyles::resolve(cv.data.style.as_ref()), *page);
    walk(&ResumeOutline::build(cv), &mut engine);
    Ok(engine.finish())
}

/// Render a CV on the given page geometry.
pub fn render_pdf(cv: &Cv, page: &PageSetup) -> Result<RenderedPdf> {
    let fonts = font_set()?;
    let outline = ResumeOutline::build(cv);

    let mut engine = LayoutEngine::new(fonts, EffectiveStyles::resolve(cv.data.style.as_ref()), *page);
    let mut stats = ExportStats::new();
    walk(
        &outline,
        &mut CompositeVisitor::new()
            .with_visitor(&mut engine)
            .with_visitor(&mut stats),
    );

    let layout = engine.finish();
    stats.page_count = layout.page_count() as u32;

    let bytes = writer::write_pdf(&layout, fonts, &cv.title)?;
    Ok(RenderedPdf {
        bytes,
        layout,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CvData, FontStyle, Rgb, StyleConfig};
    use crate::render::style::TextRole;

    #[test]
    fn test_empty_cv_renders_one_page() {
        let rendered = render_pdf(&Cv::new("Blank", CvData::default()), &PageSetup::a4()).unwrap();
        assert_eq!(rendered.layout.page_count(), 1);
        assert_eq!(rendered.stats.page_count, 1);
        assert_eq!(rendered.stats.section_count, 0);
        assert_eq!(rendered.layout.texts_with_role(TextRole::Name), vec!["Blank"]);
        assert!(rendered.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_style_override_reaches_runs() {
        let data = CvData {
            summary: "Body".into(),
            style: Some(StyleConfig {
                title2: Some(FontStyle::new(16.0, Rgb(200, 10, 10), false, true)),
                ..Default::default()
            }),
            ..Default::default()
        };
        let layout = layout_pdf(&Cv::new("CV", data), &PageSetup::a4()).unwrap();
        let heading = layout.pages[0]
            .runs
            .iter()
            .find(|r| r.text == "Summary")
            .unwrap();
        assert_eq!(heading.size_pt, 16.0);
        assert_eq!(heading.color, Rgb(200, 10, 10));
        assert_eq!(heading.face, FaceKind::Italic);
    }
}
