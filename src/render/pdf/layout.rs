//! Vertical-flow layout of a résumé outline onto pages.
//!
//! The engine owns a single cursor that only moves down. Lines are
//! placed left to right inside the content area and wrapped greedily at
//! spaces (falling back to character breaks for overlong words). Before a
//! line is placed, the engine checks whether its bottom edge would cross
//! the break threshold and starts a new page if so. Gaps between
//! elements move the cursor but never break a page on their own.

use unicode_normalization::UnicodeNormalization;

use super::fonts::{FaceKind, FontFace, FontSet, MM_PER_PT};
use crate::model::Rgb;
use crate::render::options::PageSetup;
use crate::render::outline::{BulletLine, Entry, Header, Section, SectionKind};
use crate::render::style::{EffectiveStyles, TextPaint, TextRole};
use crate::render::visitor::OutlineVisitor;

/// Horizontal padding inside a text cell.
const CELL_PADDING_MM: f32 = 1.0;

/// Glyph cell drawn in front of every bullet line, in the body font.
pub const BULLET_MARK: &str = "    \u{2022}   ";

const NAME_HEIGHT: f32 = 9.0;
const NAME_GAP: f32 = 3.0;
const PRO_TITLE_HEIGHT: f32 = 8.0;
const PRO_TITLE_GAP: f32 = 3.0;
const CONTACT_HEIGHT: f32 = 5.0;
const HEADER_GAP: f32 = 6.0;
const HEADING_HEIGHT: f32 = 7.0;
const HEADING_GAP: f32 = 2.0;
const BODY_HEIGHT: f32 = 5.0;
const SUMMARY_GAP: f32 = 5.0;
const BULLET_GAP: f32 = 1.0;
const LIST_SECTION_GAP: f32 = 4.0;
const ENTRY_HEADER_HEIGHT: f32 = 6.0;
const CERTIFICATION_HEADER_HEIGHT: f32 = 5.0;
const CAPTION_HEIGHT: f32 = 5.0;
const CAPTION_GAP: f32 = 2.0;
const DESCRIPTION_GAP: f32 = 2.0;
const ENTRY_GAP: f32 = 3.0;
const CERTIFICATION_GAP: f32 = 2.0;
const ENTRY_SECTION_GAP: f32 = 2.0;

/// A run of text placed on a page, in millimetres from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x_mm: f32,
    pub baseline_mm: f32,
    pub face: FaceKind,
    pub size_pt: f32,
    pub color: Rgb,
    pub text: String,
}

/// The runs of one page, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub runs: Vec<TextRun>,
}

/// A logical element as emitted, before wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutElement {
    pub role: TextRole,
    pub text: String,
    /// 1-based page on which the element starts
    pub page: u32,
}

/// Result of laying out a résumé.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub page: PageSetup,
    pub pages: Vec<PageContent>,
    pub elements: Vec<LayoutElement>,
}

impl PdfLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Section headings in emission order.
    pub fn headings(&self) -> Vec<&str> {
        self.texts_with_role(TextRole::SectionHeading)
    }

    /// Element texts of one role, in emission order.
    pub fn texts_with_role(&self, role: TextRole) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.role == role)
            .map(|e| e.text.as_str())
            .collect()
    }

    /// Faces referenced by at least one run.
    pub fn faces_used(&self) -> Vec<FaceKind> {
        let mut faces: Vec<FaceKind> = self
            .pages
            .iter()
            .flat_map(|p| p.runs.iter().map(|r| r.face))
            .collect();
        faces.sort();
        faces.dedup();
        faces
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Layout pass over an outline. Owns the cursor and page list.
pub struct LayoutEngine<'a> {
    fonts: &'a FontSet,
    styles: EffectiveStyles,
    page: PageSetup,
    pages: Vec<PageContent>,
    elements: Vec<LayoutElement>,
    y: f32,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(fonts: &'a FontSet, styles: EffectiveStyles, page: PageSetup) -> Self {
        Self {
            fonts,
            styles,
            page,
            pages: vec![PageContent::default()],
            elements: Vec::new(),
            y: page.margin_mm,
        }
    }

    pub fn finish(self) -> PdfLayout {
        PdfLayout {
            page: self.page,
            pages: self.pages,
            elements: self.elements,
        }
    }

    fn gap(&mut self, height: f32) {
        self.y += height;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y + height > self.page.break_threshold() {
            self.pages.push(PageContent::default());
            self.y = self.page.margin_mm;
            log::debug!("Page break, now on page {}", self.pages.len());
        }
    }

    /// 1-based index of the page being filled.
    fn current_page(&self) -> u32 {
        self.pages.len() as u32
    }

    fn record(&mut self, role: TextRole, text: &str, page: u32) {
        self.elements.push(LayoutElement {
            role,
            text: text.to_string(),
            page,
        });
    }

    /// A full-width element, wrapped when it does not fit.
    fn line(&mut self, role: TextRole, text: &str, height: f32, align: Align) {
        let x = self.page.margin_mm;
        let width = self.page.content_width();
        let page = self.block(role, text, x, width, height, align);
        self.record(role, text, page);
    }

    /// A bullet glyph cell followed by wrapped text in the remaining width.
    fn bullet(&mut self, text: &str) {
        let paint = self.styles.paint(TextRole::Body);
        let fonts = self.fonts;
        let face = fonts.face(FaceKind::select(paint.bold, paint.italic));
        let mark_width = face.text_width_mm(BULLET_MARK, paint.size);

        self.ensure_room(BODY_HEIGHT);
        self.record(TextRole::Body, text, self.current_page());
        let x = self.page.margin_mm;
        self.place(&paint, face, BULLET_MARK, x, mark_width, BODY_HEIGHT, Align::Left);

        let width = self.page.content_width() - mark_width;
        self.block(TextRole::Body, text, x + mark_width, width, BODY_HEIGHT, Align::Left);
    }

    /// Wrapped text lines; returns the page holding the first line.
    fn block(&mut self, role: TextRole, text: &str, x: f32, width: f32, height: f32, align: Align) -> u32 {
        let paint = self.styles.paint(role);
        let fonts = self.fonts;
        let face = fonts.face(FaceKind::select(paint.bold, paint.italic));
        let text: String = text.nfc().collect();

        let mut first_page = None;
        for line in wrap_text(face, paint.size, &text, width - 2.0 * CELL_PADDING_MM) {
            self.ensure_room(height);
            first_page.get_or_insert(self.current_page());
            self.place(&paint, face, &line, x, width, height, align);
            self.y += height;
        }
        first_page.unwrap_or_else(|| self.current_page())
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &mut self,
        paint: &TextPaint,
        face: &FontFace,
        text: &str,
        x: f32,
        width: f32,
        height: f32,
        align: Align,
    ) {
        if text.is_empty() {
            return;
        }
        let dx = match align {
            Align::Left => CELL_PADDING_MM,
            Align::Center => (width - face.text_width_mm(text, paint.size)) / 2.0,
        };
        let baseline = self.y + 0.5 * height + 0.3 * paint.size * MM_PER_PT;
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(TextRun {
                x_mm: x + dx,
                baseline_mm: baseline,
                face: face.kind(),
                size_pt: paint.size,
                color: paint.color,
                text: text.to_string(),
            });
        }
    }
}

impl OutlineVisitor for LayoutEngine<'_> {
    fn visit_header(&mut self, header: &Header) {
        self.line(TextRole::Name, &header.name, NAME_HEIGHT, Align::Center);
        self.gap(NAME_GAP);

        if let Some(title) = &header.professional_title {
            self.line(TextRole::ProfessionalTitle, title, PRO_TITLE_HEIGHT, Align::Center);
            self.gap(PRO_TITLE_GAP);
        }

        if let Some(contact) = &header.contact {
            self.line(TextRole::Contact, contact, CONTACT_HEIGHT, Align::Center);
        }
        self.gap(HEADER_GAP);
    }

    fn start_section(&mut self, section: &Section) {
        self.line(TextRole::SectionHeading, &section.heading, HEADING_HEIGHT, Align::Left);
        self.gap(HEADING_GAP);
    }

    fn visit_paragraph(&mut self, _kind: SectionKind, text: &str) {
        self.line(TextRole::Body, text, BODY_HEIGHT, Align::Left);
        self.gap(SUMMARY_GAP);
    }

    fn visit_bullet(&mut self, _kind: SectionKind, bullet: &BulletLine) {
        self.bullet(&bullet.display());
        self.gap(BULLET_GAP);
    }

    fn visit_entry(&mut self, kind: SectionKind, entry: &Entry) {
        let header_height = match kind {
            SectionKind::Certifications => CERTIFICATION_HEADER_HEIGHT,
            _ => ENTRY_HEADER_HEIGHT,
        };
        if !entry.header.is_empty() {
            self.line(TextRole::EntryHeader, &entry.header, header_height, Align::Left);
        }
        if let Some(date) = &entry.date {
            self.line(TextRole::DateCaption, date, CAPTION_HEIGHT, Align::Left);
        }

        match kind {
            SectionKind::Certifications => {
                self.gap(CERTIFICATION_GAP);
                return;
            }
            SectionKind::Experience => self.gap(CAPTION_GAP),
            _ => {}
        }

        for bullet in &entry.bullets {
            self.bullet(bullet);
            self.gap(BULLET_GAP);
        }
        if let Some(description) = &entry.description {
            self.gap(DESCRIPTION_GAP);
            self.line(TextRole::Body, description, BODY_HEIGHT, Align::Left);
        }
        self.gap(ENTRY_GAP);
    }

    fn end_section(&mut self, section: &Section) {
        match section.kind {
            SectionKind::Skills | SectionKind::Languages => self.gap(LIST_SECTION_GAP),
            SectionKind::Experience | SectionKind::Education => self.gap(ENTRY_SECTION_GAP),
            SectionKind::Summary | SectionKind::Certifications => {}
        }
    }
}

/// Greedy line breaking of `text` into lines no wider than `max_width_mm`.
///
/// Embedded newlines always break. A line breaks at its last space, which
/// is dropped; a word wider than the whole line breaks between characters.
/// Every paragraph yields at least one (possibly empty) line.
pub fn wrap_text(face: &FontFace, size_pt: f32, text: &str, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let chars: Vec<char> = paragraph.trim_end_matches('\r').chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut start = 0;
        let mut i = 0;
        let mut last_space: Option<usize> = None;
        let mut width = 0.0;

        while i < chars.len() {
            let c = chars[i];
            if c == ' ' {
                last_space = Some(i);
            }
            width += face.char_width_mm(c, size_pt);

            if width > max_width_mm {
                match last_space {
                    Some(space) => {
                        lines.push(chars[start..space].iter().collect());
                        i = space + 1;
                    }
                    None => {
                        if i == start {
                            i += 1;
                        }
                        lines.push(chars[start..i].iter().collect());
                    }
                }
                start = i;
                last_space = None;
                width = 0.0;
                continue;
            }
            i += 1;
        }

        if start < chars.len() {
            lines.push(chars[start..].iter().collect());
        }
    }

    lines
}
