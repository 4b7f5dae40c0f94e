//! WordprocessingML body composition.

use crate::render::outline::{BulletLine, Entry, Header, Section, SectionKind};
use crate::render::visitor::OutlineVisitor;

/// Prefix written in front of every bullet paragraph.
pub const BULLET_PREFIX: &str = "\u{2022}  ";

const DOCUMENT_START: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>"#;

// A4 with 25 mm margins, in twentieths of a point.
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1417" w:right="1417" w:bottom="1417" w:left="1417" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#;

const DOCUMENT_END: &str = "</w:body></w:document>";

/// Paragraph styles declared in `styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphStyle {
    Normal,
    Heading1,
    Heading2,
    Title,
    ProTitle,
    Subtitle,
    Meta,
    Bullet,
}

impl ParagraphStyle {
    pub fn style_id(self) -> &'static str {
        match self {
            ParagraphStyle::Normal => "Normal",
            ParagraphStyle::Heading1 => "Heading1",
            ParagraphStyle::Heading2 => "Heading2",
            ParagraphStyle::Title => "Title",
            ParagraphStyle::ProTitle => "ProTitle",
            ParagraphStyle::Subtitle => "Subtitle",
            ParagraphStyle::Meta => "Meta",
            ParagraphStyle::Bullet => "Bullet",
        }
    }
}

/// A paragraph as written, with its visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxParagraph {
    pub style: ParagraphStyle,
    pub text: String,
}

/// Builds `word/document.xml` while walking an outline.
#[derive(Debug, Clone)]
pub struct DocumentComposer {
    xml: String,
    paragraphs: Vec<DocxParagraph>,
}

impl DocumentComposer {
    pub fn new() -> Self {
        Self {
            xml: String::from(DOCUMENT_START),
            paragraphs: Vec::new(),
        }
    }

    /// Paragraphs written so far.
    pub fn paragraphs(&self) -> &[DocxParagraph] {
        &self.paragraphs
    }

    /// Close the body and return the document XML with the paragraph log.
    pub fn finish(mut self) -> (String, Vec<DocxParagraph>) {
        self.xml.push_str(SECTION_PROPERTIES);
        self.xml.push_str(DOCUMENT_END);
        (self.xml, self.paragraphs)
    }

    fn paragraph(&mut self, style: ParagraphStyle, text: &str) {
        self.open(style);
        self.push_run(text, false);
        self.close(style, text.to_string());
    }

    fn bullet(&mut self, lead: &str, text: &str) {
        let style = ParagraphStyle::Bullet;
        self.open(style);
        if lead.is_empty() {
            self.push_run(&format!("{}{}", BULLET_PREFIX, text), false);
        } else {
            self.push_run(BULLET_PREFIX, false);
            if text.is_empty() {
                self.push_run(lead, true);
            } else {
                self.push_run(&format!("{}: ", lead), true);
                self.push_run(text, false);
            }
        }
        let visible = BulletLine {
            lead: lead.to_string(),
            text: text.to_string(),
        }
        .display();
        self.close(style, format!("{}{}", BULLET_PREFIX, visible));
    }

    fn open(&mut self, style: ParagraphStyle) {
        self.xml.push_str("<w:p><w:pPr><w:pStyle w:val=\"");
        self.xml.push_str(style.style_id());
        self.xml.push_str("\"/></w:pPr>");
    }

    fn close(&mut self, style: ParagraphStyle, text: String) {
        self.xml.push_str("</w:p>");
        self.paragraphs.push(DocxParagraph { style, text });
    }

    /// One run; embedded newlines become `<w:br/>`.
    fn push_run(&mut self, text: &str, bold: bool) {
        self.xml.push_str("<w:r>");
        if bold {
            self.xml.push_str("<w:rPr><w:b/></w:rPr>");
        }
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.xml.push_str("<w:br/>");
            }
            self.xml.push_str("<w:t xml:space=\"preserve\">");
            self.xml.push_str(&escape_xml(line.trim_end_matches('\r')));
            self.xml.push_str("</w:t>");
        }
        self.xml.push_str("</w:r>");
    }
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineVisitor for DocumentComposer {
    fn visit_header(&mut self, header: &Header) {
        self.paragraph(ParagraphStyle::Title, &header.name);
        if let Some(title) = &header.professional_title {
            self.paragraph(ParagraphStyle::ProTitle, title);
        }
        if let Some(contact) = &header.contact {
            self.paragraph(ParagraphStyle::Subtitle, contact);
        }
    }

    fn start_section(&mut self, section: &Section) {
        self.paragraph(ParagraphStyle::Heading1, &section.heading);
    }

    fn visit_paragraph(&mut self, _kind: SectionKind, text: &str) {
        self.paragraph(ParagraphStyle::Normal, text);
    }

    fn visit_bullet(&mut self, _kind: SectionKind, bullet: &BulletLine) {
        self.bullet(&bullet.lead, &bullet.text);
    }

    fn visit_entry(&mut self, _kind: SectionKind, entry: &Entry) {
        if !entry.header.is_empty() {
            self.paragraph(ParagraphStyle::Heading2, &entry.header);
        }
        if let Some(date) = &entry.date {
            self.paragraph(ParagraphStyle::Meta, date);
        }
        for line in &entry.bullets {
            self.bullet("", line);
        }
        if let Some(description) = &entry.description {
            self.paragraph(ParagraphStyle::Normal, description);
        }
    }
}

/// Escape text for XML character data and attribute values.
///
/// `&`, `<`, `>`, `"` and `'` become entities; characters outside the
/// XML 1.0 `Char` production are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_xml_char(c) => escaped.push(c),
            _ => {}
        }
    }
    escaped
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
