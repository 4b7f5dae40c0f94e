//! Visitor pattern over the normalized résumé outline.
//!
//! Every output format is produced by a visitor walked over the same
//! [`ResumeOutline`], so the formats cannot disagree on section order,
//! skipped sections or line content. Only markup and geometry differ.
//!
//! # Example
//!
//! ```
//! use cvforge::model::{Cv, CvData};
//! use cvforge::render::outline::{ResumeOutline, Section};
//! use cvforge::render::visitor::{walk, OutlineVisitor};
//!
//! #[derive(Default)]
//! struct SectionCounter(usize);
//!
//! impl OutlineVisitor for SectionCounter {
//!     fn start_section(&mut self, _section: &Section) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut data = CvData::default();
//! data.summary = "Systems programmer.".into();
//! let outline = ResumeOutline::build(&Cv::new("CV", data));
//!
//! let mut counter = SectionCounter::default();
//! walk(&outline, &mut counter);
//! assert_eq!(counter.0, 1);
//! ```

use super::outline::{BulletLine, Entry, Header, ResumeOutline, Section, SectionItem, SectionKind};

/// Callbacks invoked while walking an outline.
///
/// All methods do nothing by default.
pub trait OutlineVisitor {
    /// Called once, before any section.
    fn visit_header(&mut self, header: &Header) {
        let _ = header;
    }

    /// Called before the items of a section.
    fn start_section(&mut self, section: &Section) {
        let _ = section;
    }

    /// Called for a free-text paragraph (the summary).
    fn visit_paragraph(&mut self, kind: SectionKind, text: &str) {
        let _ = (kind, text);
    }

    /// Called for a standalone bullet line (skills, languages).
    fn visit_bullet(&mut self, kind: SectionKind, bullet: &BulletLine) {
        let _ = (kind, bullet);
    }

    /// Called for a titled entry (experience, education, certification).
    fn visit_entry(&mut self, kind: SectionKind, entry: &Entry) {
        let _ = (kind, entry);
    }

    /// Called after the items of a section.
    fn end_section(&mut self, section: &Section) {
        let _ = section;
    }

    /// Called once, after the last section.
    fn end_outline(&mut self) {}
}

/// Walk an outline in document order, dispatching to `visitor`.
pub fn walk<V: OutlineVisitor + ?Sized>(outline: &ResumeOutline, visitor: &mut V) {
    visitor.visit_header(&outline.header);

    for section in &outline.sections {
        visitor.start_section(section);
        for item in &section.items {
            match item {
                SectionItem::Paragraph(text) => visitor.visit_paragraph(section.kind, text),
                SectionItem::Bullet(bullet) => visitor.visit_bullet(section.kind, bullet),
                SectionItem::Entry(entry) => visitor.visit_entry(section.kind, entry),
            }
        }
        visitor.end_section(section);
    }

    visitor.end_outline();
}

/// Visitor that records section headings in emission order.
#[derive(Debug, Clone, Default)]
pub struct HeadingCollector {
    headings: Vec<String>,
}

impl HeadingCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Headings seen so far.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// Consume the collector, returning the headings.
    pub fn into_headings(self) -> Vec<String> {
        self.headings
    }
}

impl OutlineVisitor for HeadingCollector {
    fn start_section(&mut self, section: &Section) {
        self.headings.push(section.heading.clone());
    }
}

/// Visitor that forwards every callback to a chain of visitors, in order.
pub struct CompositeVisitor<'a> {
    visitors: Vec<&'a mut dyn OutlineVisitor>,
}

impl<'a> CompositeVisitor<'a> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Append a visitor to the chain.
    pub fn with_visitor(mut self, visitor: &'a mut dyn OutlineVisitor) -> Self {
        self.visitors.push(visitor);
        self
    }
}

impl Default for CompositeVisitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineVisitor for CompositeVisitor<'_> {
    fn visit_header(&mut self, header: &Header) {
        for visitor in &mut self.visitors {
            visitor.visit_header(header);
        }
    }

    fn start_section(&mut self, section: &Section) {
        for visitor in &mut self.visitors {
            visitor.start_section(section);
        }
    }

    fn visit_paragraph(&mut self, kind: SectionKind, text: &str) {
        for visitor in &mut self.visitors {
            visitor.visit_paragraph(kind, text);
        }
    }

    fn visit_bullet(&mut self, kind: SectionKind, bullet: &BulletLine) {
        for visitor in &mut self.visitors {
            visitor.visit_bullet(kind, bullet);
        }
    }

    fn visit_entry(&mut self, kind: SectionKind, entry: &Entry) {
        for visitor in &mut self.visitors {
            visitor.visit_entry(kind, entry);
        }
    }

    fn end_section(&mut self, section: &Section) {
        for visitor in &mut self.visitors {
            visitor.end_section(section);
        }
    }

    fn end_outline(&mut self) {
        for visitor in &mut self.visitors {
            visitor.end_outline();
        }
    }
}
