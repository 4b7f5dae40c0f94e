//! Export statistics.

use super::outline::{BulletLine, Entry, Section, SectionKind};
use super::visitor::OutlineVisitor;
use serde::{Deserialize, Serialize};

/// Statistics collected while rendering a CV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Number of PDF pages (zero for other formats)
    pub page_count: u32,

    /// Number of rendered sections
    pub section_count: u32,

    /// Number of titled entries
    pub entry_count: u32,

    /// Number of bullet lines, standalone or inside entries
    pub bullet_count: u32,

    /// Number of free-text paragraphs
    pub paragraph_count: u32,
}

impl ExportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutlineVisitor for ExportStats {
    fn start_section(&mut self, _section: &Section) {
        self.section_count += 1;
    }

    fn visit_paragraph(&mut self, _kind: SectionKind, _text: &str) {
        self.paragraph_count += 1;
    }

    fn visit_bullet(&mut self, _kind: SectionKind, _bullet: &BulletLine) {
        self.bullet_count += 1;
    }

    fn visit_entry(&mut self, _kind: SectionKind, entry: &Entry) {
        self.entry_count += 1;
        self.bullet_count += entry.bullets.len() as u32;
        if entry.description.is_some() {
            self.paragraph_count += 1;
        }
    }
}
