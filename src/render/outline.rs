//! Normalized, render-ready representation of a CV.
//!
//! The outline is built fresh for every export call. It fixes section
//! order, applies the skip-if-empty rule, resolves labels and runs every
//! free-text field through the normalizer, so renderers only decide on
//! markup and geometry.

use crate::model::{Certification, Cv, CvData, Education, Experience, SectionLabels};

use super::dates::{format_date_range_with, DEFAULT_PRESENT_LABEL};
use super::normalize::{
    degree_with_field, join_non_empty, label_or, label_value, normalize_description,
    with_location, CONTACT_SEPARATOR, HEADER_SEPARATOR,
};

/// The sections of a résumé, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Languages,
    Certifications,
}

impl SectionKind {
    /// Fixed order in which sections are emitted.
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Languages,
        SectionKind::Certifications,
    ];

    /// Built-in heading text.
    pub fn default_label(self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Professional Experience",
            SectionKind::Education => "Education",
            SectionKind::Languages => "Languages",
            SectionKind::Certifications => "Certifications",
        }
    }

    /// Heading text, honoring a non-blank caller override.
    pub fn label<'a>(self, labels: Option<&'a SectionLabels>) -> &'a str {
        let custom = labels.map(|l| match self {
            SectionKind::Summary => l.summary.as_str(),
            SectionKind::Skills => l.skills.as_str(),
            SectionKind::Experience => l.experience.as_str(),
            SectionKind::Education => l.education.as_str(),
            SectionKind::Languages => l.languages.as_str(),
            SectionKind::Certifications => l.certifications.as_str(),
        });
        label_or(custom.unwrap_or(""), self.default_label())
    }
}

/// Name, professional title and contact line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Full name, or the CV title when no name is set
    pub name: String,
    pub professional_title: Option<String>,
    pub contact: Option<String>,
}

/// A bullet line: optional emphasized lead followed by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletLine {
    /// Emphasized prefix (a skill category); may be empty
    pub lead: String,
    pub text: String,
}

impl BulletLine {
    /// Bullet without a lead.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            lead: String::new(),
            text: text.into(),
        }
    }

    /// The full line as displayed, `lead: text` when a lead is present.
    pub fn display(&self) -> String {
        label_value(&self.lead, &self.text)
    }
}

/// A titled entry: a position, degree or certification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Composed header line; may be empty
    pub header: String,
    /// Date caption; `None` when the line must be omitted
    pub date: Option<String>,
    /// Normalized description bullets
    pub bullets: Vec<String>,
    /// Description rendered as a paragraph rather than bullets
    pub description: Option<String>,
}

/// One item inside a section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionItem {
    Paragraph(String),
    Bullet(BulletLine),
    Entry(Entry),
}

/// A non-empty section with its resolved heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    pub items: Vec<SectionItem>,
}

/// The full normalized résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeOutline {
    pub header: Header,
    pub sections: Vec<Section>,
}

impl ResumeOutline {
    /// Build the outline for a CV record.
    pub fn build(cv: &Cv) -> Self {
        let data = &cv.data;
        let labels = data.labels.as_ref();

        let sections = SectionKind::ORDER
            .iter()
            .filter_map(|&kind| {
                let items = section_items(kind, data);
                if items.is_empty() {
                    return None;
                }
                Some(Section {
                    kind,
                    heading: kind.label(labels).to_string(),
                    items,
                })
            })
            .collect();

        Self {
            header: build_header(cv),
            sections,
        }
    }

    /// Section headings in emission order.
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }

    /// Find a section by kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

fn build_header(cv: &Cv) -> Header {
    let personal = &cv.data.personal;

    let name = personal.full_name();
    let name = if name.is_empty() {
        cv.title.clone()
    } else {
        name
    };

    let contact = join_non_empty(
        [
            personal.email.as_str(),
            personal.phone.as_str(),
            personal.linkedin.as_str(),
            personal.website.as_str(),
            personal.location.as_str(),
        ],
        CONTACT_SEPARATOR,
    );

    Header {
        name,
        professional_title: non_empty(&personal.title),
        contact: non_empty(&contact),
    }
}

fn section_items(kind: SectionKind, data: &CvData) -> Vec<SectionItem> {
    match kind {
        SectionKind::Summary => match non_empty(data.summary.trim()) {
            Some(summary) => vec![SectionItem::Paragraph(summary)],
            None => Vec::new(),
        },
        SectionKind::Skills => data
            .skills
            .iter()
            .map(|group| {
                SectionItem::Bullet(BulletLine {
                    lead: group.category.clone(),
                    text: group.items.join(", "),
                })
            })
            .collect(),
        SectionKind::Experience => {
            let present = present_label(data.labels.as_ref());
            data.experience
                .iter()
                .map(|exp| SectionItem::Entry(experience_entry(exp, present)))
                .collect()
        }
        SectionKind::Education => data
            .education
            .iter()
            .map(|edu| SectionItem::Entry(education_entry(edu)))
            .collect(),
        SectionKind::Languages => data
            .languages
            .iter()
            .map(|lang| {
                SectionItem::Bullet(BulletLine::plain(label_value(
                    &lang.language,
                    &lang.proficiency,
                )))
            })
            .collect(),
        SectionKind::Certifications => data
            .certifications
            .iter()
            .map(|cert| SectionItem::Entry(certification_entry(cert)))
            .collect(),
    }
}

fn present_label(labels: Option<&SectionLabels>) -> &str {
    label_or(
        labels.map(|l| l.present.as_str()).unwrap_or(""),
        DEFAULT_PRESENT_LABEL,
    )
}

fn experience_entry(exp: &Experience, present: &str) -> Entry {
    let header = join_non_empty([exp.title.as_str(), exp.company.as_str()], HEADER_SEPARATOR);
    Entry {
        header: with_location(header, &exp.location),
        date: non_empty(&format_date_range_with(
            &exp.start_date,
            &exp.end_date,
            exp.current,
            present,
        )),
        bullets: normalize_description(&exp.description),
        description: None,
    }
}

fn education_entry(edu: &Education) -> Entry {
    let degree = degree_with_field(&edu.degree, &edu.field);
    Entry {
        header: join_non_empty([degree.as_str(), edu.institution.as_str()], HEADER_SEPARATOR),
        date: non_empty(&format_date_range_with(
            &edu.start_date,
            &edu.end_date,
            false,
            DEFAULT_PRESENT_LABEL,
        )),
        bullets: Vec::new(),
        description: non_empty(edu.description.trim()),
    }
}

fn certification_entry(cert: &Certification) -> Entry {
    Entry {
        header: join_non_empty([cert.name.as_str(), cert.issuer.as_str()], HEADER_SEPARATOR),
        date: non_empty(&cert.date),
        bullets: Vec::new(),
        description: None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
