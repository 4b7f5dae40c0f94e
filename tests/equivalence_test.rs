//! PDF and DOCX render the same outline; these tests compare the two.

use cvforge::model::{Cv, CvData, Experience, SectionLabels, SkillGroup};
use cvforge::render::docx::{ParagraphStyle, BULLET_PREFIX};
use cvforge::render::{layout_pdf, render_docx, PageSetup, ResumeOutline, TextRole};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/full_cv.json");

fn fixture() -> Cv {
    cvforge::from_json(FIXTURE.as_bytes()).unwrap()
}

fn docx_texts(cv: &Cv, styles: &[ParagraphStyle]) -> Vec<String> {
    render_docx(cv)
        .unwrap()
        .paragraphs
        .into_iter()
        .filter(|p| styles.contains(&p.style))
        .map(|p| p.text.trim_start_matches(BULLET_PREFIX).to_string())
        .collect()
}

fn pdf_texts(cv: &Cv, role: TextRole) -> Vec<String> {
    layout_pdf(cv, &PageSetup::a4())
        .unwrap()
        .texts_with_role(role)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_headings_match() {
    let cv = fixture();
    let pdf = layout_pdf(&cv, &PageSetup::a4()).unwrap();
    let docx = render_docx(&cv).unwrap();

    assert_eq!(pdf.headings(), docx.headings());
    assert_eq!(
        pdf.headings(),
        vec![
            "Summary",
            "Skills",
            "Professional Experience",
            "Education",
            "Languages",
            "Certifications"
        ]
    );
}

#[test]
fn test_entry_headers_and_dates_match() {
    let cv = fixture();

    let headers = pdf_texts(&cv, TextRole::EntryHeader);
    assert_eq!(headers, docx_texts(&cv, &[ParagraphStyle::Heading2]));
    assert_eq!(
        headers,
        vec![
            "Lead Programmer | Analytical Engines Ltd (London)",
            "Correspondent | Royal Society",
            "Mathematics in Logic | Private Tutoring",
            "Fellow | Analytical Society",
        ]
    );

    let dates = pdf_texts(&cv, TextRole::DateCaption);
    assert_eq!(dates, docx_texts(&cv, &[ParagraphStyle::Meta]));
    assert_eq!(dates, vec!["Jan 1842 – Present", "Jun 1835 – Dec 1841", "Jan 1828 – Jun 1834", "1843"]);
}

#[test]
fn test_body_lines_match() {
    let cv = fixture();
    let body = pdf_texts(&cv, TextRole::Body);
    assert_eq!(
        body,
        docx_texts(&cv, &[ParagraphStyle::Normal, ParagraphStyle::Bullet])
    );
    assert!(body.contains(&"Wrote Note G".to_string()));
    assert!(body.contains(&"Mathematics: Calculus, Bernoulli numbers".to_string()));
    assert!(body.contains(&"English: Native".to_string()));
}

#[test]
fn test_header_lines_match() {
    let cv = fixture();
    assert_eq!(
        pdf_texts(&cv, TextRole::Name),
        docx_texts(&cv, &[ParagraphStyle::Title])
    );
    assert_eq!(
        pdf_texts(&cv, TextRole::ProfessionalTitle),
        docx_texts(&cv, &[ParagraphStyle::ProTitle])
    );
    assert_eq!(
        pdf_texts(&cv, TextRole::Contact),
        docx_texts(&cv, &[ParagraphStyle::Subtitle])
    );
}

#[test]
fn test_no_experience_heading_without_entries() {
    let mut data = CvData::default();
    data.summary = "Only a summary".into();
    data.skills = vec![SkillGroup {
        category: "Tools".into(),
        items: vec!["Rust".into()],
    }];
    let cv = Cv::new("Sparse", data);

    let pdf = layout_pdf(&cv, &PageSetup::a4()).unwrap();
    let docx = render_docx(&cv).unwrap();
    assert_eq!(pdf.headings(), vec!["Summary", "Skills"]);
    assert_eq!(docx.headings(), pdf.headings());
}

#[test]
fn test_custom_labels_in_both_formats() {
    let mut data = CvData::default();
    data.experience = vec![Experience {
        company: "Acme".into(),
        title: "Dev".into(),
        start_date: "2020-03".into(),
        current: true,
        ..Default::default()
    }];
    data.labels = Some(SectionLabels {
        experience: "Berufserfahrung".into(),
        present: "heute".into(),
        ..Default::default()
    });
    let cv = Cv::new("Lebenslauf", data);

    let pdf = layout_pdf(&cv, &PageSetup::a4()).unwrap();
    let docx = render_docx(&cv).unwrap();
    assert_eq!(pdf.headings(), vec!["Berufserfahrung"]);
    assert_eq!(docx.headings(), vec!["Berufserfahrung"]);
    assert_eq!(pdf_texts(&cv, TextRole::DateCaption), vec!["Mar 2020 – heute"]);
    assert_eq!(docx_texts(&cv, &[ParagraphStyle::Meta]), vec!["Mar 2020 – heute"]);
}

#[test]
fn test_outline_drives_both_formats() {
    let cv = fixture();
    let outline = ResumeOutline::build(&cv);
    let pdf = layout_pdf(&cv, &PageSetup::a4()).unwrap();
    assert_eq!(outline.headings(), pdf.headings());
}
