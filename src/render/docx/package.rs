//! OPC packaging: the static parts and the ZIP container.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{Error, Result};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Every part of the package, in write order.
pub const PARTS: [&str; 5] = [
    CONTENT_TYPES_PART,
    PACKAGE_RELS_PART,
    DOCUMENT_RELS_PART,
    STYLES_PART,
    DOCUMENT_PART,
];

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

// Sizes are half-points; colors match the PDF defaults of each role.
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/><w:sz w:val="20"/><w:color w:val="282828"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:before="240" w:after="60"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="26"/><w:color w:val="4E6B8A"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:before="120" w:after="40"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="22"/><w:color w:val="1E1E1E"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:jc w:val="center"/><w:spacing w:after="60"/></w:pPr>
    <w:rPr><w:sz w:val="36"/><w:color w:val="141414"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ProTitle">
    <w:name w:val="ProTitle"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:jc w:val="center"/><w:spacing w:after="60"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="28"/><w:color w:val="141414"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Subtitle">
    <w:name w:val="Subtitle"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:jc w:val="center"/><w:spacing w:after="120"/></w:pPr>
    <w:rPr><w:sz w:val="20"/><w:color w:val="505050"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Meta">
    <w:name w:val="Meta"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:after="40"/></w:pPr>
    <w:rPr><w:i/><w:sz w:val="20"/><w:color w:val="505050"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Bullet">
    <w:name w:val="Bullet"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:after="20"/><w:ind w:left="360"/></w:pPr>
  </w:style>
</w:styles>"#;

/// Assemble the five-part package around a rendered `document.xml`.
///
/// Entries carry a fixed 1980-01-01 timestamp so equal input yields equal
/// bytes. Failures name the part being written.
pub fn write_package(document_xml: &str) -> Result<Vec<u8>> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for part in PARTS {
        let content = match part {
            CONTENT_TYPES_PART => CONTENT_TYPES_XML,
            PACKAGE_RELS_PART => PACKAGE_RELS_XML,
            DOCUMENT_RELS_PART => DOCUMENT_RELS_XML,
            STYLES_PART => STYLES_XML,
            _ => document_xml,
        };
        zip.start_file(part, options)
            .map_err(|e| Error::archive(part, e))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| Error::archive(part, e))?;
    }

    let cursor = zip.finish().map_err(|e| Error::archive("central directory", e))?;
    let bytes = cursor.into_inner();
    log::debug!("Wrote DOCX package: {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zip::ZipArchive;

    #[test]
    fn test_package_contains_exactly_five_parts() {
        let bytes = write_package("<w:document/>").unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 5);
        for part in PARTS {
            assert!(names.contains(&part), "missing {part}");
        }
    }

    #[test]
    fn test_document_part_round_trips() {
        use std::io::Read;

        let bytes = write_package("<w:document>x</w:document>").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<w:document>x</w:document>");
    }

    #[test]
    fn test_fixed_timestamps() {
        let first = write_package("<a/>").unwrap();
        let second = write_package("<a/>").unwrap();
        assert_eq!(first, second);

        let mut archive = ZipArchive::new(Cursor::new(first)).unwrap();
        let entry = archive.by_index(0).unwrap();
        let modified = entry.last_modified().unwrap();
        assert_eq!(modified.year(), 1980);
        assert_eq!(modified.month(), 1);
        assert_eq!(modified.day(), 1);
    }

    #[test]
    fn test_styles_declares_all_styles() {
        for id in [
            "Normal", "Heading1", "Heading2", "Title", "ProTitle", "Subtitle", "Meta", "Bullet",
        ] {
            assert!(
                STYLES_XML.contains(&format!("w:styleId=\"{id}\"")),
                "missing style {id}"
            );
        }
    }
}
