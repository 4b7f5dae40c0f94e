//! Serialization of a laid-out résumé into a PDF byte stream.
//!
//! Each used face is embedded as a Type0 font over a CIDFontType2
//! descendant with Identity-H encoding, so text is written as big-endian
//! glyph ids. A `ToUnicode` CMap maps those ids back to characters for
//! text extraction. No timestamps or random identifiers are written, so
//! equal input yields equal bytes.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::fonts::{FaceKind, FontFace, FontSet, MM_PER_PT};
use super::layout::{PageContent, PdfLayout};
use crate::error::Result;

/// Producer recorded in the document information dictionary.
pub const PRODUCER: &str = concat!("cvforge ", env!("CARGO_PKG_VERSION"));

const PDF_VERSION: &str = "1.7";
const FLATE_LEVEL: u32 = 6;
const BFCHAR_CHUNK: usize = 100;

/// A glyph referenced by at least one run.
#[derive(Debug, Clone, Copy)]
struct UsedGlyph {
    advance: u16,
    /// Character the glyph was first used for; `None` for `.notdef`
    source: Option<char>,
}

type GlyphTable = BTreeMap<FaceKind, BTreeMap<u16, UsedGlyph>>;

/// Serialize `layout` as a complete PDF document.
pub fn write_pdf(layout: &PdfLayout, fonts: &FontSet, title: &str) -> Result<Vec<u8>> {
    let mut doc = Document::with_version(PDF_VERSION);
    let mut glyphs = GlyphTable::new();
    let mut missing = BTreeSet::new();

    let pages_id = doc.new_object_id();
    // Pages reference one shared resource dictionary, filled in once the
    // used faces are known.
    let resources_id = doc.new_object_id();
    let mut kids = Vec::with_capacity(layout.pages.len());

    for page in &layout.pages {
        let content = encode_page(page, layout.page.height_mm, fonts, &mut glyphs, &mut missing)?;
        let content_id = doc.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            deflate(&content)?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    for c in &missing {
        log::warn!("No glyph for {:?} (U+{:04X}) in embedded font", c, u32::from(*c));
    }

    let mut font_resources = Dictionary::new();
    for (kind, used) in &glyphs {
        let font_id = embed_face(&mut doc, fonts.face(*kind), used)?;
        font_resources.set(kind.resource_name(), font_id);
    }

    doc.objects.insert(
        resources_id,
        Object::Dictionary(dictionary! { "Font" => font_resources }),
    );

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(round2(to_pt(layout.page.width_mm))),
                Object::Real(round2(to_pt(layout.page.height_mm))),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(title),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    log::debug!(
        "Wrote PDF: {} pages, {} faces, {} bytes",
        page_count,
        glyphs.len(),
        buffer.len()
    );
    Ok(buffer)
}

fn encode_page(
    page: &PageContent,
    page_height_mm: f32,
    fonts: &FontSet,
    glyphs: &mut GlyphTable,
    missing: &mut BTreeSet<char>,
) -> Result<Vec<u8>> {
    let mut operations = Vec::with_capacity(page.runs.len() * 6);

    for run in &page.runs {
        let face = fonts.face(run.face);
        let used = glyphs.entry(run.face).or_default();

        let mut encoded = Vec::with_capacity(run.text.len() * 2);
        for c in run.text.chars() {
            let glyph = face.glyph(c);
            if !glyph.mapped {
                missing.insert(c);
            }
            used.entry(glyph.id).or_insert(UsedGlyph {
                advance: glyph.advance,
                source: glyph.mapped.then_some(c),
            });
            encoded.extend_from_slice(&glyph.id.to_be_bytes());
        }

        let [r, g, b] = run.color.to_unit();
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![run.face.resource_name().into(), round2(run.size_pt).into()],
        ));
        operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        operations.push(Operation::new(
            "Td",
            vec![
                round2(to_pt(run.x_mm)).into(),
                round2(to_pt(page_height_mm - run.baseline_mm)).into(),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Hexadecimal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Ok(Content { operations }.encode()?)
}

fn embed_face(doc: &mut Document, face: &FontFace, used: &BTreeMap<u16, UsedGlyph>) -> Result<ObjectId> {
    let kind = face.kind();
    let name = kind.postscript_name();
    let metrics = face.descriptor_metrics();

    let program = face.data();
    let file_id = doc.add_object(Stream::new(
        dictionary! {
            "Length1" => program.len() as i64,
            "Filter" => "FlateDecode",
        },
        deflate(program)?,
    ));

    // Nonsymbolic, plus Italic for the oblique faces.
    let flags = if kind.is_italic() { 32 + 64 } else { 32 };
    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => name,
        "Flags" => flags,
        "FontBBox" => metrics.bbox.iter().map(|v| Object::from(*v)).collect::<Vec<_>>(),
        "ItalicAngle" => metrics.italic_angle,
        "Ascent" => metrics.ascent,
        "Descent" => metrics.descent,
        "CapHeight" => metrics.cap_height,
        "StemV" => metrics.stem_v,
        "FontFile2" => file_id,
    });

    let descendant_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => name,
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
        "FontDescriptor" => descriptor_id,
        "DW" => 1000,
        "W" => width_array(face, used),
        "CIDToGIDMap" => "Identity",
    });

    let cmap = to_unicode_cmap(used);
    let to_unicode_id = doc.add_object(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        deflate(cmap.as_bytes())?,
    ));

    Ok(doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => name,
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![Object::Reference(descendant_id)],
        "ToUnicode" => to_unicode_id,
    }))
}

/// `W` array grouping consecutive glyph ids: `[first [w1 w2 ...] ...]`.
fn width_array(face: &FontFace, used: &BTreeMap<u16, UsedGlyph>) -> Vec<Object> {
    let mut array = Vec::new();
    let mut run: Vec<Object> = Vec::new();
    let mut run_start: Option<u16> = None;
    let mut previous: Option<u16> = None;

    for (&gid, glyph) in used {
        let contiguous = previous.is_some_and(|p| p.checked_add(1) == Some(gid));
        if !contiguous {
            if let Some(start) = run_start.take() {
                array.push(Object::from(start));
                array.push(Object::Array(std::mem::take(&mut run)));
            }
            run_start = Some(gid);
        }
        run.push(Object::from(face.to_pdf_units(i32::from(glyph.advance))));
        previous = Some(gid);
    }
    if let Some(start) = run_start {
        array.push(Object::from(start));
        array.push(Object::Array(run));
    }
    array
}

fn to_unicode_cmap(used: &BTreeMap<u16, UsedGlyph>) -> String {
    let mapped: Vec<(u16, char)> = used
        .iter()
        .filter_map(|(&gid, glyph)| glyph.source.map(|c| (gid, c)))
        .collect();

    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    for chunk in mapped.chunks(BFCHAR_CHUNK) {
        cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (gid, c) in chunk {
            let mut units = [0u16; 2];
            let hex: String = c
                .encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{:04X}", u))
                .collect();
            cmap.push_str(&format!("<{:04X}> <{}>\n", gid, hex));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );
    cmap
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(FLATE_LEVEL));
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
