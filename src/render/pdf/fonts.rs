//! Embedded DejaVu Sans faces and their metrics.
//!
//! The four TTF payloads are compiled into the binary and parsed once per
//! process on first use. After that the set is read-only and shared by
//! every concurrent render.

use std::sync::OnceLock;

use ttf_parser::{Face, GlyphId};

use crate::error::{Error, Result};

const REGULAR: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
const BOLD: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");
const OBLIQUE: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-Oblique.ttf");
const BOLD_OBLIQUE: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-BoldOblique.ttf");

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

static FONTS: OnceLock<std::result::Result<FontSet, String>> = OnceLock::new();

/// One of the four embedded faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaceKind {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FaceKind {
    pub const ALL: [FaceKind; 4] = [
        FaceKind::Regular,
        FaceKind::Bold,
        FaceKind::Italic,
        FaceKind::BoldItalic,
    ];

    /// Face selected purely by the bold and italic flags.
    pub fn select(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FaceKind::Regular,
            (true, false) => FaceKind::Bold,
            (false, true) => FaceKind::Italic,
            (true, true) => FaceKind::BoldItalic,
        }
    }

    /// PostScript name written as `BaseFont`.
    pub fn postscript_name(self) -> &'static str {
        match self {
            FaceKind::Regular => "DejaVuSans",
            FaceKind::Bold => "DejaVuSans-Bold",
            FaceKind::Italic => "DejaVuSans-Oblique",
            FaceKind::BoldItalic => "DejaVuSans-BoldOblique",
        }
    }

    /// Key in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FaceKind::Regular => "F1",
            FaceKind::Bold => "F2",
            FaceKind::Italic => "F3",
            FaceKind::BoldItalic => "F4",
        }
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FaceKind::Italic | FaceKind::BoldItalic)
    }

    fn payload(self) -> &'static [u8] {
        match self {
            FaceKind::Regular => REGULAR,
            FaceKind::Bold => BOLD,
            FaceKind::Italic => OBLIQUE,
            FaceKind::BoldItalic => BOLD_OBLIQUE,
        }
    }
}

/// A glyph resolved for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub id: u16,
    /// Horizontal advance in font units
    pub advance: u16,
    /// False when the face has no glyph and `.notdef` is used
    pub mapped: bool,
}

/// A parsed face with the metrics needed for layout and embedding.
pub struct FontFace {
    kind: FaceKind,
    data: &'static [u8],
    face: Face<'static>,
}

impl FontFace {
    fn parse(kind: FaceKind) -> Result<Self> {
        let data = kind.payload();
        let face = Face::parse(data, 0)
            .map_err(|e| Error::FontLoad(format!("{}: {}", kind.postscript_name(), e)))?;
        Ok(Self { kind, data, face })
    }

    pub fn kind(&self) -> FaceKind {
        self.kind
    }

    /// Raw TrueType program.
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Resolve a character, falling back to glyph 0.
    pub fn glyph(&self, c: char) -> Glyph {
        match self.face.glyph_index(c) {
            Some(id) => Glyph {
                id: id.0,
                advance: self.advance(id),
                mapped: true,
            },
            None => Glyph {
                id: 0,
                advance: self.advance(GlyphId(0)),
                mapped: false,
            },
        }
    }

    fn advance(&self, id: GlyphId) -> u16 {
        self.face.glyph_hor_advance(id).unwrap_or(0)
    }

    /// Scale a font-unit value to the PDF 1000-unit glyph space.
    pub fn to_pdf_units(&self, value: i32) -> i32 {
        let upem = i32::from(self.units_per_em().max(1));
        (value * 1000 + upem / 2).div_euclid(upem)
    }

    /// Rendered width of `text` in millimetres at `size_pt`.
    pub fn text_width_mm(&self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.glyph(c).advance)).sum();
        self.units_to_mm(units, size_pt)
    }

    /// Width of one character in millimetres at `size_pt`.
    pub fn char_width_mm(&self, c: char, size_pt: f32) -> f32 {
        self.units_to_mm(u32::from(self.glyph(c).advance), size_pt)
    }

    fn units_to_mm(&self, units: u32, size_pt: f32) -> f32 {
        units as f32 / f32::from(self.units_per_em().max(1)) * size_pt * MM_PER_PT
    }

    /// Descriptor metrics in PDF glyph space.
    pub fn descriptor_metrics(&self) -> DescriptorMetrics {
        let bbox = self.face.global_bounding_box();
        let ascent = self.to_pdf_units(i32::from(self.face.ascender()));
        DescriptorMetrics {
            ascent,
            descent: self.to_pdf_units(i32::from(self.face.descender())),
            cap_height: self
                .face
                .capital_height()
                .map(|h| self.to_pdf_units(i32::from(h)))
                .unwrap_or(ascent),
            bbox: [
                self.to_pdf_units(i32::from(bbox.x_min)),
                self.to_pdf_units(i32::from(bbox.y_min)),
                self.to_pdf_units(i32::from(bbox.x_max)),
                self.to_pdf_units(i32::from(bbox.y_max)),
            ],
            italic_angle: if self.kind.is_italic() { -11.0 } else { 0.0 },
            stem_v: if matches!(self.kind, FaceKind::Bold | FaceKind::BoldItalic) {
                120
            } else {
                80
            },
        }
    }
}

/// Values for a PDF `FontDescriptor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub cap_height: i32,
    pub bbox: [i32; 4],
    pub italic_angle: f32,
    pub stem_v: i32,
}

/// The four embedded faces.
pub struct FontSet {
    faces: [FontFace; 4],
}

impl FontSet {
    fn load() -> std::result::Result<Self, String> {
        let parse = |kind| FontFace::parse(kind).map_err(|e| e.to_string());
        Ok(Self {
            faces: [
                parse(FaceKind::Regular)?,
                parse(FaceKind::Bold)?,
                parse(FaceKind::Italic)?,
                parse(FaceKind::BoldItalic)?,
            ],
        })
    }

    pub fn face(&self, kind: FaceKind) -> &FontFace {
        match kind {
            FaceKind::Regular => &self.faces[0],
            FaceKind::Bold => &self.faces[1],
            FaceKind::Italic => &self.faces[2],
            FaceKind::BoldItalic => &self.faces[3],
        }
    }
}

/// The process-wide font set, parsed on first use.
pub fn font_set() -> Result<&'static FontSet> {
    FONTS
        .get_or_init(|| {
            log::debug!("Parsing embedded font set");
            FontSet::load()
        })
        .as_ref()
        .map_err(|e| Error::FontLoad(e.clone()))
}
