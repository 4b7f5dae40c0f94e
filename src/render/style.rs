//! Style resolution: caller overrides over built-in defaults.
//!
//! Each of the five slots is resolved independently and wholesale. An
//! override whose size is strictly positive replaces the default entirely
//! (size, color, bold, italic); anything else leaves the default in place.
//! There is no field-level merge inside a slot.

use crate::model::{FontStyle, Rgb, StyleConfig};

/// Point size of the professional title line.
pub const PRO_TITLE_SIZE: f32 = 14.0;

/// The five configurable style slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    /// Candidate name
    Title1,
    /// Section headings
    Title2,
    /// Entry headers
    Text1,
    /// Body text and bullets
    Text2,
    /// Contact line and captions
    Sub,
}

impl StyleSlot {
    /// All slots in declaration order.
    pub const ALL: [StyleSlot; 5] = [
        StyleSlot::Title1,
        StyleSlot::Title2,
        StyleSlot::Text1,
        StyleSlot::Text2,
        StyleSlot::Sub,
    ];

    /// The compiled-in style for this slot.
    pub fn default_style(self) -> FontStyle {
        let color = self.default_color();
        match self {
            StyleSlot::Title1 => FontStyle::new(18.0, color, false, false),
            StyleSlot::Title2 => FontStyle::new(13.0, color, true, false),
            StyleSlot::Text1 => FontStyle::new(11.0, color, true, false),
            StyleSlot::Text2 => FontStyle::new(10.0, color, false, false),
            StyleSlot::Sub => FontStyle::new(10.0, color, false, false),
        }
    }

    /// The compiled-in color for this slot.
    pub fn default_color(self) -> Rgb {
        match self {
            StyleSlot::Title1 => Rgb(20, 20, 20),
            StyleSlot::Title2 => Rgb(78, 107, 138),
            StyleSlot::Text1 => Rgb(30, 30, 30),
            StyleSlot::Text2 => Rgb(40, 40, 40),
            StyleSlot::Sub => Rgb(80, 80, 80),
        }
    }

    fn override_in(self, config: &StyleConfig) -> Option<&FontStyle> {
        match self {
            StyleSlot::Title1 => config.title1.as_ref(),
            StyleSlot::Title2 => config.title2.as_ref(),
            StyleSlot::Text1 => config.text1.as_ref(),
            StyleSlot::Text2 => config.text2.as_ref(),
            StyleSlot::Sub => config.sub.as_ref(),
        }
    }
}

/// Logical role of a rendered line; each maps to exactly one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Candidate name
    Name,
    /// Professional title under the name
    ProfessionalTitle,
    /// Contact line
    Contact,
    /// Section heading
    SectionHeading,
    /// Entry header (position, degree, certification)
    EntryHeader,
    /// Date caption under an entry header
    DateCaption,
    /// Body paragraph or bullet text
    Body,
}

/// A concrete, paint-ready style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
}

/// The concrete five-slot style table used by one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyles {
    title1: FontStyle,
    title2: FontStyle,
    text1: FontStyle,
    text2: FontStyle,
    sub: FontStyle,
}

impl EffectiveStyles {
    /// Resolve optional caller overrides against the built-in defaults.
    pub fn resolve(config: Option<&StyleConfig>) -> Self {
        let pick = |slot: StyleSlot| -> FontStyle {
            config
                .and_then(|c| slot.override_in(c))
                .filter(|style| style.is_set())
                .cloned()
                .unwrap_or_else(|| slot.default_style())
        };

        Self {
            title1: pick(StyleSlot::Title1),
            title2: pick(StyleSlot::Title2),
            text1: pick(StyleSlot::Text1),
            text2: pick(StyleSlot::Text2),
            sub: pick(StyleSlot::Sub),
        }
    }

    /// The resolved style of a slot, exactly as resolution produced it.
    pub fn slot(&self, slot: StyleSlot) -> &FontStyle {
        match slot {
            StyleSlot::Title1 => &self.title1,
            StyleSlot::Title2 => &self.title2,
            StyleSlot::Text1 => &self.text1,
            StyleSlot::Text2 => &self.text2,
            StyleSlot::Sub => &self.sub,
        }
    }

    /// Bold 14pt style sharing the name's color.
    pub fn professional_title(&self) -> FontStyle {
        FontStyle {
            size: PRO_TITLE_SIZE,
            bold: true,
            ..self.title1.clone()
        }
    }

    /// Italic copy of the `Sub` slot.
    pub fn date_caption(&self) -> FontStyle {
        self.sub.italicized()
    }

    /// The paint used for a role.
    ///
    /// A resolved color that is not a valid triple paints with the
    /// originating slot's built-in color.
    pub fn paint(&self, role: TextRole) -> TextPaint {
        let (style, slot) = match role {
            TextRole::Name => (self.title1.clone(), StyleSlot::Title1),
            TextRole::ProfessionalTitle => (self.professional_title(), StyleSlot::Title1),
            TextRole::Contact => (self.sub.clone(), StyleSlot::Sub),
            TextRole::SectionHeading => (self.title2.clone(), StyleSlot::Title2),
            TextRole::EntryHeader => (self.text1.clone(), StyleSlot::Text1),
            TextRole::DateCaption => (self.date_caption(), StyleSlot::Sub),
            TextRole::Body => (self.text2.clone(), StyleSlot::Text2),
        };

        TextPaint {
            size: style.size,
            color: style.rgb().unwrap_or_else(|| slot.default_color()),
            bold: style.bold,
            italic: style.italic,
        }
    }
}

impl Default for EffectiveStyles {
    fn default() -> Self {
        Self::resolve(None)
    }
}
