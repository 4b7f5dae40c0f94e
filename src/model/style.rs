//! Style overrides and section labels supplied with a CV.

use serde::{Deserialize, Serialize};

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to the 0.0..=1.0 range used by PDF color operators.
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }

    /// Uppercase hex form (`4E6B8A`) as used by WordprocessingML.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Appearance of a text element.
///
/// `color` is kept as the raw integer list received from the caller; use
/// [`FontStyle::rgb`] to obtain a validated triple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    /// Point size; values <= 0 mean "unset"
    pub size: f32,
    /// RGB components, expected to be three integers in 0..=255
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub color: Vec<i32>,
    pub bold: bool,
    pub italic: bool,
}

impl FontStyle {
    /// Create a style from its four attributes.
    pub fn new(size: f32, color: Rgb, bold: bool, italic: bool) -> Self {
        Self {
            size,
            color: vec![i32::from(color.0), i32::from(color.1), i32::from(color.2)],
            bold,
            italic,
        }
    }

    /// Whether this style counts as a real override (size strictly positive).
    pub fn is_set(&self) -> bool {
        self.size > 0.0
    }

    /// The color as a triple, clamping components into 0..=255.
    ///
    /// Returns `None` unless exactly three components are present.
    pub fn rgb(&self) -> Option<Rgb> {
        match self.color.as_slice() {
            [r, g, b] => Some(Rgb(clamp_component(*r), clamp_component(*g), clamp_component(*b))),
            _ => None,
        }
    }

    /// Copy of this style with italic set.
    pub fn italicized(&self) -> Self {
        Self {
            italic: true,
            ..self.clone()
        }
    }
}

fn clamp_component(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Per-slot style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Candidate name
    pub title1: Option<FontStyle>,
    /// Section headings
    pub title2: Option<FontStyle>,
    /// Entry headers
    pub text1: Option<FontStyle>,
    /// Body text and bullets
    pub text2: Option<FontStyle>,
    /// Contact line and captions
    pub sub: Option<FontStyle>,
}

/// Caller-supplied replacements for the built-in headings and words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLabels {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub languages: String,
    pub certifications: String,
    /// Word used for ongoing date ranges
    pub present: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_requires_three_components() {
        let mut style = FontStyle::new(12.0, Rgb(1, 2, 3), false, false);
        assert_eq!(style.rgb(), Some(Rgb(1, 2, 3)));

        style.color = vec![];
        assert_eq!(style.rgb(), None);

        style.color = vec![10, 20];
        assert_eq!(style.rgb(), None);
    }

    #[test]
    fn test_rgb_clamps() {
        let style = FontStyle {
            size: 10.0,
            color: vec![-5, 300, 128],
            ..Default::default()
        };
        assert_eq!(style.rgb(), Some(Rgb(0, 255, 128)));
    }

    #[test]
    fn test_hex_and_unit() {
        assert_eq!(Rgb(78, 107, 138).to_hex(), "4E6B8A");
        assert_eq!(Rgb(255, 0, 0).to_unit(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_style_config_partial_json() {
        let config: StyleConfig =
            serde_json::from_str(r#"{"title1": {"size": 20}, "sub": null}"#).unwrap();
        let title1 = config.title1.unwrap();
        assert!(title1.is_set());
        assert!(title1.color.is_empty());
        assert!(config.sub.is_none());
        assert!(config.text2.is_none());
    }
}
