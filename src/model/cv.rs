//! Résumé content types.

use super::{SectionLabels, StyleConfig};
use serde::{Deserialize, Serialize};

/// A CV record handed to the export engine: a title plus its content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cv {
    /// Document title, used for the suggested filename and as a name fallback
    pub title: String,

    /// Structured résumé content
    pub data: CvData,
}

impl Cv {
    /// Create a CV record from a title and its content.
    pub fn new(title: impl Into<String>, data: CvData) -> Self {
        Self {
            title: title.into(),
            data,
        }
    }
}

/// The semantic résumé content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvData {
    /// Contact and personal details
    pub personal: PersonalInfo,

    /// Free-text professional summary
    pub summary: String,

    /// Work history, most relevant first
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub experience: Vec<Experience>,

    /// Education history
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub education: Vec<Education>,

    /// Skill groups
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub skills: Vec<SkillGroup>,

    /// Spoken languages
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub languages: Vec<Language>,

    /// Professional certifications
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub certifications: Vec<Certification>,

    /// Optional style overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleConfig>,

    /// Optional heading/label overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<SectionLabels>,
}

/// Contact and personal details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    /// Professional title shown under the name
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

impl PersonalInfo {
    /// Full name, trimmed. Empty when neither name part is set.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A single work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub location: String,
    /// Start date in `YYYY-MM` form
    pub start_date: String,
    /// End date in `YYYY-MM` form
    pub end_date: String,
    /// Whether the position is ongoing
    pub current: bool,
    /// Free text; each non-empty line becomes a bullet
    pub description: String,
}

/// A single education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// A category of skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub items: Vec<String>,
}

/// A language and proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

/// A professional certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    /// Free-form date string, rendered verbatim
    pub date: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "title": "Backend CV",
            "data": {
                "personal": {"firstName": "Ada", "lastName": "Lovelace", "linkedin": "in/ada"},
                "experience": [{"company": "Engines Ltd", "startDate": "2021-04", "current": true}]
            }
        }"#;

        let cv: Cv = serde_json::from_str(json).unwrap();
        assert_eq!(cv.title, "Backend CV");
        assert_eq!(cv.data.personal.first_name, "Ada");
        assert_eq!(cv.data.personal.linkedin, "in/ada");
        assert_eq!(cv.data.experience[0].start_date, "2021-04");
        assert!(cv.data.experience[0].current);
        assert!(cv.data.style.is_none());
        assert!(cv.data.education.is_empty());
    }

    #[test]
    fn test_full_name_trims() {
        let mut personal = PersonalInfo::default();
        assert_eq!(personal.full_name(), "");

        personal.last_name = "Hopper".to_string();
        assert_eq!(personal.full_name(), "Hopper");

        personal.first_name = "Grace".to_string();
        assert_eq!(personal.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_serialize_skips_absent_overrides() {
        let json = serde_json::to_string(&CvData::default()).unwrap();
        assert!(!json.contains("\"style\""));
        assert!(!json.contains("\"labels\""));
        assert!(json.contains("\"certifications\""));
    }
}
