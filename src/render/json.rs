//! JSON passthrough and import for CV records.

use crate::error::Result;
use crate::model::{Cv, CvData, CvExport, CvVersion};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Title given to imported documents that carry none.
pub const IMPORTED_TITLE: &str = "Imported CV";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an export document, including any version history.
pub fn to_json(export: &CvExport, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(export)?,
        JsonFormat::Compact => serde_json::to_string(export)?,
    };
    Ok(json)
}

/// Serialize a CV as an export document stamped with `exported_at`.
pub fn cv_to_json(cv: &Cv, exported_at: DateTime<Utc>, format: JsonFormat) -> Result<String> {
    to_json(&CvExport::new(cv, exported_at), format)
}

/// A CV read back from JSON, with any version history it carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedCv {
    pub cv: Cv,
    /// Snapshots to re-create alongside the CV, oldest first as exported
    pub versions: Vec<CvVersion>,
}

/// Either shape accepted on import; export-only fields are ignored.
#[derive(Default, Deserialize)]
#[serde(default)]
struct ImportDocument {
    title: String,
    data: CvData,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    versions: Vec<CvVersion>,
}

/// Parse a CV and its version history from JSON.
///
/// Accepts both an export document and a bare `{title, data}` record.
/// A blank title becomes [`IMPORTED_TITLE`].
pub fn import_json(bytes: &[u8]) -> Result<ImportedCv> {
    let doc: ImportDocument = serde_json::from_slice(bytes)?;
    let title = if doc.title.trim().is_empty() {
        IMPORTED_TITLE.to_string()
    } else {
        doc.title
    };
    Ok(ImportedCv {
        cv: Cv::new(title, doc.data),
        versions: doc.versions,
    })
}

/// Parse a CV from JSON, discarding any version history.
///
/// See [`import_json`] for the accepted shapes.
pub fn from_json(bytes: &[u8]) -> Result<Cv> {
    Ok(import_json(bytes)?.cv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CvData, CvVersion};
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let mut data = CvData::default();
        data.summary = "Hi".into();
        let json = cv_to_json(&Cv::new("Test", data), stamp(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Test\""));
        assert!(json.contains("\"exportedAt\": \"2024-05-01T12:00:00Z\""));
        assert!(!json.contains("versions"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = cv_to_json(&Cv::default(), stamp(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_export_with_versions() {
        let export = CvExport::new(&Cv::new("T", CvData::default()), stamp()).with_versions(vec![
            CvVersion {
                id: "v1".into(),
                cv_id: "cv1".into(),
                data: CvData::default(),
                message: "first".into(),
                created_at: stamp(),
            },
        ]);
        let json = to_json(&export, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"cvId\":\"cv1\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_from_json_round_trips_export() {
        let mut data = CvData::default();
        data.personal.first_name = "Grace".into();
        let cv = Cv::new("Mine", data);
        let json = cv_to_json(&cv, stamp(), JsonFormat::Pretty).unwrap();
        assert_eq!(from_json(json.as_bytes()).unwrap(), cv);
    }

    #[test]
    fn test_from_json_defaults_title() {
        let cv = from_json(br#"{"data": {"summary": "x"}}"#).unwrap();
        assert_eq!(cv.title, IMPORTED_TITLE);
        assert_eq!(cv.data.summary, "x");
    }

    #[test]
    fn test_import_keeps_versions() {
        let export = CvExport::new(&Cv::new("Versioned", CvData::default()), stamp()).with_versions(vec![
            CvVersion {
                id: "v1".into(),
                cv_id: "cv1".into(),
                data: CvData {
                    summary: "older".into(),
                    ..Default::default()
                },
                message: "first draft".into(),
                created_at: stamp(),
            },
        ]);
        let json = to_json(&export, JsonFormat::Compact).unwrap();

        let imported = import_json(json.as_bytes()).unwrap();
        assert_eq!(imported.cv.title, "Versioned");
        assert_eq!(imported.versions.len(), 1);
        assert_eq!(imported.versions[0].message, "first draft");
        assert_eq!(imported.versions[0].data.summary, "older");
    }

    #[test]
    fn test_import_bare_record_has_no_versions() {
        let imported = import_json(br#"{"title": "Plain", "data": {}, "versions": null}"#).unwrap();
        assert_eq!(imported.cv.title, "Plain");
        assert!(imported.versions.is_empty());
    }

    #[test]
    fn test_from_json_accepts_null_lists() {
        let json = br#"{
            "title": "Nulls",
            "data": {
                "personal": {"firstName": "Ada"},
                "summary": "",
                "experience": null,
                "education": null,
                "skills": [{"category": "Tools", "items": null}],
                "languages": null,
                "certifications": null,
                "style": {
                    "title1": {"size": 22, "color": [10, 20, 30], "bold": true, "italic": false},
                    "title2": {"size": 0, "color": null, "bold": false, "italic": false}
                }
            }
        }"#;

        let cv = from_json(json).unwrap();
        assert!(cv.data.experience.is_empty());
        assert!(cv.data.certifications.is_empty());
        assert!(cv.data.skills[0].items.is_empty());

        let style = cv.data.style.unwrap();
        assert_eq!(style.title1.unwrap().color, vec![10, 20, 30]);
        let title2 = style.title2.unwrap();
        assert!(title2.color.is_empty());
        assert!(!title2.is_set());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            from_json(b"not json"),
            Err(crate::error::Error::Json(_))
        ));
    }
}
