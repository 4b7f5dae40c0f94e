//! JSON export document types.

use super::{Cv, CvData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The JSON export format for a CV, optionally carrying its version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvExport {
    pub title: String,
    pub data: CvData,
    pub exported_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub versions: Vec<CvVersion>,
}

impl CvExport {
    /// Build an export document for a CV at the given instant.
    pub fn new(cv: &Cv, exported_at: DateTime<Utc>) -> Self {
        Self {
            title: cv.title.clone(),
            data: cv.data.clone(),
            exported_at,
            versions: Vec::new(),
        }
    }

    /// Attach version snapshots supplied by the persistence layer.
    pub fn with_versions(mut self, versions: Vec<CvVersion>) -> Self {
        self.versions = versions;
        self
    }
}

/// A snapshot of a CV at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvVersion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cv_id: String,
    #[serde(default)]
    pub data: CvData,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}
