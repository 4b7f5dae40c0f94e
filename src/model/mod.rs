//! CV data model.
//!
//! These types mirror the JSON documents stored by the surrounding
//! application. Every field defaults when absent so partially filled
//! records deserialize cleanly; the export engine treats them as
//! read-only input for the duration of one call.

mod cv;
mod export;
mod style;

pub use cv::{Certification, Cv, CvData, Education, Experience, Language, PersonalInfo, SkillGroup};
pub use export::{CvExport, CvVersion};
pub use style::{FontStyle, Rgb, SectionLabels, StyleConfig};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be explicitly `null`, using its default.
///
/// Producers that serialize unset lists as `null` would otherwise be
/// rejected by a plain `Vec<T>` field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
