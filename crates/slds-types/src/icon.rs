use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::UiError;

/// Vector icon data: one `viewBox` and the paths drawn inside it.
///
/// Field names follow the published icon record format (`viewBox`, `path`),
/// so records can be loaded straight from their JSON form. Bundled records
/// borrow `'static` data and cost nothing to construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    #[serde(rename = "viewBox")]
    pub view_box: Cow<'static, str>,
    #[serde(rename = "path")]
    pub paths: Cow<'static, [IconPath]>,
}

/// A single `<path>` of an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconPath {
    pub d: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Cow<'static, str>>,
}

impl IconRecord {
    /// Parse a record from its JSON form. A record must draw at least one path.
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        let record: IconRecord = serde_json::from_str(json)?;
        if record.paths.is_empty() {
            return Err(UiError::invalid_icon_record("icon record has no paths"));
        }
        Ok(record)
    }
}
