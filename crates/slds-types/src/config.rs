use serde::{Deserialize, Serialize};

use crate::{BadgeColor, ClassSpec, IconAlignment, StyleMap, UiError};

/// How instance ids are generated when a caller supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Collision-resistant random tokens.
    #[default]
    Random,
    /// Monotonic counter; deterministic output for snapshots and tests.
    Sequential,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdSettings {
    #[serde(default)]
    pub strategy: IdStrategy,
    /// Prepended to every generated id as `<prefix>-<token>`.
    #[serde(default)]
    pub prefix: Option<String>,
}

/// One badge described declaratively, as listed in a gallery file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeSettings {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: BadgeColor,
    #[serde(default)]
    pub icon_alignment: IconAlignment,
    /// Bundled icon key, see [`crate::icons::by_name`].
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub class: ClassSpec,
    #[serde(default)]
    pub style: StyleMap,
}

/// Top-level settings file structure.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub ids: IdSettings,
    #[serde(default, rename = "badge")]
    pub badges: Vec<BadgeSettings>,
}

impl UiSettings {
    pub fn from_toml(contents: &str) -> Result<Self, UiError> {
        Ok(toml::from_str(contents)?)
    }
}
