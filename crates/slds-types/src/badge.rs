use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::UiError;

/// Base class token carried by every badge container.
pub const BADGE_CLASS: &str = "slds-badge";
/// Base class token carried by every badge icon wrapper.
pub const BADGE_ICON_CLASS: &str = "slds-badge__icon";

/// Color variant for the badge component.
///
/// Parsing from a string never fails: anything other than `inverse` or
/// `light` resolves to [`BadgeColor::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BadgeColor {
    #[default]
    Default,
    Inverse,
    Light,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Default => "default",
            BadgeColor::Inverse => "inverse",
            BadgeColor::Light => "light",
        }
    }

    /// Parse a color key, falling back to `Default` for unrecognized values.
    pub fn from_key(s: &str) -> Self {
        match s {
            "inverse" => BadgeColor::Inverse,
            "light" => BadgeColor::Light,
            "default" => BadgeColor::Default,
            other => {
                tracing::debug!(color = other, "unrecognized badge color, using default");
                BadgeColor::Default
            }
        }
    }

    /// The extra class token for this color, if it has one.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            BadgeColor::Inverse => Some("slds-badge_inverse"),
            BadgeColor::Light => Some("slds-badge_lightest"),
            BadgeColor::Default => None,
        }
    }
}

impl From<&str> for BadgeColor {
    fn from(s: &str) -> Self {
        BadgeColor::from_key(s)
    }
}

impl From<String> for BadgeColor {
    fn from(s: String) -> Self {
        BadgeColor::from_key(&s)
    }
}

/// Resolve a raw color value to its class token. Total over all strings.
pub fn resolve_color_class(color: &str) -> Option<&'static str> {
    BadgeColor::from_key(color).class()
}

/// Which side of the content the icon wrapper sits on.
///
/// Unlike [`BadgeColor`], string parsing is strict: values other than
/// `left` and `right` are rejected with [`UiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum IconAlignment {
    #[default]
    Left,
    Right,
}

impl IconAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconAlignment::Left => "left",
            IconAlignment::Right => "right",
        }
    }

    /// Alignment-specific icon wrapper token, e.g. `slds-badge__icon_left`.
    pub fn icon_class(&self) -> String {
        format!("{BADGE_ICON_CLASS}_{}", self.as_str())
    }
}

impl FromStr for IconAlignment {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(IconAlignment::Left),
            "right" => Ok(IconAlignment::Right),
            other => Err(UiError::unknown_icon_alignment(other)),
        }
    }
}

impl TryFrom<String> for IconAlignment {
    type Error = UiError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
