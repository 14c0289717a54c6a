use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of component library errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum UiErrorKind {
    UnknownIconAlignment,
    InvalidIconRecord,
    InvalidSettings,
}

impl fmt::Display for UiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiErrorKind::UnknownIconAlignment => write!(f, "UnknownIconAlignment"),
            UiErrorKind::InvalidIconRecord => write!(f, "InvalidIconRecord"),
            UiErrorKind::InvalidSettings => write!(f, "InvalidSettings"),
        }
    }
}

/// Error raised at the string boundaries of the library (parsing props,
/// icon records, and settings). Rendering itself never fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl UiError {
    pub fn unknown_icon_alignment(value: &str) -> Self {
        Self {
            kind: UiErrorKind::UnknownIconAlignment,
            message: format!("unknown icon alignment '{value}', expected 'left' or 'right'"),
        }
    }

    pub fn invalid_icon_record(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidIconRecord,
            message: message.into(),
        }
    }

    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidSettings,
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for UiError {}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::invalid_icon_record(err.to_string())
    }
}

impl From<toml::de::Error> for UiError {
    fn from(err: toml::de::Error) -> Self {
        UiError::invalid_settings(err.to_string())
    }
}
