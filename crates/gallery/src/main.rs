mod page;

use slds_types::{UiError, UiSettings};

/// Settings file read when no path is given on the command line.
const DEFAULT_SETTINGS_PATH: &str = "gallery.toml";

/// Read settings from `path`. A missing file means default settings; a file
/// that does not parse is an error.
fn load_settings(path: &str) -> Result<UiSettings, UiError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => UiSettings::from_toml(&contents),
        Err(e) => {
            tracing::warn!(path, error = %e, "settings file not readable, using defaults");
            Ok(UiSettings::default())
        }
    }
}

/// Render the badge gallery described by a settings file to stdout.
///
/// Usage: `gallery [settings.toml]`
fn main() {
    dioxus::logger::initialize_default();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());

    let settings = match load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(path = %path, "invalid settings: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", page::render_page(settings));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slds_types::UiErrorKind;

    #[test]
    fn missing_file_uses_defaults() {
        let settings = load_settings("definitely/not/here.toml").unwrap();
        assert_eq!(settings, UiSettings::default());
    }

    #[test]
    fn bundled_gallery_file_parses() {
        let settings =
            UiSettings::from_toml(include_str!("../../../gallery.toml")).unwrap();
        assert_eq!(settings.badges.len(), 5);
    }

    #[test]
    fn invalid_alignment_is_reported() {
        let dir = std::env::temp_dir().join("gallery-invalid-alignment.toml");
        std::fs::write(&dir, "[[badge]]\nicon_alignment = \"middle\"\n").unwrap();
        let err = load_settings(dir.to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind, UiErrorKind::InvalidSettings);
        let _ = std::fs::remove_file(dir);
    }
}
