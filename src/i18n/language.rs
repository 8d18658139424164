//! Locale codes and language display metadata.

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

/// Locale used when no valid preference exists.
pub const FALLBACK_LOCALE: &str = "en";

/// Display metadata for a language the site knows how to name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    /// ISO 639-1 code (e.g., "en", "de")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Name of the language in itself, used for announcements
    pub native_name: &'static str,
}

static LANGUAGES: OnceLock<Vec<LanguageInfo>> = OnceLock::new();

fn default_languages() -> Vec<LanguageInfo> {
    vec![
        LanguageInfo {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LanguageInfo {
            code: "de",
            name: "German",
            native_name: "Deutsch",
        },
    ]
}

pub fn language_info(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES
        .get_or_init(default_languages)
        .iter()
        .find(|lang| lang.code == code)
}

/// A locale code.
///
/// Whether a locale is usable depends on the content store, so construction is
/// unchecked; the selector validates codes before activating them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn fallback() -> Self {
        Locale(FALLBACK_LOCALE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Native language name, or the upper-cased code for unknown languages.
    pub fn native_name(&self) -> String {
        language_info(&self.0)
            .map(|info| info.native_name.to_string())
            .unwrap_or_else(|| self.0.to_uppercase())
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Locale(code.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_have_native_names() {
        assert_eq!(Locale::from("de").native_name(), "Deutsch");
        assert_eq!(Locale::fallback().native_name(), "English");
    }

    #[test]
    fn unknown_language_uses_code() {
        assert_eq!(Locale::from("fr").native_name(), "FR");
        assert!(language_info("fr").is_none());
    }

    #[test]
    fn fallback_is_english() {
        assert_eq!(Locale::fallback().as_str(), "en");
        assert_eq!(Locale::fallback().to_string(), FALLBACK_LOCALE);
    }
}
