//! Language selection and static text bindings.
//!
//! # Architecture
//!
//! - `language`: the `Locale` type and display metadata for known languages
//! - `preferences`: where the chosen locale is remembered between visits
//! - `bindings`: resolves `data-i18n` paths into document text
//! - `selector`: owns the active locale and its single mutation entry point
//!
//! # Example
//!
//! ```rust,ignore
//! use bilingual_portfolio::i18n::{LanguageSelector, MemoryPreferences};
//!
//! let mut selector = LanguageSelector::new(MemoryPreferences::default());
//! selector.initialize_with(&store, &mut document);
//! selector.switch_language("de", &store, &mut document, &renderer)?;
//! ```

mod bindings;
mod language;
mod preferences;
mod selector;

pub use bindings::{apply_bindings, BindingReport, I18N_ATTR, LONG_FORM_KEYS};
pub use language::{language_info, LanguageInfo, Locale, FALLBACK_LOCALE};
pub use preferences::{CookiePreferences, MemoryPreferences, PreferenceStore, PREFERENCE_KEY};
pub use selector::{LanguageSelector, LocaleListener, ANNOUNCEMENTS_ID, SWITCH_CONTROL_CLASS};
