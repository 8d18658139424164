//! The language selector: owner of the active locale.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::content::ContentStore;
use crate::dom::Document;
use crate::error::PortfolioError;
use crate::i18n::bindings::apply_bindings;
use crate::i18n::preferences::{PreferenceStore, PREFERENCE_KEY};
use crate::i18n::{Locale, FALLBACK_LOCALE};
use crate::readiness::ContentHandle;

/// Class of the locale-switch controls; each carries `data-lang`.
pub const SWITCH_CONTROL_CLASS: &str = "lang-btn";

/// Live region receiving change announcements.
pub const ANNOUNCEMENTS_ID: &str = "announcements";

/// Notified after the active locale changed and static bindings were applied.
pub trait LocaleListener {
    fn locale_changed(&self, store: &ContentStore, locale: &Locale, document: &mut Document);
}

fn server_href(code: &str) -> String {
    format!("/lang/{}", code)
}

pub struct LanguageSelector<P: PreferenceStore> {
    preferences: P,
    active: Locale,
    initialized: bool,
    control_href: fn(&str) -> String,
}

impl<P: PreferenceStore> LanguageSelector<P> {
    pub fn new(preferences: P) -> Self {
        Self {
            preferences,
            active: Locale::fallback(),
            initialized: false,
            control_href: server_href,
        }
    }

    /// Overrides the link each switch control points at.
    pub fn with_control_href(mut self, href: fn(&str) -> String) -> Self {
        self.control_href = href;
        self
    }

    pub fn active(&self) -> &Locale {
        &self.active
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn into_preferences(self) -> P {
        self.preferences
    }

    /// Waits (bounded) for content, then initializes against it.
    ///
    /// On timeout the selector stays uninitialized and may be retried.
    pub async fn initialize(
        &mut self,
        content: &ContentHandle,
        document: &mut Document,
        timeout: Duration,
    ) -> Result<(), PortfolioError> {
        if self.initialized {
            debug!("language selector already initialized");
            return Ok(());
        }
        let store = content.wait_ready(timeout).await?;
        self.initialize_with(&store, document);
        Ok(())
    }

    /// Seeds the active locale from preferences and applies it to the document.
    pub fn initialize_with(&mut self, store: &ContentStore, document: &mut Document) {
        if self.initialized {
            debug!("language selector already initialized");
            return;
        }

        self.active = match self.preferences.load(PREFERENCE_KEY) {
            Some(code) if store.contains(&code) => Locale::from(code.as_str()),
            Some(code) => {
                warn!("Ignoring persisted language '{}': not in content", code);
                fallback_for(store)
            }
            None => fallback_for(store),
        };

        self.bind_controls(document);
        apply_bindings(document, store, &self.active);
        self.update_controls(document);
        self.initialized = true;
        debug!("language selector initialized with '{}'", self.active);
    }

    /// Switches the active locale.
    ///
    /// Unknown codes are rejected and leave the locale, the preferences and
    /// the document untouched.
    pub fn switch_language(
        &mut self,
        code: &str,
        store: &ContentStore,
        document: &mut Document,
        listener: &dyn LocaleListener,
    ) -> Result<(), PortfolioError> {
        if !store.contains(code) {
            error!("Language {} not found in content", code);
            return Err(PortfolioError::MissingLocale(code.to_string()));
        }

        self.active = Locale::from(code);
        self.preferences.save(PREFERENCE_KEY, code);
        apply_bindings(document, store, &self.active);
        self.update_controls(document);
        self.announce(document);
        listener.locale_changed(store, &self.active, document);

        info!("Switched language to '{}'", self.active);
        Ok(())
    }

    fn bind_controls(&self, document: &mut Document) {
        let href = self.control_href;
        document.for_each_element_mut(|el| {
            if !el.has_class(SWITCH_CONTROL_CLASS) {
                return;
            }
            if let Some(target) = el.get_attr("data-lang").map(str::to_string) {
                el.set_attr("href", href(&target));
            }
        });
    }

    fn update_controls(&self, document: &mut Document) {
        let active = self.active.as_str();
        document.lang = active.to_string();
        document.dir = "ltr".to_string();

        document.for_each_element_mut(|el| {
            if !el.has_class(SWITCH_CONTROL_CLASS) {
                return;
            }
            let is_active = el.get_attr("data-lang") == Some(active);
            el.remove_class("active");
            el.remove_class("inactive");
            el.add_class(if is_active { "active" } else { "inactive" });
            el.set_attr("aria-pressed", is_active.to_string());
        });
    }

    fn announce(&self, document: &mut Document) {
        if let Some(region) = document.element_by_id_mut(ANNOUNCEMENTS_ID) {
            region.set_text(format!("Language changed to {}", self.active.native_name()));
        }
    }
}

fn fallback_for(store: &ContentStore) -> Locale {
    if store.contains(FALLBACK_LOCALE) {
        return Locale::fallback();
    }
    store
        .locales()
        .next()
        .map(Locale::from)
        .unwrap_or_else(Locale::fallback)
}
