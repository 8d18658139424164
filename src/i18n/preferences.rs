//! Persistence of the visitor's language choice.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};

/// Name under which the chosen locale is stored.
pub const PREFERENCE_KEY: &str = "preferred-language";

/// One year, in seconds.
const COOKIE_MAX_AGE: u64 = 31_536_000;

/// Key-value store that outlives a single page render.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn with(key: &str, value: &str) -> Self {
        let mut prefs = Self::default();
        prefs.save(key, value);
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Preferences carried by browser cookies.
///
/// Reads come from the request's `Cookie` headers; writes are buffered and
/// turned into `Set-Cookie` values for the response.
#[derive(Debug, Clone, Default)]
pub struct CookiePreferences {
    incoming: HashMap<String, String>,
    pending: Vec<(String, String)>,
}

impl CookiePreferences {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let incoming = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                Some((name.trim().to_string(), value.trim().trim_matches('"').to_string()))
            })
            .collect();

        Self {
            incoming,
            pending: Vec::new(),
        }
    }

    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                    name, value, COOKIE_MAX_AGE
                )
            })
            .collect()
    }
}

impl PreferenceStore for CookiePreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.pending
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
            .or_else(|| self.incoming.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) {
        self.pending.retain(|(name, _)| name != key);
        self.pending.push((key.to_string(), value.to_string()));
    }
}
