//! Locale-keyed content store.
//!
//! The store is built once from a JSON payload and is read-only afterwards.
//! The only derived value, the rounded-up years of experience, is computed at
//! construction and interpolated into every `{years}` placeholder.

use std::path::Path;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ContentError;

const EMBEDDED_CONTENT: &str = include_str!("../data/content.json");
const YEARS_PLACEHOLDER: &str = "{years}";
const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone)]
pub struct ContentStore {
    locales: Map<String, Value>,
    experience_years: u32,
}

impl ContentStore {
    pub fn from_json(raw: &str, anchor: NaiveDate, today: NaiveDate) -> Result<Self, ContentError> {
        let root: Value = serde_json::from_str(raw)?;
        let Value::Object(mut locales) = root else {
            return Err(ContentError::Malformed(
                "top level must be an object keyed by locale code".to_string(),
            ));
        };

        if locales.is_empty() {
            return Err(ContentError::Malformed("no locales defined".to_string()));
        }

        let years = experience_years(anchor, today);
        let replacement = years.to_string();

        for (code, slice) in locales.iter_mut() {
            if !slice.is_object() {
                return Err(ContentError::Malformed(format!(
                    "locale '{}' must be an object",
                    code
                )));
            }
            interpolate(slice, &replacement);
        }

        debug!(
            locales = locales.len(),
            experience_years = years,
            "content store built"
        );

        Ok(Self {
            locales,
            experience_years: years,
        })
    }

    /// Builds the store from the payload compiled into the binary.
    pub fn embedded(anchor: NaiveDate, today: NaiveDate) -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT, anchor, today)
    }

    pub async fn load(path: &Path, anchor: NaiveDate, today: NaiveDate) -> Result<Self, ContentError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json(&raw, anchor, today)?;
        info!("Loaded content for {} locales from {}", store.locales.len(), path.display());
        Ok(store)
    }

    /// Locale codes in declaration order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    pub fn locale(&self, code: &str) -> Option<&Value> {
        self.locales.get(code)
    }

    /// Walks a dot-separated path (`hero.title`, `experience.jobs.0.company`)
    /// through the given locale's slice.
    pub fn resolve(&self, code: &str, path: &str) -> Option<&Value> {
        let slice = self.locale(code)?;
        resolve_path(slice, path)
    }

    /// Resolves a path and renders leaf scalars as text.
    pub fn resolve_text(&self, code: &str, path: &str) -> Option<String> {
        match self.resolve(code, path)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }
}

pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Elapsed years since `anchor`, rounded up to the next whole year.
pub fn experience_years(anchor: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - anchor).num_days().unsigned_abs() as f64;
    (days / DAYS_PER_YEAR).ceil() as u32
}

fn interpolate(value: &mut Value, years: &str) {
    match value {
        Value::String(s) if s.contains(YEARS_PLACEHOLDER) => {
            *s = s.replace(YEARS_PLACEHOLDER, years);
        }
        Value::Array(items) => items.iter_mut().for_each(|v| interpolate(v, years)),
        Value::Object(map) => map.values_mut().for_each(|v| interpolate(v, years)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn experience_years_rounds_up() {
        assert_eq!(experience_years(date(2011, 12, 1), date(2025, 6, 1)), 14);
        assert_eq!(experience_years(date(2012, 9, 1), date(2013, 3, 1)), 1);
        assert_eq!(experience_years(date(2020, 1, 1), date(2020, 1, 1)), 0);
    }

    #[test]
    fn years_are_interpolated_at_construction() {
        let raw = r#"{"en": {"hero": {"title": "{years}+ Years", "tags": ["{years}"]}}}"#;
        let store = ContentStore::from_json(raw, date(2015, 1, 1), date(2020, 6, 1)).unwrap();
        assert_eq!(store.experience_years(), 6);
        assert_eq!(store.resolve_text("en", "hero.title").unwrap(), "6+ Years");
        assert_eq!(store.resolve_text("en", "hero.tags.0").unwrap(), "6");
    }

    #[test]
    fn resolve_handles_missing_segments() {
        let raw = r#"{"en": {"nav": {"home": "Home"}, "count": 3}}"#;
        let store = ContentStore::from_json(raw, date(2020, 1, 1), date(2021, 1, 1)).unwrap();
        assert_eq!(store.resolve_text("en", "nav.home").as_deref(), Some("Home"));
        assert_eq!(store.resolve_text("en", "count").as_deref(), Some("3"));
        assert!(store.resolve("en", "nav.missing").is_none());
        assert!(store.resolve("en", "nav.home.deeper").is_none());
        assert!(store.resolve("en", "").is_none());
        assert!(store.resolve("fr", "nav.home").is_none());
        // objects are not text
        assert!(store.resolve_text("en", "nav").is_none());
    }

    #[test]
    fn locales_keep_declaration_order() {
        let raw = r#"{"en": {}, "de": {}}"#;
        let store = ContentStore::from_json(raw, date(2020, 1, 1), date(2021, 1, 1)).unwrap();
        assert_eq!(store.locales().collect::<Vec<_>>(), vec!["en", "de"]);
        assert!(store.contains("de"));
        assert!(!store.contains("xx"));
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        let today = date(2021, 1, 1);
        assert!(ContentStore::from_json("[]", today, today).is_err());
        assert!(ContentStore::from_json("{}", today, today).is_err());
        assert!(ContentStore::from_json(r#"{"en": "text"}"#, today, today).is_err());
        assert!(ContentStore::from_json("not json", today, today).is_err());
    }

    #[test]
    fn embedded_content_defines_both_locales() {
        let store = ContentStore::embedded(date(2012, 9, 1), date(2026, 10, 16)).unwrap();
        assert!(store.contains("en"));
        assert!(store.contains("de"));
        let title = store.resolve_text("de", "hero.title").unwrap();
        assert!(title.contains("15+"), "unexpected title: {}", title);
        assert!(!title.contains(YEARS_PLACEHOLDER));
    }

    #[tokio::test]
    async fn load_reads_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{"en": {"nav": {"home": "Start"}}}"#).unwrap();

        let today = date(2021, 1, 1);
        let store = ContentStore::load(&path, today, today).await.unwrap();
        assert_eq!(store.resolve_text("en", "nav.home").as_deref(), Some("Start"));

        let missing = ContentStore::load(&dir.path().join("nope.json"), today, today).await;
        assert!(matches!(missing, Err(ContentError::Io(_))));
    }
}
