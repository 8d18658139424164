use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use regex::Regex;

/// Period markers meaning the role is still ongoing, matched case-insensitively.
const ONGOING_MARKERS: &[&str] = &["present", "heute"];

static YEAR_PATTERN: OnceLock<Regex> = OnceLock::new();

fn year_pattern() -> &'static Regex {
    YEAR_PATTERN.get_or_init(|| Regex::new(r"\b((?:19|20)\d{2})\b").expect("year pattern is valid"))
}

/// Display year derived from a job's period text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearInfo {
    Current,
    Year(i32),
}

impl YearInfo {
    pub fn is_active(&self) -> bool {
        matches!(self, YearInfo::Current)
    }

    /// Styling hook read by the effects layer.
    pub fn aurora_class(&self) -> String {
        format!("aurora-{}", self)
    }
}

impl fmt::Display for YearInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearInfo::Current => f.write_str("current"),
            YearInfo::Year(year) => write!(f, "{}", year),
        }
    }
}

pub fn derive_year(period: &str, current_year: i32) -> YearInfo {
    let lowered = period.to_lowercase();
    if ONGOING_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return YearInfo::Current;
    }

    year_pattern()
        .find_iter(period)
        .last()
        .and_then(|m| m.as_str().parse().ok())
        .map(YearInfo::Year)
        .unwrap_or(YearInfo::Year(current_year))
}

/// Memo of derived years keyed by the raw period string.
///
/// Content is static for the lifetime of the process, so entries are never
/// invalidated.
#[derive(Debug, Default)]
pub struct YearCache {
    entries: Mutex<HashMap<String, YearInfo>>,
}

impl YearCache {
    pub fn get_or_derive(&self, period: &str, current_year: impl FnOnce() -> i32) -> YearInfo {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = entries.get(period) {
            return hit.clone();
        }
        let derived = derive_year(period, current_year());
        entries.insert(period.to_string(), derived.clone());
        derived
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
