use std::time::Duration;

use thiserror::Error;

/// Failures of the content pipeline. Every variant except
/// `ContentUnavailable` is recovered where it happens and only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    #[error("container '{container_id}' for section {section} not found")]
    MissingContainer {
        section: &'static str,
        container_id: &'static str,
    },

    #[error("content for section {section} missing at '{path}' in locale '{locale}'")]
    MissingSection {
        section: &'static str,
        path: &'static str,
        locale: String,
    },

    #[error("content for section {section} in locale '{locale}' is malformed: {reason}")]
    MalformedSection {
        section: &'static str,
        locale: String,
        reason: String,
    },

    #[error("language '{0}' not found in content")]
    MissingLocale(String),

    #[error("translation not found for key '{key}' in locale '{locale}'")]
    MissingTranslationKey { key: String, locale: String },

    #[error("content not ready after {waited:?}")]
    ContentUnavailable { waited: Duration },
}

/// Problems with the content payload itself, surfaced while building the store.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content payload is malformed: {0}")]
    Malformed(String),

    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while writing the static export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render page: {0}")]
    Template(#[from] askama::Error),
}
