use askama::Template;

use crate::content::ContentStore;
use crate::dom::Document;

const DEFAULT_TITLE: &str = "Portfolio";

/// Page layout wrapping a rendered document body.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lang: String,
    pub dir: String,
    pub title: String,
    pub body: String,
}

impl IndexTemplate {
    pub fn for_document(store: &ContentStore, document: &Document) -> Self {
        Self {
            lang: document.lang.clone(),
            dir: document.dir.clone(),
            title: store
                .resolve_text(&document.lang, "hero.name")
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: document.to_html(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}
