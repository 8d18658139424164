//! Static export: one pre-rendered page per locale.

use std::path::{Path, PathBuf};

use askama::Template;
use tracing::info;

use crate::content::ContentStore;
use crate::error::ExportError;
use crate::i18n::{LanguageSelector, MemoryPreferences, FALLBACK_LOCALE, PREFERENCE_KEY};
use crate::page;
use crate::render::ContentRenderer;
use crate::templates::IndexTemplate;

fn static_href(code: &str) -> String {
    if code == FALLBACK_LOCALE {
        "/".to_string()
    } else {
        format!("/{}/", code)
    }
}

/// Writes `index.html` for the fallback locale and `<code>/index.html` for
/// every other locale. Returns the written paths.
pub async fn export_site(
    store: &ContentStore,
    renderer: &ContentRenderer,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();

    for code in store.locales() {
        let mut document = page::skeleton(store.locales());
        let mut selector = LanguageSelector::new(MemoryPreferences::with(PREFERENCE_KEY, code))
            .with_control_href(static_href);
        selector.initialize_with(store, &mut document);
        renderer.render_all(store, selector.active(), &mut document);

        let html = IndexTemplate::for_document(store, &document).render()?;

        let dir = if code == FALLBACK_LOCALE {
            out_dir.to_path_buf()
        } else {
            out_dir.join(code)
        };
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join("index.html");
        tokio::fs::write(&path, html).await?;

        info!("Exported {} to {}", code, path.display());
        written.push(path);
    }

    Ok(written)
}
