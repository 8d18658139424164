//! HTTP surface: every request renders the page for the visitor's locale.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::Config;
use crate::error::PortfolioError;
use crate::content::ContentStore;
use crate::dom::Document;
use crate::i18n::{
    language_info, CookiePreferences, LanguageSelector, Locale, LocaleListener, FALLBACK_LOCALE,
};
use crate::page;
use crate::readiness::ContentHandle;
use crate::render::ContentRenderer;
use crate::templates::{ErrorTemplate, IndexTemplate};

#[derive(Clone)]
pub struct AppState {
    pub content: ContentHandle,
    pub renderer: Arc<ContentRenderer>,
    pub config: Arc<Config>,
}

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/lang/:code", get(switch_language))
        .route("/api/locales", get(locales))
        .route("/api/content/:code", get(locale_content))
        .route("/health", get(health))
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

/// Listener for switches answered with a redirect: the page is rendered by
/// the follow-up `GET /`, so the switch only needs to update the cookie.
struct RedirectOnly;

impl LocaleListener for RedirectOnly {
    fn locale_changed(&self, _: &ContentStore, _: &Locale, _: &mut Document) {}
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let store = match state.content.wait_ready(state.config.ready_timeout).await {
        Ok(store) => store,
        Err(err) => return unavailable(err),
    };

    let mut document = page::skeleton(store.locales());
    let mut selector = LanguageSelector::new(CookiePreferences::from_headers(&headers));
    selector.initialize_with(&store, &mut document);
    state.renderer.render_all(&store, selector.active(), &mut document);

    let lang = document.lang.clone();
    (
        [(header::CONTENT_LANGUAGE, lang)],
        IndexTemplate::for_document(&store, &document),
    )
        .into_response()
}

async fn switch_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Response {
    let store = match state.content.wait_ready(state.config.ready_timeout).await {
        Ok(store) => store,
        Err(err) => return unavailable(err),
    };

    let mut document = page::skeleton(store.locales());
    let mut selector = LanguageSelector::new(CookiePreferences::from_headers(&headers));
    selector.initialize_with(&store, &mut document);

    let mut response = Redirect::to("/").into_response();
    if selector
        .switch_language(&code, &store, &mut document, &RedirectOnly)
        .is_ok()
    {
        for cookie in selector.preferences().set_cookie_headers() {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(err) => error!("Dropping unencodable cookie: {}", err),
            }
        }
    }
    response
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocaleSummary {
    code: String,
    name: String,
    native_name: String,
    default: bool,
}

async fn locales(State(state): State<AppState>) -> Response {
    let store = match state.content.wait_ready(state.config.ready_timeout).await {
        Ok(store) => store,
        Err(err) => return unavailable(err),
    };

    let summaries: Vec<LocaleSummary> = store
        .locales()
        .map(|code| {
            let info = language_info(code);
            LocaleSummary {
                code: code.to_string(),
                name: info.map_or_else(|| code.to_uppercase(), |i| i.name.to_string()),
                native_name: info.map_or_else(|| code.to_uppercase(), |i| i.native_name.to_string()),
                default: code == FALLBACK_LOCALE,
            }
        })
        .collect();

    Json(summaries).into_response()
}

async fn locale_content(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let store = match state.content.wait_ready(state.config.ready_timeout).await {
        Ok(store) => store,
        Err(err) => return unavailable(err),
    };

    match store.locale(&code) {
        Some(slice) => Json(slice.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": PortfolioError::MissingLocale(code).to_string() })),
        )
            .into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

fn unavailable(err: PortfolioError) -> Response {
    error!("Serving 503: {}", err);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        ErrorTemplate {
            status: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            message: "Content is not available yet. Please try again shortly.".to_string(),
        },
    )
        .into_response()
}
