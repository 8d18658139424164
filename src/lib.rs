pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod export;
pub mod i18n;
pub mod links;
pub mod models;
pub mod page;
pub mod readiness;
pub mod render;
pub mod server;
pub mod templates;
