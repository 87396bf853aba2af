// src/presentation/http/state.rs
use crate::application::{ports::i18n::Locale, services::ApplicationServices};
use std::path::PathBuf;
use std::sync::Arc;

/// Router-level settings taken from the application configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub default_locale: Locale,
    pub allowed_origins: Vec<String>,
    pub max_request_bytes: usize,
    /// Directory served under `media_base_url`; `None` disables serving.
    pub media_root: Option<PathBuf>,
    pub media_base_url: String,
    pub rate_limit: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_request_bytes: 12 * 1024 * 1024,
            media_root: None,
            media_base_url: "/media".to_string(),
            rate_limit: true,
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: HttpSettings,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, settings: HttpSettings) -> Self {
        Self { services, settings }
    }
}
