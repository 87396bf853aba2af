// src/presentation/http/middleware/localize.rs
use crate::presentation::http::{
    error::{ErrorBody, PendingError},
    extractors::negotiate_locale,
    state::HttpState,
};
use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Renders error bodies in the language the client asked for.
pub async fn localize_errors(
    State(state): State<HttpState>,
    request: Request,
    next: Next,
) -> Response {
    let locale = negotiate_locale(request.headers(), state.settings.default_locale);
    let mut response = next.run(request).await;

    let Some(pending) = response.extensions_mut().remove::<PendingError>() else {
        return response;
    };

    let text = state.services.translator().translate(&pending.message, locale);
    let body = ErrorBody::new(pending.status, &pending, text);
    let mut localized = (pending.status, Json(body)).into_response();
    for name in [header::WWW_AUTHENTICATE, header::RETRY_AFTER] {
        if let Some(value) = response.headers().get(&name) {
            localized.headers_mut().insert(name, value.clone());
        }
    }
    localized
        .headers_mut()
        .insert(header::CONTENT_LANGUAGE, HeaderValue::from_static(locale.as_str()));
    localized
}
