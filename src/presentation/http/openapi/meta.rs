// src/presentation/http/openapi/meta.rs
use axum::http::{HeaderMap, header};
use std::borrow::Cow;
use std::sync::OnceLock;
use std::time::SystemTime;

/// Last-Modified of the document: the build date when one was embedded,
/// otherwise the moment the process first served it.
pub fn last_modified() -> &'static str {
    static STARTED: OnceLock<String> = OnceLock::new();
    option_env!("BUILD_DATE").unwrap_or_else(|| {
        STARTED
            .get_or_init(|| httpdate::fmt_http_date(SystemTime::now()))
            .as_str()
    })
}

/// Opaque part of an entity tag: no `W/` prefix, no quotes, no backslash
/// escapes.
pub fn extract_etag_value(token: &str) -> Cow<'_, str> {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);

    if !token.contains('\\') {
        return Cow::Borrowed(strip_quotes(token));
    }

    let mut unescaped = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            other => unescaped.push(other),
        }
    }
    // escaped quotes may leave a second pair behind
    let once = strip_quotes(&unescaped);
    Cow::Owned(strip_quotes(once).to_string())
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// Weak comparison: `W/"a"` and `"a"` are equivalent.
pub fn weak_match(a: &str, b: &str) -> bool {
    extract_etag_value(a) == extract_etag_value(b)
}

/// `If-None-Match` matches `actual`, either through `*` or any listed tag.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, actual))
}

/// `If-Modified-Since` is at or after the document's Last-Modified.
pub fn ims_matches(headers: &HeaderMap) -> bool {
    let Some(since) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| httpdate::parse_http_date(value.trim()).ok())
    else {
        return false;
    };
    httpdate::parse_http_date(last_modified()).is_ok_and(|modified| modified <= since)
}
