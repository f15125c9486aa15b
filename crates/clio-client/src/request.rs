//! Request options and header merging.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ClientError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Patch => write!(f, "PATCH"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-request options passed to [`ApiClient::request`].
///
/// Everything except `headers` is handed to the transport unchanged. The
/// headers are merged with the client's defaults; see [`merge_headers`].
///
/// [`ApiClient::request`]: crate::ApiClient::request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method (default GET).
    pub method: HttpMethod,
    /// Caller-supplied headers, applied on top of the client defaults.
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// Raw request body.
    pub body: Option<Vec<u8>>,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
}

/// Merge default headers with caller overrides into a `HeaderMap`.
///
/// Defaults are inserted first, then overrides on top; on a name collision
/// the last write wins. Names are matched case-insensitively (`HeaderName`
/// normalizes to lowercase), so a caller's `x-site-slug` replaces the
/// client's `X-Site-Slug` default. A name or value that is not a valid HTTP
/// header yields [`ClientError::InvalidHeader`].
pub fn merge_headers(
    defaults: &[(String, String)],
    overrides: &[(String, String)],
) -> Result<HeaderMap, ClientError> {
    let mut merged = HeaderMap::with_capacity(defaults.len() + overrides.len());
    for (name, value) in defaults.iter().chain(overrides) {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| ClientError::invalid_header(name, err))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|err| ClientError::invalid_header(name, err))?;
        merged.insert(header_name, header_value);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(format!("{}", HttpMethod::Get), "GET");
        assert_eq!(format!("{}", HttpMethod::Post), "POST");
        assert_eq!(format!("{}", HttpMethod::Put), "PUT");
        assert_eq!(format!("{}", HttpMethod::Patch), "PATCH");
        assert_eq!(format!("{}", HttpMethod::Delete), "DELETE");
    }

    #[test]
    fn test_http_method_default_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert_eq!(RequestOptions::default().method, HttpMethod::Get);
    }

    #[test]
    fn test_merge_headers_disjoint() {
        let merged = merge_headers(
            &pairs(&[("X-Site-Slug", "tenant42")]),
            &pairs(&[("Content-Type", "application/json")]),
        )
        .unwrap();
        assert_eq!(merged.get("X-Site-Slug").unwrap(), "tenant42");
        assert_eq!(merged.get("Content-Type").unwrap(), "application/json");
    }

    #[test]
    fn test_merge_headers_override_wins() {
        let merged = merge_headers(
            &pairs(&[("X-Site-Slug", "resolved")]),
            &pairs(&[("X-Site-Slug", "custom")]),
        )
        .unwrap();
        assert_eq!(merged.get("X-Site-Slug").unwrap(), "custom");
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_merge_headers_case_insensitive_collision() {
        let merged = merge_headers(
            &pairs(&[("X-Site-Slug", "resolved")]),
            &pairs(&[("x-site-slug", "custom")]),
        )
        .unwrap();
        assert_eq!(merged.get("X-Site-Slug").unwrap(), "custom");
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_merge_headers_last_write_wins_within_overrides() {
        let merged = merge_headers(
            &[],
            &pairs(&[("X-Trace", "first"), ("X-Trace", "second")]),
        )
        .unwrap();
        assert_eq!(merged.get("X-Trace").unwrap(), "second");
    }

    #[test]
    fn test_merge_headers_invalid_name() {
        let err = merge_headers(&[], &pairs(&[("bad header", "x")])).unwrap_err();
        assert!(err.is_invalid_header());
    }

    #[test]
    fn test_merge_headers_invalid_value() {
        let err = merge_headers(&[], &pairs(&[("X-Note", "line\nbreak")])).unwrap_err();
        assert!(err.is_invalid_header());
    }
}
