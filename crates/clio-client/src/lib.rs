//! # Clio Client SDK
//!
//! Headless Rust client for the clio SSG admin API. The API is
//! multi-tenant: every request must carry an `X-Site-Slug` header so the
//! backend can scope it to the active site. This crate wraps `reqwest` so
//! the header is attached automatically, resolved per call from the page's
//! rendering context (data attribute, then cookie, then a fixed default).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clio_client::{ApiClient, ClientOptions, PageContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ClientOptions {
//!         context: PageContext::from_document_state(Some("acme"), ""),
//!         ..Default::default()
//!     });
//!
//!     // GET request; X-Site-Slug: acme is attached automatically.
//!     let resp = client.get("/ssg/contents").await?;
//!     println!("status: {}", resp.status());
//!
//!     // POST with a JSON body.
//!     let resp = client
//!         .post_json("/ssg/contents", &serde_json::json!({"title": "Hello"}))
//!         .await?;
//!     println!("status: {}", resp.status());
//!
//!     Ok(())
//! }
//! ```
//!
//! The client never inspects response status codes; a 404 or 500 comes back
//! as an `Ok(Response)` exactly as the transport produced it.

mod context;
mod error;
mod request;
mod scan;

pub use context::*;
pub use error::*;
pub use request::*;
pub use scan::*;

// ─── Client Options ────────────────────────────────────────────────

/// Tenant header attached to every outgoing request.
pub const SITE_SLUG_HEADER: &str = "X-Site-Slug";

/// Configuration for the clio API client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the clio server. Defaults to the local dev server.
    pub base_url: String,

    /// Base path for API endpoints (default: `/api/v1`).
    pub base_path: String,

    /// HTTP request timeout in seconds (default: 30).
    pub timeout_secs: u64,

    /// Page context the site slug is resolved from.
    pub context: PageContext,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            base_path: "/api/v1".to_string(),
            timeout_secs: 30,
            context: PageContext::default(),
        }
    }
}

// ─── Client ────────────────────────────────────────────────────────

/// Tenant-aware async HTTP client for the clio SSG admin API.
///
/// Wraps `reqwest::Client` so every request carries the `X-Site-Slug`
/// header. The slug is resolved from [`PageContext`] on every call via
/// [`resolve_site_slug`], never cached. Caller headers are merged on top of
/// the default with last-write-wins semantics, so an explicit
/// `X-Site-Slug` from the caller replaces the resolved value.
///
/// # Examples
///
/// ```rust,no_run
/// use clio_client::{ApiClient, ClientOptions, PageContext};
///
/// # async fn example() -> Result<(), clio_client::ClientError> {
/// let client = ApiClient::new(ClientOptions {
///     base_url: "https://clio.example.com".into(),
///     context: PageContext::from_document_state(None, "site_slug=tenant42"),
///     ..Default::default()
/// });
///
/// let resp = client.get("/ssg/contents").await?;
/// if !resp.status().is_success() {
///     eprintln!("request failed: {}", resp.status());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl ApiClient {
    /// Create a new client with the given options.
    pub fn new(options: ClientOptions) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(options.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let base_url = format!(
            "{}{}",
            options.base_url.trim_end_matches('/'),
            options.base_path
        );

        Self {
            http,
            base_url,
            options,
        }
    }

    /// Replace the page context the slug is resolved from.
    ///
    /// Useful when the document state changes after the client was built,
    /// e.g. the user switches sites without a full page reload.
    pub fn with_context(mut self, context: PageContext) -> Self {
        self.options.context = context;
        self
    }

    /// Get a reference to the underlying `reqwest::Client`.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Get the options this client was created with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Get the full base URL (base_url + base_path).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Internal helpers ───────────────────────────────────────────

    /// Build a full URL for the given endpoint path. Absolute `http(s)`
    /// URLs pass through verbatim.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.base_url, path)
    }

    // ─── Requests ───────────────────────────────────────────────────

    /// Build the outgoing request without sending it.
    ///
    /// Resolves the site slug from the page context, merges headers
    /// (defaults first, caller headers on top), and applies the remaining
    /// options to the transport builder unchanged. Exposed so callers and
    /// tests can inspect exactly what would go on the wire.
    pub fn build_request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Request, ClientError> {
        let site_slug = resolve_site_slug(&self.options.context);
        let url = self.url(path);
        tracing::debug!(%site_slug, method = %options.method, %url, "building api request");

        let defaults = [(SITE_SLUG_HEADER.to_string(), site_slug)];
        let headers = merge_headers(&defaults, &options.headers)?;

        let mut builder = self
            .http
            .request(options.method.into(), url.as_str())
            .headers(headers);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        builder.build().map_err(ClientError::network)
    }

    /// Send a request to the given endpoint with the given options.
    ///
    /// The response is returned exactly as the transport produced it: no
    /// status inspection, no error translation, no retry. Callers check
    /// `Response::status()` themselves.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.build_request(path, options)?;
        self.http.execute(request).await.map_err(ClientError::network)
    }

    // ─── Convenience verbs ──────────────────────────────────────────

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        self.request(path, RequestOptions::default()).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        self.request(
            path,
            RequestOptions {
                method: HttpMethod::Delete,
                ..Default::default()
            },
        )
        .await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        self.send_json(HttpMethod::Post, path, body).await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        self.send_json(HttpMethod::Put, path, body).await
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        let payload =
            serde_json::to_vec(body).map_err(|err| ClientError::Serialization(err.to_string()))?;
        let options = RequestOptions {
            method,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(payload),
            ..Default::default()
        };
        self.request(path, options).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
