//! Page context and site slug resolution.
//!
//! The admin UI is rendered server-side with the active site identified by a
//! `site-slug` data attribute on the document body and, as a fallback, a
//! `site_slug` cookie. This module makes that ambient state an explicit
//! value so slug resolution is pure and testable: the embedding application
//! snapshots the document state into a [`PageContext`] and the resolver is a
//! plain function over it.

use std::collections::HashMap;

/// Slug used when the page carries no site identification at all.
pub const DEFAULT_SITE_SLUG: &str = "structured";

/// Cookie holding the active site slug.
pub const SITE_SLUG_COOKIE: &str = "site_slug";

/// Snapshot of the page state that identifies the active site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    /// Value of the `site-slug` data attribute on the document body, if the
    /// attribute is present.
    pub site_slug_attr: Option<String>,
    /// Cookies visible to the page, name to value.
    pub cookies: HashMap<String, String>,
}

impl PageContext {
    /// Empty context; resolution falls through to [`DEFAULT_SITE_SLUG`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from raw document state: the `site-slug` data
    /// attribute value and a `Cookie`-header-style string.
    pub fn from_document_state(site_slug_attr: Option<&str>, cookie_header: &str) -> Self {
        Self {
            site_slug_attr: site_slug_attr.map(str::to_string),
            cookies: parse_cookie_header(cookie_header),
        }
    }
}

/// Parse a `Cookie` header string into a map of name to value.
///
/// Entries are split on `;`, trimmed, and split on the first `=`. Entries
/// with no `=` are dropped. The first occurrence of a name wins.
pub fn parse_cookie_header(cookie_header: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for entry in cookie_header.split(';') {
        if let Some((name, value)) = entry.trim().split_once('=') {
            map.entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
    }
    map
}

/// Resolve the active site slug from the page context.
///
/// Fixed priority, first match wins:
/// 1. the `site-slug` data attribute, if present and non-empty;
/// 2. the `site_slug` cookie, if present;
/// 3. [`DEFAULT_SITE_SLUG`].
///
/// Never fails and has no side effects. Note the asymmetry between the two
/// tiers: the data attribute must be non-empty, while a present cookie wins
/// even when its value is empty. The admin UI has always behaved this way,
/// so it is kept; see DESIGN.md.
pub fn resolve_site_slug(ctx: &PageContext) -> String {
    if let Some(attr) = ctx.site_slug_attr.as_deref() {
        if !attr.is_empty() {
            return attr.to_string();
        }
    }

    if let Some(value) = ctx.cookies.get(SITE_SLUG_COOKIE) {
        return value.clone();
    }

    DEFAULT_SITE_SLUG.to_string()
}
