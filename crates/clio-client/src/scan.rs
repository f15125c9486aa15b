//! Content-scan manifest for the utility-class generator.
//!
//! The CSS build step scans markup and template sources for utility class
//! names. This manifest declares which files get scanned; it has no runtime
//! behavior of its own and is consumed by the build tooling.

use glob::Pattern;
use serde::{Deserialize, Serialize};

/// Glob patterns over the repository that the utility-class generator scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScanConfig {
    pub content: Vec<String>,
}

impl Default for ContentScanConfig {
    fn default() -> Self {
        Self {
            content: vec![
                "./assets/ssg/**/*.html".to_string(),
                "./assets/ssg/**/*.tmpl".to_string(),
                "./assets/template/**/*.tmpl".to_string(),
                "./assets/static/css/prose.css".to_string(),
            ],
        }
    }
}

impl ContentScanConfig {
    /// Load a manifest from its JSON form.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Whether `path` falls under any of the declared patterns.
    ///
    /// Patterns and candidates are compared with the leading `./` stripped,
    /// so the manifest's relative-path spelling matches paths produced by
    /// directory walks. A pattern that fails to parse matches nothing.
    pub fn is_scanned(&self, path: &str) -> bool {
        let candidate = path.strip_prefix("./").unwrap_or(path);
        self.content.iter().any(|pattern| {
            let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
            Pattern::new(pattern)
                .map(|p| p.matches(candidate))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let config = ContentScanConfig::default();
        assert_eq!(
            config.content,
            vec![
                "./assets/ssg/**/*.html",
                "./assets/ssg/**/*.tmpl",
                "./assets/template/**/*.tmpl",
                "./assets/static/css/prose.css",
            ]
        );
    }

    #[test]
    fn test_is_scanned_matches_templates() {
        let config = ContentScanConfig::default();
        assert!(config.is_scanned("assets/ssg/posts/index.html"));
        assert!(config.is_scanned("./assets/ssg/posts/index.html"));
        assert!(config.is_scanned("assets/template/layout/base.tmpl"));
        assert!(config.is_scanned("assets/static/css/prose.css"));
    }

    #[test]
    fn test_is_scanned_rejects_other_paths() {
        let config = ContentScanConfig::default();
        assert!(!config.is_scanned("src/main.rs"));
        assert!(!config.is_scanned("assets/static/js/api-helpers.js"));
        assert!(!config.is_scanned("assets/ssg/posts/index.md"));
    }

    #[test]
    fn test_from_json_str() {
        let config =
            ContentScanConfig::from_json_str(r#"{"content": ["./site/**/*.html"]}"#).unwrap();
        assert_eq!(config.content, vec!["./site/**/*.html"]);
        assert!(config.is_scanned("site/a/b.html"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ContentScanConfig::default();
        let raw = serde_json::to_string(&config).unwrap();
        assert_eq!(ContentScanConfig::from_json_str(&raw).unwrap(), config);
    }
}
