//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable holding the public site base URL
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Base URL used when neither the config file nor the environment sets one
pub const DEFAULT_SITE_URL: &str = "https://example.com";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public base URL, used for absolute URLs in structured data
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config.normalized())
    }

    /// Load `site.yml` from the base directory when present, then apply the
    /// `SITE_URL` environment override
    pub fn discover<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("site.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)?
        } else {
            Self::default()
        };

        Ok(config.with_url_override(std::env::var(SITE_URL_ENV).ok()))
    }

    /// Replace the base URL with an override; empty values are ignored
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Site URL overridden by {}: {}", SITE_URL_ENV, url);
            self.url = url;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.url.trim().trim_end_matches('/');
        self.url = if trimmed.is_empty() {
            DEFAULT_SITE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.public_dir, "public");
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
url: https://pelvichealth.example/
content_dir: site-content
highlight:
  line_number: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        let config = config.normalized();
        assert_eq!(config.url, "https://pelvichealth.example");
        assert_eq!(config.content_dir, "site-content");
        assert_eq!(config.public_dir, "public");
        assert!(!config.highlight.line_number);
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_url_override() {
        let config = SiteConfig::default().with_url_override(Some("https://pt.example/".into()));
        assert_eq!(config.url, "https://pt.example");

        let config = SiteConfig::default().with_url_override(Some(String::new()));
        assert_eq!(config.url, DEFAULT_SITE_URL);

        let config = SiteConfig::default().with_url_override(None);
        assert_eq!(config.url, DEFAULT_SITE_URL);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        std::fs::write(&path, "public_dir: dist\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.public_dir, "dist");
        assert_eq!(config.url, DEFAULT_SITE_URL);
    }
}
