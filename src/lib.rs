//! practice-site: content pipeline for a physical-therapy practice website
//!
//! Reads markdown content with YAML front-matter, assembles typed
//! collections, renders markdown bodies and derives schema.org structured
//! data. A render pass exports one JSON payload per route for the page
//! renderer.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod schema;
pub mod seo;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site on disk and its configuration, passed to every component
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `site.yml` and `SITE_URL`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = config::SiteConfig::discover(base_dir.as_ref())?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Public base URL without a trailing slash
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Run a render pass and export it to the public directory
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
