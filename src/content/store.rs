//! Content store reader - enumerates and parses entries on disk
//!
//! The store is read-only and keeps nothing between calls: every operation
//! goes back to the filesystem and parses the files again.

use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, ContentResult};
use super::FrontMatter;

/// File name of the home page inside the pages directory
pub const HOME_FILE: &str = "home.md";

/// File name of the settings singleton
pub const SETTINGS_FILE: &str = "global.md";

/// The kinds of content the store holds, one directory each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Settings,
    Pages,
    Conditions,
    Blog,
    Resources,
}

impl ContentKind {
    /// Directory name under the content root
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Settings => "settings",
            ContentKind::Pages => "pages",
            ContentKind::Conditions => "conditions",
            ContentKind::Blog => "blog",
            ContentKind::Resources => "resources",
        }
    }

    /// File name of the kind's singleton entry, if it has one
    pub fn singleton_file(self) -> Option<&'static str> {
        match self {
            ContentKind::Settings => Some(SETTINGS_FILE),
            ContentKind::Pages => Some(HOME_FILE),
            _ => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One parsed content file: front-matter plus the raw markdown body
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl RawEntry {
    /// Read and split a content file
    pub fn read(path: &Path) -> ContentResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (front_matter, body) = FrontMatter::parse(&content, path)?;

        Ok(Self {
            path: path.to_path_buf(),
            front_matter,
            body: body.to_string(),
        })
    }

    /// Explicit `slug` field, falling back to the file name without extension
    ///
    /// Numeric and boolean slugs count as explicit (`slug: 2024` is "2024").
    pub fn slug(&self) -> String {
        self.front_matter
            .get_scalar("slug")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.file_stem().to_string())
    }

    pub fn file_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Decode the front-matter into a typed record
    pub fn parse<T: DeserializeOwned>(&self) -> ContentResult<T> {
        self.front_matter.decode(&self.path)
    }
}

/// Reads content entries from a content root directory
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory holding a kind's entries
    pub fn kind_dir(&self, kind: ContentKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Read the singleton entry of a kind (settings, home page)
    ///
    /// A missing file is fatal: [`ContentError::NotFound`].
    pub fn read_singleton(&self, kind: ContentKind) -> ContentResult<RawEntry> {
        let file = kind
            .singleton_file()
            .ok_or(ContentError::NoSingleton(kind))?;
        let path = self.kind_dir(kind).join(file);

        if !path.is_file() {
            return Err(ContentError::NotFound { path });
        }

        RawEntry::read(&path)
    }

    /// Read every entry of a kind, in file-name order
    ///
    /// A missing directory is an empty collection, not an error.
    pub fn read_collection(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>> {
        let dir = self.kind_dir(kind);
        if !dir.is_dir() {
            tracing::debug!("No {} directory at {:?}, treating as empty", kind, dir);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                entries.push(RawEntry::read(path)?);
            }
        }

        tracing::debug!("Read {} {} entries", entries.len(), kind);
        Ok(entries)
    }

    /// Find the first entry of a kind whose slug equals `slug`
    pub fn read_by_slug(&self, kind: ContentKind, slug: &str) -> ContentResult<Option<RawEntry>> {
        Ok(self
            .read_collection(kind)?
            .into_iter()
            .find(|entry| entry.slug() == slug))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
