//! Content loader - assembles typed collections from the content store

use chrono::NaiveDate;
use std::collections::HashSet;

use super::error::{ContentError, ContentResult};
use super::model::BlogPostMeta;
use super::store::{ContentKind, ContentStore, RawEntry, HOME_FILE};
use super::{
    BlogPost, Condition, GlobalSettings, HomePage, MarkdownRenderer, Page, PageLink, Resource,
};
use crate::helpers::parse_date;
use crate::Site;

/// Loads typed content records for a render pass
///
/// Only pages and blog posts carry a markdown body; conditions and
/// resources are built from front-matter alone.
pub struct ContentLoader {
    store: ContentStore,
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(site: &Site) -> Self {
        Self::with_store(
            ContentStore::new(&site.content_dir),
            MarkdownRenderer::with_options(&site.config.highlight),
        )
    }

    pub fn with_store(store: ContentStore, renderer: MarkdownRenderer) -> Self {
        Self { store, renderer }
    }

    /// Load settings/global.md
    pub fn global_settings(&self) -> ContentResult<GlobalSettings> {
        self.store.read_singleton(ContentKind::Settings)?.parse()
    }

    /// Load pages/home.md
    pub fn home_page(&self) -> ContentResult<HomePage> {
        self.store.read_singleton(ContentKind::Pages)?.parse()
    }

    /// List all pages except the home page, for link generation
    pub fn list_pages(&self) -> ContentResult<Vec<PageLink>> {
        let entries = self.content_pages()?;
        warn_duplicate_slugs(ContentKind::Pages, &entries);

        Ok(entries
            .iter()
            .map(|entry| {
                let slug = entry.slug();
                let title = entry
                    .front_matter
                    .get_scalar("title")
                    .unwrap_or_else(|| slug.clone());
                PageLink { slug, title }
            })
            .collect())
    }

    /// Find a page by slug and render its body
    pub fn find_page(&self, slug: &str) -> ContentResult<Option<Page>> {
        self.content_pages()?
            .into_iter()
            .find(|entry| entry.slug() == slug)
            .map(|entry| self.build_page(&entry))
            .transpose()
    }

    /// Load every page with its rendered body
    pub fn load_pages(&self) -> ContentResult<Vec<Page>> {
        self.content_pages()?
            .iter()
            .map(|entry| self.build_page(entry))
            .collect()
    }

    pub fn list_conditions(&self) -> ContentResult<Vec<Condition>> {
        let entries = self.store.read_collection(ContentKind::Conditions)?;
        warn_duplicate_slugs(ContentKind::Conditions, &entries);
        entries.iter().map(build_condition).collect()
    }

    pub fn find_condition(&self, slug: &str) -> ContentResult<Option<Condition>> {
        self.store
            .read_by_slug(ContentKind::Conditions, slug)?
            .map(|entry| build_condition(&entry))
            .transpose()
    }

    /// Slugs of all conditions, for static route generation
    pub fn condition_slugs(&self) -> ContentResult<Vec<String>> {
        Ok(self
            .list_conditions()?
            .into_iter()
            .map(|condition| condition.slug)
            .collect())
    }

    /// Load all blog posts, newest first
    ///
    /// Posts sharing a date keep their file-name order.
    pub fn list_blog_posts(&self) -> ContentResult<Vec<BlogPost>> {
        let mut posts = self.load_blog_posts()?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Load all blog posts in file-name order
    pub fn load_blog_posts(&self) -> ContentResult<Vec<BlogPost>> {
        let entries = self.store.read_collection(ContentKind::Blog)?;
        warn_duplicate_slugs(ContentKind::Blog, &entries);

        entries
            .iter()
            .map(|entry| self.build_blog_post(entry))
            .collect()
    }

    pub fn find_blog_post(&self, slug: &str) -> ContentResult<Option<BlogPost>> {
        self.store
            .read_by_slug(ContentKind::Blog, slug)?
            .map(|entry| self.build_blog_post(&entry))
            .transpose()
    }

    /// Slugs of all blog posts, newest first
    pub fn blog_slugs(&self) -> ContentResult<Vec<String>> {
        Ok(self
            .list_blog_posts()?
            .into_iter()
            .map(|post| post.slug)
            .collect())
    }

    pub fn list_resources(&self) -> ContentResult<Vec<Resource>> {
        let entries = self.store.read_collection(ContentKind::Resources)?;
        warn_duplicate_slugs(ContentKind::Resources, &entries);
        entries.iter().map(build_resource).collect()
    }

    fn content_pages(&self) -> ContentResult<Vec<RawEntry>> {
        Ok(self
            .store
            .read_collection(ContentKind::Pages)?
            .into_iter()
            .filter(|entry| entry.file_name() != HOME_FILE)
            .collect())
    }

    fn build_page(&self, entry: &RawEntry) -> ContentResult<Page> {
        let mut page: Page = entry.parse()?;
        page.slug = entry.slug();
        page.content = self.renderer.render(&entry.body);
        check_slug(&entry.path, &page.slug);
        Ok(page)
    }

    fn build_blog_post(&self, entry: &RawEntry) -> ContentResult<BlogPost> {
        let mut meta: BlogPostMeta = entry.parse()?;
        meta.slug = entry.slug();
        check_slug(&entry.path, &meta.slug);

        let published = validate_date(entry, &meta.date)?;
        let content = self.renderer.render(&entry.body);

        Ok(BlogPost::from_meta(meta, published, content))
    }
}

fn build_condition(entry: &RawEntry) -> ContentResult<Condition> {
    let mut condition: Condition = entry.parse()?;
    condition.slug = entry.slug();
    check_slug(&entry.path, &condition.slug);
    if !entry.body.trim().is_empty() {
        tracing::debug!("Ignoring markdown body of condition {:?}", entry.path);
    }
    Ok(condition)
}

fn build_resource(entry: &RawEntry) -> ContentResult<Resource> {
    let mut resource: Resource = entry.parse()?;
    resource.slug = entry.slug();
    check_slug(&entry.path, &resource.slug);
    if !entry.body.trim().is_empty() {
        tracing::debug!("Ignoring markdown body of resource {:?}", entry.path);
    }
    Ok(resource)
}

fn validate_date(entry: &RawEntry, value: &str) -> ContentResult<NaiveDate> {
    parse_date(value).ok_or_else(|| ContentError::InvalidDate {
        path: entry.path.clone(),
        value: value.to_string(),
    })
}

/// Stable sort by publication date, newest first
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.published.cmp(&a.published));
}

fn check_slug(path: &std::path::Path, slug: &str) {
    if slug::slugify(slug) != slug {
        tracing::warn!("Slug '{}' in {:?} is not URL-safe", slug, path);
    }
}

fn warn_duplicate_slugs(kind: ContentKind, entries: &[RawEntry]) {
    let mut seen = HashSet::new();
    for entry in entries {
        let slug = entry.slug();
        if !seen.insert(slug.clone()) {
            tracing::warn!(
                "Duplicate {} slug '{}' in {:?}; the first entry wins",
                kind,
                slug,
                entry.path
            );
        }
    }
}
