//! All content for one render pass, read once and indexed by slug

use indexmap::map::Entry;
use indexmap::IndexMap;
use std::cmp::Ordering;

use super::error::ContentResult;
use super::loader::ContentLoader;
use super::{BlogPost, Condition, GlobalSettings, HomePage, Page, PageLink, Resource};

/// Records of one kind in listing order, with a slug index
///
/// The listing keeps every record, duplicates included. Lookups resolve a
/// repeated slug to the record that came first in file-name order, the same
/// one the loader's linear `find_*` scans return.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    /// slug -> position in `items`, ordered by position
    index: IndexMap<String, usize>,
}

impl<T> Collection<T> {
    /// Records given in file-name order, listed in that order
    fn in_file_order(items: Vec<T>, slug: impl Fn(&T) -> &str) -> Self {
        Self::sorted(items, slug, |_, _| Ordering::Equal)
    }

    /// Records given in file-name order, listed by a stable sort on `compare`
    fn sorted(
        items: Vec<T>,
        slug: impl Fn(&T) -> &str,
        mut compare: impl FnMut(&T, &T) -> Ordering,
    ) -> Self {
        let mut ranked: Vec<(usize, T)> = items.into_iter().enumerate().collect();
        ranked.sort_by(|(_, a), (_, b)| compare(a, b));

        // slug -> (file order, listing position) of the earliest file
        let mut first: IndexMap<String, (usize, usize)> = IndexMap::with_capacity(ranked.len());
        for (position, (file_order, item)) in ranked.iter().enumerate() {
            match first.entry(slug(item).to_string()) {
                Entry::Occupied(mut occupied) => {
                    if occupied.get().0 > *file_order {
                        occupied.insert((*file_order, position));
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert((*file_order, position));
                }
            }
        }

        let mut index: IndexMap<String, usize> = first
            .into_iter()
            .map(|(slug, (_, position))| (slug, position))
            .collect();
        index.sort_by(|_, a, _, b| a.cmp(b));

        Self {
            items: ranked.into_iter().map(|(_, item)| item).collect(),
            index,
        }
    }

    pub fn get(&self, slug: &str) -> Option<&T> {
        self.index.get(slug).and_then(|&i| self.items.get(i))
    }

    /// Every record in listing order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// One record per slug, the one [`Collection::get`] returns, in listing order
    pub fn unique(&self) -> impl Iterator<Item = &T> + '_ {
        self.index.values().filter_map(move |&i| self.items.get(i))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Immutable view of the content store for a single render pass
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub settings: GlobalSettings,
    pub home: HomePage,
    pub pages: Collection<Page>,
    pub conditions: Collection<Condition>,
    /// Newest first
    pub posts: Collection<BlogPost>,
    pub resources: Vec<Resource>,
}

impl SiteContent {
    /// Read every content kind once
    ///
    /// Fails if a singleton is missing or any entry is invalid.
    pub fn load(loader: &ContentLoader) -> ContentResult<Self> {
        let settings = loader.global_settings()?;
        let home = loader.home_page()?;

        let pages = Collection::in_file_order(loader.load_pages()?, |p: &Page| p.slug.as_str());
        let conditions =
            Collection::in_file_order(loader.list_conditions()?, |c: &Condition| c.slug.as_str());
        let posts = Collection::sorted(
            loader.load_blog_posts()?,
            |p: &BlogPost| p.slug.as_str(),
            |a: &BlogPost, b: &BlogPost| b.published.cmp(&a.published),
        );
        let resources = loader.list_resources()?;

        tracing::info!(
            "Loaded {} pages, {} conditions, {} posts and {} resources",
            pages.len(),
            conditions.len(),
            posts.len(),
            resources.len()
        );

        Ok(Self {
            settings,
            home,
            pages,
            conditions,
            posts,
            resources,
        })
    }

    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    pub fn condition(&self, slug: &str) -> Option<&Condition> {
        self.conditions.get(slug)
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.get(slug)
    }

    /// Navigation links, one per page route
    pub fn page_links(&self) -> Vec<PageLink> {
        self.pages
            .unique()
            .map(|page| PageLink {
                slug: page.slug.clone(),
                title: page.title.clone(),
            })
            .collect()
    }
}
