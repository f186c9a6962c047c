//! Generator module - exports a render pass as one JSON payload per route
//!
//! The HTML page renderer lives outside this crate. Each payload carries
//! what it needs for one route: resolved metadata, the route's JSON-LD
//! objects (plus ready-made script tags) and the typed content.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::content::{BlogPost, Condition, GlobalSettings, Page, PageLink, SiteContent};
use crate::helpers::{long_date, route_path};
use crate::schema;
use crate::seo::{self, PageMeta};
use crate::Site;

/// Payload written for a single route
#[derive(Debug, Clone, Serialize)]
pub struct RoutePayload {
    pub route: String,
    pub meta: PageMeta,
    /// Browser title with the site-name template applied
    pub full_title: String,
    pub schema: Vec<Value>,
    /// `schema` rendered as `<script type="application/ld+json">` tags
    pub head: String,
    pub data: Value,
}

/// Layout data shared by every route
#[derive(Debug, Clone, Serialize)]
pub struct SitePayload<'a> {
    pub url: &'a str,
    pub settings: &'a GlobalSettings,
    pub navigation: Vec<PageLink>,
    pub schema: Vec<Value>,
    pub head: String,
}

/// Blog listing card
#[derive(Debug, Clone, Serialize)]
struct PostSummary<'a> {
    title: &'a str,
    slug: &'a str,
    date: &'a str,
    date_display: String,
    author: &'a str,
    excerpt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured_image: Option<&'a str>,
}

impl<'a> From<&'a BlogPost> for PostSummary<'a> {
    fn from(post: &'a BlogPost) -> Self {
        Self {
            title: &post.title,
            slug: &post.slug,
            date: &post.date,
            date_display: long_date(&post.published),
            author: &post.author,
            excerpt: &post.excerpt,
            featured_image: post.featured_image.as_deref(),
        }
    }
}

/// Exports render passes to the public directory
pub struct Generator {
    site: Site,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self { site: site.clone() }
    }

    /// Write `site.json`, `routes.json` and every route payload
    ///
    /// Returns the exported routes in write order.
    pub fn generate(&self, content: &SiteContent) -> Result<Vec<String>> {
        fs::create_dir_all(&self.site.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.site.public_dir))?;

        let site_payload = self.build_site_payload(content)?;
        self.write_json(&self.site.public_dir.join("site.json"), &site_payload)?;

        let payloads = self.build_routes(content)?;
        let mut routes = Vec::with_capacity(payloads.len());

        for payload in &payloads {
            let path = self.output_path(&payload.route)?;
            self.write_json(&path, payload)?;
            tracing::debug!("Wrote {} -> {:?}", payload.route, path);
            routes.push(payload.route.clone());
        }

        self.write_json(&self.site.public_dir.join("routes.json"), &routes)?;

        tracing::info!("Exported {} routes to {:?}", routes.len(), self.site.public_dir);
        Ok(routes)
    }

    /// Layout data: settings, navigation and site-wide structured data
    pub fn build_site_payload<'a>(&'a self, content: &'a SiteContent) -> Result<SitePayload<'a>> {
        let schema = vec![
            schema::local_business(&content.settings),
            schema::website(&content.settings, self.site.url()),
        ];
        let head = schema::json_ld_scripts(&schema)?;

        Ok(SitePayload {
            url: self.site.url(),
            settings: &content.settings,
            navigation: content.page_links(),
            schema,
            head,
        })
    }

    /// Build every route payload without touching the filesystem
    ///
    /// Entries sharing a slug get one route, served by the entry slug lookups
    /// return. Two different payloads landing on the same route (a page
    /// named `blog`, say) is an error rather than a silent overwrite.
    pub fn build_routes(&self, content: &SiteContent) -> Result<Vec<RoutePayload>> {
        let mut payloads = Vec::new();

        payloads.push(self.home_route(content)?);

        for page in content.pages.unique() {
            payloads.push(self.page_route(page, &content.settings)?);
        }

        payloads.push(self.conditions_index_route(content)?);
        for condition in content.conditions.unique() {
            payloads.push(self.condition_route(condition, &content.settings)?);
        }

        payloads.push(self.blog_index_route(content)?);
        for post in content.posts.unique() {
            payloads.push(self.post_route(post, &content.settings)?);
        }

        payloads.push(self.resources_route(content)?);

        let mut seen = HashSet::new();
        for payload in &payloads {
            if !seen.insert(payload.route.as_str()) {
                bail!(
                    "Route {} would be exported twice; rename the entry whose slug produces it",
                    payload.route
                );
            }
        }

        Ok(payloads)
    }

    fn home_route(&self, content: &SiteContent) -> Result<RoutePayload> {
        let meta = seo::home(&content.home, &content.settings);
        let data = serde_json::json!({ "home": content.home });
        payload("/".to_string(), meta, &content.settings, Vec::new(), data)
    }

    fn page_route(&self, page: &Page, settings: &GlobalSettings) -> Result<RoutePayload> {
        let data = serde_json::json!({ "page": page });
        payload(route_path(None, &page.slug), seo::page(page), settings, Vec::new(), data)
    }

    fn conditions_index_route(&self, content: &SiteContent) -> Result<RoutePayload> {
        let conditions: Vec<&Condition> = content.conditions.iter().collect();
        let data = serde_json::json!({ "conditions": conditions });
        payload(
            "/conditions".to_string(),
            seo::conditions_index(&content.settings),
            &content.settings,
            Vec::new(),
            data,
        )
    }

    fn condition_route(
        &self,
        condition: &Condition,
        settings: &GlobalSettings,
    ) -> Result<RoutePayload> {
        let schema = vec![schema::faq_page(&condition.faqs)];
        let data = serde_json::json!({ "condition": condition });
        payload(
            route_path(Some("conditions"), &condition.slug),
            seo::condition(condition),
            settings,
            schema,
            data,
        )
    }

    fn blog_index_route(&self, content: &SiteContent) -> Result<RoutePayload> {
        let posts: Vec<PostSummary> = content.posts.iter().map(PostSummary::from).collect();
        let data = serde_json::json!({ "posts": posts });
        payload(
            "/blog".to_string(),
            seo::blog_index(&content.settings),
            &content.settings,
            Vec::new(),
            data,
        )
    }

    fn post_route(&self, post: &BlogPost, settings: &GlobalSettings) -> Result<RoutePayload> {
        let route = route_path(Some("blog"), &post.slug);
        let schema = vec![
            schema::blog_posting(post, settings, self.site.url()),
            schema::breadcrumb_list(&schema::blog_breadcrumbs(post), self.site.url()),
        ];
        let data = serde_json::json!({
            "post": post,
            "date_display": long_date(&post.published),
        });
        payload(route, seo::blog_post(post), settings, schema, data)
    }

    fn resources_route(&self, content: &SiteContent) -> Result<RoutePayload> {
        let data = serde_json::json!({ "resources": content.resources });
        payload(
            "/resources".to_string(),
            seo::resources_index(&content.settings),
            &content.settings,
            Vec::new(),
            data,
        )
    }

    /// `public/<route>/index.json`, refusing routes that leave the public dir
    fn output_path(&self, route: &str) -> Result<PathBuf> {
        let relative = Path::new(route.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            bail!("Refusing to export route {:?} outside the public directory", route);
        }
        Ok(self.site.public_dir.join(relative).join("index.json"))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(())
    }
}

fn payload(
    route: String,
    meta: PageMeta,
    settings: &GlobalSettings,
    schema: Vec<Value>,
    data: Value,
) -> Result<RoutePayload> {
    let head = schema::json_ld_scripts(&schema)?;
    let full_title = meta.full_title(settings);
    Ok(RoutePayload {
        route,
        meta,
        full_title,
        schema,
        head,
        data,
    })
}
