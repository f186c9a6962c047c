//! Page metadata (title, description, Open Graph) for each kind of route

use serde::Serialize;

use crate::content::{BlogPost, Condition, GlobalSettings, HomePage, Page};
use crate::helpers::{strip_html, truncate};

/// Longest description derived from a page body
const DERIVED_DESCRIPTION_LEN: usize = 160;

/// Resolved metadata for one route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
}

/// Open Graph article data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: String,
    pub authors: Vec<String>,
}

/// Which not-found message a missing route gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Page,
    Condition,
    Post,
}

impl PageMeta {
    fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            open_graph: None,
        }
    }

    /// Title with the site name appended, as shown in the browser tab
    pub fn full_title(&self, settings: &GlobalSettings) -> String {
        if self.title == settings.site_name {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, settings.site_name)
        }
    }
}

pub fn home(home: &HomePage, settings: &GlobalSettings) -> PageMeta {
    PageMeta::new(
        or_fallback(home.seo_title.as_deref(), &settings.site_name),
        first_non_empty([home.seo_description.as_deref(), settings.tagline.as_deref()]),
    )
}

/// A generic page; without an SEO description the start of the body is used
pub fn page(page: &Page) -> PageMeta {
    let description = first_non_empty([page.seo_description.as_deref()]).or_else(|| {
        let text = strip_html(&page.content);
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        (!text.is_empty()).then(|| truncate(&text, DERIVED_DESCRIPTION_LEN, None))
    });
    PageMeta::new(or_fallback(page.seo_title.as_deref(), &page.title), description)
}

pub fn condition(condition: &Condition) -> PageMeta {
    PageMeta::new(
        or_fallback(condition.seo_title.as_deref(), &condition.title),
        first_non_empty([condition.seo_description.as_deref()]),
    )
}

pub fn blog_post(post: &BlogPost) -> PageMeta {
    PageMeta {
        title: or_fallback(post.seo_title.as_deref(), &post.title),
        description: first_non_empty([
            post.seo_description.as_deref(),
            Some(post.excerpt.as_str()),
        ]),
        open_graph: Some(OpenGraph {
            kind: "article".to_string(),
            published_time: post.date.clone(),
            authors: vec![post.author.clone()],
        }),
    }
}

pub fn blog_index(settings: &GlobalSettings) -> PageMeta {
    PageMeta::new(
        "Blog",
        Some(format!(
            "Health tips, insights, and education from {}.",
            settings.site_name
        )),
    )
}

pub fn conditions_index(settings: &GlobalSettings) -> PageMeta {
    PageMeta::new(
        "Conditions",
        Some(format!("Conditions treated at {}.", settings.site_name)),
    )
}

pub fn resources_index(settings: &GlobalSettings) -> PageMeta {
    PageMeta::new(
        "Resources",
        Some(format!(
            "Recommended tools and resources from {}.",
            settings.site_name
        )),
    )
}

pub fn not_found(missing: Missing) -> PageMeta {
    let title = match missing {
        Missing::Page => "Page Not Found",
        Missing::Condition => "Condition Not Found",
        Missing::Post => "Post Not Found",
    };
    PageMeta::new(title, None)
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    first_non_empty([value]).unwrap_or_else(|| fallback.to_string())
}

fn first_non_empty<'a, const N: usize>(values: [Option<&'a str>; N]) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .map(str::to_string)
}
