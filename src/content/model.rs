//! Typed content records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Site-wide settings (settings/global.md)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub site_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
}

/// Social profile links, nested under `social:` in the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// Non-empty links in display order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.instagram, &self.facebook, &self.linkedin]
            .into_iter()
            .filter_map(|link| link.as_deref())
            .filter(|link| !link.trim().is_empty())
    }
}

/// Home page content (pages/home.md)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub hero_headline: String,
    #[serde(default)]
    pub hero_subheadline: String,
    #[serde(default)]
    pub hero_cta_text: String,
    #[serde(default)]
    pub hero_cta_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub intro_heading: String,
    #[serde(default)]
    pub intro_body: String,
    #[serde(default)]
    pub featured_services: Vec<FeaturedService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

/// A service card on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedService {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
}

/// A generic content page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    /// Filled from the file name when the front-matter has no slug
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    /// Rendered HTML body
    #[serde(default, skip_deserializing)]
    pub content: String,
}

impl Page {
    /// Call-to-action text and link, only when both are present
    pub fn cta(&self) -> Option<(&str, &str)> {
        cta_pair(&self.cta_text, &self.cta_link)
    }
}

/// Navigation entry for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub slug: String,
    pub title: String,
}

/// A question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A medical condition description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub overview: String,
    pub who_it_affects: String,
    pub treatment_approach: String,
    /// Display order is file order
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

impl Condition {
    pub fn cta(&self) -> Option<(&str, &str)> {
        cta_pair(&self.cta_text, &self.cta_link)
    }
}

/// Front-matter of a blog post, before date validation
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BlogPostMeta {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub date: String,
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    /// Date as written in the front-matter
    pub date: String,
    /// Parsed publication date, used for ordering
    #[serde(skip)]
    pub published: NaiveDate,
    pub author: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// Rendered HTML body
    pub content: String,
}

impl BlogPost {
    pub(crate) fn from_meta(meta: BlogPostMeta, published: NaiveDate, content: String) -> Self {
        Self {
            title: meta.title,
            slug: meta.slug,
            date: meta.date,
            published,
            author: meta.author,
            excerpt: meta.excerpt,
            featured_image: meta.featured_image.filter(|img| !img.trim().is_empty()),
            seo_title: meta.seo_title,
            seo_description: meta.seo_description,
            content,
        }
    }
}

/// An external link card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub affiliate: bool,
    #[serde(default)]
    pub category: String,
}

fn cta_pair<'a>(text: &'a Option<String>, link: &'a Option<String>) -> Option<(&'a str, &'a str)> {
    match (text.as_deref(), link.as_deref()) {
        (Some(text), Some(link)) if !text.is_empty() && !link.is_empty() => Some((text, link)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_nested_social() {
        let yaml = r#"
site_name: Core Balance PT
tagline: Pelvic health for every stage
phone: "555-0100"
social:
  instagram: https://instagram.com/corebalance
  linkedin: ""
footer_text: © Core Balance
"#;
        let settings: GlobalSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.site_name, "Core Balance PT");
        assert_eq!(settings.phone.as_deref(), Some("555-0100"));
        assert_eq!(settings.email, None);
        let links: Vec<_> = settings.social.iter().collect();
        assert_eq!(links, vec!["https://instagram.com/corebalance"]);
    }

    #[test]
    fn test_condition_faq_order() {
        let yaml = r#"
title: Diastasis Recti
slug: diastasis-recti
overview: Separation of the abdominal muscles.
who_it_affects: Mostly postpartum people.
treatment_approach: Progressive core work.
faqs:
  - question: Will it heal on its own?
    answer: Sometimes.
  - question: Can I exercise?
    answer: Yes, with guidance.
"#;
        let condition: Condition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(condition.faqs.len(), 2);
        assert_eq!(condition.faqs[0].question, "Will it heal on its own?");
        assert_eq!(condition.faqs[1].answer, "Yes, with guidance.");
        assert!(condition.cta().is_none());
    }

    #[test]
    fn test_page_cta_requires_both() {
        let mut page: Page = serde_yaml::from_str("title: About\ncta_text: Book\n").unwrap();
        assert!(page.cta().is_none());
        page.cta_link = Some("/contact".into());
        assert_eq!(page.cta(), Some(("Book", "/contact")));
    }

    #[test]
    fn test_page_content_not_read_from_frontmatter() {
        let page: Page = serde_yaml::from_str("title: About\ncontent: sneaky\n").unwrap();
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_resource_defaults() {
        let resource: Resource =
            serde_yaml::from_str("title: Foam Roller\nlink: https://shop.example/roller\n")
                .unwrap();
        assert!(!resource.affiliate);
        assert!(resource.category.is_empty());
    }
}
