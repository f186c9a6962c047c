//! schema.org structured data (JSON-LD)
//!
//! Pure mappings from loaded content to the objects search engines read.
//! Optional fields that are missing or empty leave the property out.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::content::{BlogPost, Faq, GlobalSettings};
use crate::helpers::{full_url, json_ld_script, route_path};

const CONTEXT: &str = "https://schema.org";

/// One step of a breadcrumb trail, `url` relative to the site root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Home > Blog > post trail for an article page
pub fn blog_breadcrumbs(post: &BlogPost) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Home", "/"),
        Breadcrumb::new("Blog", "/blog"),
        Breadcrumb::new(post.title.clone(), route_path(Some("blog"), &post.slug)),
    ]
}

/// LocalBusiness for the practice itself
pub fn local_business(settings: &GlobalSettings) -> Value {
    let mut obj = typed("LocalBusiness");
    obj.insert("@id".into(), json!("#localbusiness"));
    obj.insert("name".into(), json!(settings.site_name));
    insert_opt(&mut obj, "description", settings.tagline.as_deref());
    insert_opt(&mut obj, "telephone", settings.phone.as_deref());
    insert_opt(&mut obj, "email", settings.email.as_deref());

    if let Some(address) = non_empty(settings.address.as_deref()) {
        obj.insert(
            "address".into(),
            json!({
                "@type": "PostalAddress",
                "addressLocality": address,
            }),
        );
    }

    let same_as: Vec<&str> = settings.social.iter().collect();
    obj.insert("sameAs".into(), json!(same_as));

    Value::Object(obj)
}

/// WebSite for the whole site
pub fn website(settings: &GlobalSettings, site_url: &str) -> Value {
    let mut obj = typed("WebSite");
    obj.insert("name".into(), json!(settings.site_name));
    insert_opt(&mut obj, "description", settings.tagline.as_deref());
    obj.insert("url".into(), json!(site_url));
    Value::Object(obj)
}

/// FAQPage from question/answer pairs, in display order
pub fn faq_page(faqs: &[Faq]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    let mut obj = typed("FAQPage");
    obj.insert("mainEntity".into(), Value::Array(questions));
    Value::Object(obj)
}

/// BlogPosting for an article page
pub fn blog_posting(post: &BlogPost, settings: &GlobalSettings, site_url: &str) -> Value {
    let mut obj = typed("BlogPosting");
    obj.insert("headline".into(), json!(post.title));
    insert_opt(&mut obj, "description", Some(post.excerpt.as_str()));

    if let Some(image) = non_empty(post.featured_image.as_deref()) {
        obj.insert("image".into(), json!(full_url(site_url, image)));
    }

    obj.insert("datePublished".into(), json!(post.date));
    insert_named(&mut obj, "author", "Person", &post.author);
    insert_named(&mut obj, "publisher", "Organization", &settings.site_name);
    obj.insert(
        "mainEntityOfPage".into(),
        json!({
            "@type": "WebPage",
            "@id": full_url(site_url, &route_path(Some("blog"), &post.slug)),
        }),
    );

    Value::Object(obj)
}

/// BreadcrumbList with 1-based positions and absolute item URLs
pub fn breadcrumb_list(items: &[Breadcrumb], site_url: &str) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": full_url(site_url, &item.url),
            })
        })
        .collect();

    let mut obj = typed("BreadcrumbList");
    obj.insert("itemListElement".into(), Value::Array(elements));
    Value::Object(obj)
}

/// Render structured-data objects as `<script type="application/ld+json">` tags
pub fn json_ld_scripts(schemas: &[Value]) -> serde_json::Result<String> {
    schemas
        .iter()
        .map(|schema| serde_json::to_string(schema).map(|json| json_ld_script(&json)))
        .collect::<serde_json::Result<Vec<_>>>()
        .map(|tags| tags.join("\n"))
}

fn typed(type_name: &str) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("@context".into(), json!(CONTEXT));
    obj.insert("@type".into(), json!(type_name));
    obj
}

fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = non_empty(value) {
        obj.insert(key.into(), json!(value));
    }
}

fn insert_named(obj: &mut Map<String, Value>, key: &str, type_name: &str, name: &str) {
    if !name.trim().is_empty() {
        obj.insert(key.into(), json!({ "@type": type_name, "name": name }));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SocialLinks;
    use chrono::NaiveDate;

    const SITE: &str = "https://corebalance.example";

    fn settings() -> GlobalSettings {
        GlobalSettings {
            site_name: "Core Balance PT".into(),
            tagline: Some("Pelvic health for every stage".into()),
            phone: Some("555-0100".into()),
            email: None,
            address: Some("Portland, OR".into()),
            social: SocialLinks {
                instagram: Some("https://instagram.com/cb".into()),
                facebook: Some(String::new()),
                linkedin: Some("https://linkedin.com/in/cb".into()),
            },
            footer_text: None,
        }
    }

    fn post() -> BlogPost {
        BlogPost {
            title: "Core Basics".into(),
            slug: "core-basics".into(),
            date: "2024-03-01".into(),
            published: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            author: "Dr. Lee".into(),
            excerpt: "Start here.".into(),
            featured_image: Some("/images/core.jpg".into()),
            seo_title: None,
            seo_description: None,
            content: "<p>Hi</p>".into(),
        }
    }

    #[test]
    fn test_local_business() {
        let schema = local_business(&settings());
        assert_eq!(
            schema,
            json!({
                "@context": "https://schema.org",
                "@type": "LocalBusiness",
                "@id": "#localbusiness",
                "name": "Core Balance PT",
                "description": "Pelvic health for every stage",
                "telephone": "555-0100",
                "address": {
                    "@type": "PostalAddress",
                    "addressLocality": "Portland, OR",
                },
                "sameAs": ["https://instagram.com/cb", "https://linkedin.com/in/cb"],
            })
        );
        assert!(schema.get("email").is_none());
    }

    #[test]
    fn test_local_business_key_order() {
        let json = serde_json::to_string(&local_business(&settings())).unwrap();
        assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"LocalBusiness""#));
    }

    #[test]
    fn test_website() {
        assert_eq!(
            website(&settings(), SITE),
            json!({
                "@context": "https://schema.org",
                "@type": "WebSite",
                "name": "Core Balance PT",
                "description": "Pelvic health for every stage",
                "url": SITE,
            })
        );
    }

    #[test]
    fn test_faq_page_empty() {
        let schema = faq_page(&[]);
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["mainEntity"], json!([]));
    }

    #[test]
    fn test_faq_page_keeps_order() {
        let faqs = vec![
            Faq {
                question: "How long?".into(),
                answer: "Six weeks.".into(),
            },
            Faq {
                question: "Does it hurt?".into(),
                answer: "Rarely.".into(),
            },
        ];
        let schema = faq_page(&faqs);
        assert_eq!(
            schema["mainEntity"][0],
            json!({
                "@type": "Question",
                "name": "How long?",
                "acceptedAnswer": { "@type": "Answer", "text": "Six weeks." },
            })
        );
        assert_eq!(schema["mainEntity"][1]["name"], "Does it hurt?");
    }

    #[test]
    fn test_blog_posting() {
        assert_eq!(
            blog_posting(&post(), &settings(), SITE),
            json!({
                "@context": "https://schema.org",
                "@type": "BlogPosting",
                "headline": "Core Basics",
                "description": "Start here.",
                "image": "https://corebalance.example/images/core.jpg",
                "datePublished": "2024-03-01",
                "author": { "@type": "Person", "name": "Dr. Lee" },
                "publisher": { "@type": "Organization", "name": "Core Balance PT" },
                "mainEntityOfPage": {
                    "@type": "WebPage",
                    "@id": "https://corebalance.example/blog/core-basics",
                },
            })
        );
    }

    #[test]
    fn test_blog_posting_without_image() {
        let mut post = post();
        post.featured_image = None;
        post.excerpt = String::new();
        let schema = blog_posting(&post, &settings(), SITE);
        assert!(schema.get("image").is_none());
        assert!(schema.get("description").is_none());
        assert_eq!(schema["headline"], "Core Basics");
    }

    #[test]
    fn test_breadcrumb_list() {
        let items = vec![
            Breadcrumb::new("Home", "/"),
            Breadcrumb::new("Blog", "/blog"),
            Breadcrumb::new("Core Basics", "/blog/core-basics"),
        ];
        let schema = breadcrumb_list(&items, SITE);
        let elements = schema["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0]["position"], 1);
        assert_eq!(elements[0]["item"], "https://corebalance.example/");
        assert_eq!(elements[2]["position"], 3);
        assert_eq!(
            elements[2]["item"],
            "https://corebalance.example/blog/core-basics"
        );
        assert_eq!(elements[1]["@type"], "ListItem");
    }

    #[test]
    fn test_json_ld_scripts() {
        let html = json_ld_scripts(&[faq_page(&[]), website(&settings(), SITE)]).unwrap();
        assert_eq!(html.matches(r#"<script type="application/ld+json">"#).count(), 2);
        assert!(html.contains(r#""@type":"FAQPage""#));
    }
}
