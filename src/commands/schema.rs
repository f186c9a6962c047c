//! Print structured data for a piece of content

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::content::ContentLoader;
use crate::schema;
use crate::seo::{self, Missing};
use crate::Site;

/// Print the JSON-LD object(s) for `kind`, looking up `slug` where needed
pub fn run(site: &Site, kind: &str, slug: Option<&str>) -> Result<()> {
    let loader = ContentLoader::new(site);
    let schemas = build(&loader, site.url(), kind, slug)?;
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}

pub fn build(
    loader: &ContentLoader,
    site_url: &str,
    kind: &str,
    slug: Option<&str>,
) -> Result<Vec<Value>> {
    match kind {
        "business" | "local-business" => {
            let settings = loader.global_settings()?;
            Ok(vec![schema::local_business(&settings)])
        }
        "website" => {
            let settings = loader.global_settings()?;
            Ok(vec![schema::website(&settings, site_url)])
        }
        "faq" | "condition" => {
            let slug = slug.context("A condition slug is required")?;
            match loader.find_condition(slug)? {
                Some(condition) => Ok(vec![schema::faq_page(&condition.faqs)]),
                None => bail!("{}: {}", seo::not_found(Missing::Condition).title, slug),
            }
        }
        "post" | "blog" => {
            let slug = slug.context("A blog post slug is required")?;
            let Some(post) = loader.find_blog_post(slug)? else {
                bail!("{}: {}", seo::not_found(Missing::Post).title, slug);
            };
            let settings = loader.global_settings()?;
            Ok(vec![
                schema::blog_posting(&post, &settings, site_url),
                schema::breadcrumb_list(&schema::blog_breadcrumbs(&post), site_url),
            ])
        }
        _ => bail!(
            "Unknown schema: {}. Available: business, website, faq <slug>, post <slug>",
            kind
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, MarkdownRenderer};
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn loader(root: &Path) -> ContentLoader {
        ContentLoader::with_store(ContentStore::new(root), MarkdownRenderer::new())
    }

    #[test]
    fn test_faq_for_condition() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "conditions/pain.md",
            "---\ntitle: Pain\nslug: pelvic-pain\noverview: o\nwho_it_affects: w\ntreatment_approach: t\n---\n",
        );

        let schemas = build(&loader(dir.path()), "https://x.example", "faq", Some("pelvic-pain"))
            .unwrap();
        assert_eq!(schemas[0]["@type"], "FAQPage");
        assert_eq!(schemas[0]["mainEntity"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_condition_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = build(
            &loader(dir.path()),
            "https://x.example",
            "faq",
            Some("nonexistent-slug"),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Condition Not Found: nonexistent-slug");
    }

    #[test]
    fn test_post_needs_slug() {
        let dir = tempfile::tempdir().unwrap();
        assert!(build(&loader(dir.path()), "https://x.example", "post", None).is_err());
    }
}
