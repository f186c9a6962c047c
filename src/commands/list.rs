//! List site content

use anyhow::{bail, Result};
use std::fmt::Write;

use crate::content::ContentLoader;
use crate::helpers::{long_date, truncate};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);
    print!("{}", describe(&loader, content_type)?);
    Ok(())
}

/// Build the listing text for a content type
pub fn describe(loader: &ContentLoader, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "page" | "pages" => {
            let pages = loader.list_pages()?;
            writeln!(out, "Pages ({}):", pages.len())?;
            for page in pages {
                writeln!(out, "  {} [/{}]", page.title, page.slug)?;
            }
        }
        "condition" | "conditions" => {
            let conditions = loader.list_conditions()?;
            writeln!(out, "Conditions ({}):", conditions.len())?;
            for condition in conditions {
                writeln!(
                    out,
                    "  {} [/conditions/{}] ({} FAQs)",
                    condition.title,
                    condition.slug,
                    condition.faqs.len()
                )?;
            }
        }
        "post" | "posts" | "blog" => {
            let posts = loader.list_blog_posts()?;
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} by {} [/blog/{}]",
                    long_date(&post.published),
                    post.title,
                    post.author,
                    post.slug
                )?;
            }
        }
        "resource" | "resources" => {
            let resources = loader.list_resources()?;
            writeln!(out, "Resources ({}):", resources.len())?;
            for resource in resources {
                let affiliate = if resource.affiliate { " (affiliate)" } else { "" };
                writeln!(
                    out,
                    "  {}{} - {} <{}>",
                    resource.title,
                    affiliate,
                    truncate(&resource.description, 60, None),
                    resource.link
                )?;
            }
        }
        _ => {
            bail!(
                "Unknown type: {}. Available: pages, conditions, posts, resources",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, MarkdownRenderer};
    use std::fs;

    fn loader(root: &std::path::Path) -> ContentLoader {
        ContentLoader::with_store(ContentStore::new(root), MarkdownRenderer::new())
    }

    #[test]
    fn test_list_posts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        fs::write(
            dir.path().join("blog/core.md"),
            "---\ntitle: Core Basics\ndate: 2024-03-01\nauthor: Dr. Lee\n---\n",
        )
        .unwrap();

        let text = describe(&loader(dir.path()), "posts").unwrap();
        assert_eq!(
            text,
            "Posts (1):\n  March 1, 2024 - Core Basics by Dr. Lee [/blog/core]\n"
        );
    }

    #[test]
    fn test_list_empty_resources() {
        let dir = tempfile::tempdir().unwrap();
        let text = describe(&loader(dir.path()), "resources").unwrap();
        assert_eq!(text, "Resources (0):\n");
    }

    #[test]
    fn test_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe(&loader(dir.path()), "tags").is_err());
    }
}
