//! Content module - reads, validates and assembles site content

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod model;
mod snapshot;
pub mod store;

pub use error::{ContentError, ContentResult};
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use model::{
    BlogPost, Condition, Faq, FeaturedService, GlobalSettings, HomePage, Page, PageLink, Resource,
    SocialLinks,
};
pub use snapshot::{Collection, SiteContent};
pub use store::{ContentKind, ContentStore, RawEntry};
