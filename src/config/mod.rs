//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::SiteConfig;
pub use site::{DEFAULT_SITE_URL, SITE_URL_ENV};
