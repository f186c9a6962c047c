//! Run a render pass and export it

use anyhow::{Context, Result};

use crate::content::{ContentLoader, SiteContent};
use crate::generator::Generator;
use crate::Site;

/// Load all content fresh and write the route payloads
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let content = SiteContent::load(&loader)
        .with_context(|| format!("Failed to load content from {:?}", site.content_dir))?;

    let generator = Generator::new(site);
    let routes = generator.generate(&content)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} routes in {:.2}s",
        routes.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
