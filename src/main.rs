//! CLI entry point for practice-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "practice-site")]
#[command(version)]
#[command(about = "Content pipeline for a physical-therapy practice website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load all content and export route payloads
    #[command(alias = "g")]
    Generate,

    /// List site content
    List {
        /// Type of content to list (pages, conditions, posts, resources)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Print schema.org structured data
    Schema {
        /// Schema to print (business, website, faq, post)
        kind: String,

        /// Condition or blog post slug
        slug: Option<String>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "practice_site=debug,info"
    } else {
        "practice_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Generate => {
            let site = practice_site::Site::new(&base_dir)?;
            tracing::info!("Generating from {:?}...", site.content_dir);
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::List { r#type } => {
            let site = practice_site::Site::new(&base_dir)?;
            practice_site::commands::list::run(&site, &r#type)?;
        }

        Commands::Schema { kind, slug } => {
            let site = practice_site::Site::new(&base_dir)?;
            practice_site::commands::schema::run(&site, &kind, slug.as_deref())?;
        }

        Commands::Clean => {
            let site = practice_site::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("practice-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
