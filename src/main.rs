//! docsite-config main entry point
//!
//! This is the command-line checker for documentation-site configuration files.

use anyhow::Context;
use clap::Parser;
use docsite_config::config::{load_config_with_hash, Config, NavbarItem};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// docsite-config: validate a documentation-site configuration
///
/// Loads a TOML or JSON site declaration, checks it and prints either a
/// summary or the validated configuration. Exits non-zero on the first error.
#[derive(Parser, Debug)]
#[command(name = "docsite-config")]
#[command(version)]
#[command(about = "Validate a documentation-site configuration", long_about = None)]
struct Cli {
    /// Path to TOML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the validated configuration as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = match load_config_with_hash(&cli.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if cli.json {
        let json = serde_json::to_string_pretty(&config)
            .context("failed to serialize validated configuration")?;
        println!("{}", json);
    } else if !cli.quiet {
        print_summary(&config)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docsite_config=info,warn"),
            1 => EnvFilter::new("docsite_config=debug,info"),
            2 => EnvFilter::new("docsite_config=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a human-readable overview of a validated configuration
fn print_summary(config: &Config) -> anyhow::Result<()> {
    println!("=== {} ===\n", config.site.title);

    if !config.site.tagline.is_empty() {
        println!("{}\n", config.site.tagline);
    }

    println!("Site:");
    println!("  Root: {}", config.site_root()?);
    println!(
        "  Project: {}/{}",
        config.site.organization_name, config.site.project_name
    );
    println!("  Broken links: {}", config.on_broken_links);
    println!(
        "  Broken markdown links: {}",
        config.on_broken_markdown_links
    );

    println!(
        "\nLocales: {} (default: {})",
        config.locales.locales.join(", "),
        config.locales.default_locale
    );

    println!("\nVersions ({}):", config.docs.versions.len());
    for (key, version) in &config.docs.versions {
        let marker = if *key == config.docs.current_version {
            " [current]"
        } else {
            ""
        };
        println!(
            "  - {}: {} at /{}{}",
            key, version.label, version.path, marker
        );
    }

    println!("\nSidebars ({}):", config.sidebars.len());
    for (id, docs) in &config.sidebars {
        println!("  - {} ({} docs)", id, docs.len());
    }

    println!("\nNavbar ({} items):", config.navbar.items.len());
    for item in &config.navbar.items {
        match item {
            NavbarItem::DocSidebar {
                sidebar_id, label, ..
            } => println!("  - {} -> sidebar {}", label, sidebar_id),
            NavbarItem::Link { href, label, .. } => println!("  - {} -> {}", label, href),
        }
    }

    println!("\nFooter ({} sections):", config.footer.links.len());
    for section in &config.footer.links {
        println!("  - {} ({} links)", section.title, section.items.len());
    }
    if let Some(copyright) = config.footer.current_copyright() {
        println!("  {}", copyright);
    }

    println!(
        "\nCode themes: {} / {}",
        config.themes.light, config.themes.dark
    );

    println!("\n✓ Configuration is valid");

    Ok(())
}
